//! Export layout as a display list of draw operations.
//!
//! [`chart_draw_ops`] turns a [`ChartState`] into the ordered list of
//! rectangles, text runs, lines, and circles that make up the exported
//! chart: header band, four quadrant panels, and the van reference
//! figure. The list is pure data in logical coordinates; the canvas
//! painter in `loadchart-io` executes it at the export pixel density.
//!
//! Painter's order: earlier operations are drawn first and later ones
//! on top.

use crate::state::{ChartState, Quadrant, SLOTS_PER_QUADRANT, slot_is_blank};
use crate::theme::{self, Color};

/// Logical width of the exported chart, in layout units.
pub const EXPORT_WIDTH: f64 = 1600.0;

/// Logical height of the exported chart, in layout units.
pub const EXPORT_HEIGHT: f64 = 990.0;

/// Pixel density multiplier applied on export (one layout unit becomes
/// two device pixels).
pub const EXPORT_SCALE: f64 = 2.0;

/// Placeholder shown for the route name while it is unset.
pub const ROUTE_PLACEHOLDER: &str = "e.g. KR1A";

/// Tagline printed in the header band.
pub const TAGLINE: &str = "Excellence. Simply delivered.";

/// Caption under the van reference figure.
pub const VAN_CAPTION: &str = "Van layout (reference)";

/// Opacity applied to a blank slot's box, fading it to a ghost.
pub const BLANK_SLOT_OPACITY: f64 = 0.15;

const CARD_RADIUS: f64 = 14.0;
const HEADER_HEIGHT: f64 = 110.0;
const HEADER_BORDER: f64 = 2.5;
const ROUTE_TEXT_SIZE: f64 = 44.0;
const TAGLINE_TEXT_SIZE: f64 = 20.0;

const SIDE_MARGIN: f64 = 32.0;
const COLUMN_GAP: f64 = 80.0;
const CENTER_COLUMN_WIDTH: f64 = 480.0;
const CONTENT_TOP: f64 = HEADER_HEIGHT + 40.0;
const CONTENT_BOTTOM_MARGIN: f64 = 24.0;

const PANEL_WIDTH: f64 = 440.0;
const PANEL_RADIUS: f64 = 12.0;
const PANEL_PADDING: f64 = 18.0;
const PANEL_BORDER: f64 = 2.5;
const PANEL_GAP: f64 = 60.0;
const TITLE_HEIGHT: f64 = 30.0;
const TITLE_TEXT_SIZE: f64 = 22.0;

const SLOT_HEIGHT: f64 = 36.0;
const SLOT_GAP: f64 = 8.0;
const SLOT_RADIUS: f64 = 8.0;
const SLOT_TEXT_SIZE: f64 = 18.0;
const SLOT_TEXT_INSET: f64 = 8.0;
const FILLED_SLOT_BORDER: f64 = 2.5;
const BLANK_SLOT_BORDER: f64 = 1.5;

const PANEL_HEIGHT: f64 = PANEL_PADDING * 2.0
    + TITLE_HEIGHT
    + SLOT_HEIGHT * SLOTS_PER_QUADRANT as f64
    + SLOT_GAP * (SLOTS_PER_QUADRANT as f64 - 1.0);

const VAN_WIDTH: f64 = 440.0;
const VAN_HEIGHT: f64 = 240.0;
const CAPTION_TEXT_SIZE: f64 = 14.0;

/// An axis-aligned rectangle in logical layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Whether `other` lies entirely inside `self`.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }
}

/// A stroke: color plus line width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Line width in layout units.
    pub width: f64,
}

/// Horizontal anchoring of a text run at its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `x` is the left edge.
    Left,
    /// `x` is the center.
    Center,
    /// `x` is the right edge.
    Right,
}

/// One drawing operation of the export display list.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A filled and/or stroked (optionally rounded) rectangle.
    Rect {
        /// Geometry.
        rect: Rect,
        /// Interior fill, if any.
        fill: Option<Color>,
        /// Border stroke, if any.
        stroke: Option<Stroke>,
        /// Corner radius; `0.0` for square corners.
        radius: f64,
        /// Alpha applied to both fill and stroke.
        opacity: f64,
    },
    /// A single-line text run. `y` is the vertical center of the line.
    Text {
        /// Anchor x (interpreted per `align`).
        x: f64,
        /// Vertical center of the text line.
        y: f64,
        /// The text to draw.
        content: String,
        /// Font size in layout units.
        size: f64,
        /// Fill color.
        color: Color,
        /// Bold weight when `true`.
        bold: bool,
        /// Horizontal anchoring.
        align: TextAlign,
    },
    /// A straight line segment.
    Line {
        /// Start x.
        x1: f64,
        /// Start y.
        y1: f64,
        /// End x.
        x2: f64,
        /// End y.
        y2: f64,
        /// Stroke color and width.
        stroke: Stroke,
    },
    /// A filled circle.
    Circle {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
        /// Fill color.
        fill: Color,
    },
}

/// Left x of the side column holding `quadrant`'s panel.
fn column_x(quadrant: Quadrant) -> f64 {
    let side_column_width =
        (EXPORT_WIDTH - 2.0 * SIDE_MARGIN - 2.0 * COLUMN_GAP - CENTER_COLUMN_WIDTH) / 2.0;
    match quadrant {
        // Road side on the left, curb side on the right.
        Quadrant::Q2 | Quadrant::Q4 => SIDE_MARGIN,
        Quadrant::Q1 | Quadrant::Q3 => {
            SIDE_MARGIN + side_column_width + COLUMN_GAP + CENTER_COLUMN_WIDTH + COLUMN_GAP
        }
    }
}

/// Top y of the two-panel stack, vertically centered in the content
/// region below the header.
fn stack_top() -> f64 {
    let content_height = EXPORT_HEIGHT - CONTENT_TOP - CONTENT_BOTTOM_MARGIN;
    let stack_height = 2.0 * PANEL_HEIGHT + PANEL_GAP;
    CONTENT_TOP + (content_height - stack_height) / 2.0
}

/// Bounding box of one quadrant's panel.
#[must_use]
pub fn panel_rect(quadrant: Quadrant) -> Rect {
    let side_column_width =
        (EXPORT_WIDTH - 2.0 * SIDE_MARGIN - 2.0 * COLUMN_GAP - CENTER_COLUMN_WIDTH) / 2.0;
    let x = column_x(quadrant) + (side_column_width - PANEL_WIDTH) / 2.0;
    let y = match quadrant {
        Quadrant::Q1 | Quadrant::Q2 => stack_top(),
        Quadrant::Q3 | Quadrant::Q4 => stack_top() + PANEL_HEIGHT + PANEL_GAP,
    };
    Rect::new(x, y, PANEL_WIDTH, PANEL_HEIGHT)
}

/// Bounding box of one location slot's input box.
///
/// `index` must be in `0..SLOTS_PER_QUADRANT`; this is a layout helper
/// and callers iterate the fixed slot range.
#[must_use]
pub fn slot_rect(quadrant: Quadrant, index: usize) -> Rect {
    let panel = panel_rect(quadrant);
    #[allow(clippy::cast_precision_loss)]
    let row = index as f64;
    Rect::new(
        panel.x + PANEL_PADDING,
        panel.y + PANEL_PADDING + TITLE_HEIGHT + row * (SLOT_HEIGHT + SLOT_GAP),
        PANEL_WIDTH - 2.0 * PANEL_PADDING,
        SLOT_HEIGHT,
    )
}

/// Bounding box of the van reference figure (frame only, caption
/// excluded), centered in the middle column.
fn van_rect() -> Rect {
    let x = (EXPORT_WIDTH - VAN_WIDTH) / 2.0;
    let stack_height = 2.0 * PANEL_HEIGHT + PANEL_GAP;
    let y = stack_top() + (stack_height - VAN_HEIGHT - 40.0) / 2.0;
    Rect::new(x, y, VAN_WIDTH, VAN_HEIGHT)
}

/// Build the export display list for the current chart state.
#[must_use]
pub fn chart_draw_ops(state: &ChartState) -> Vec<DrawOp> {
    let mut ops = Vec::new();

    // Background fill, then the white card over it.
    ops.push(DrawOp::Rect {
        rect: Rect::new(0.0, 0.0, EXPORT_WIDTH, EXPORT_HEIGHT),
        fill: Some(theme::CREAM),
        stroke: None,
        radius: 0.0,
        opacity: 1.0,
    });
    ops.push(DrawOp::Rect {
        rect: Rect::new(0.0, 0.0, EXPORT_WIDTH, EXPORT_HEIGHT),
        fill: Some(theme::CARD),
        stroke: None,
        radius: CARD_RADIUS,
        opacity: 1.0,
    });

    header_ops(state, &mut ops);
    for quadrant in Quadrant::ALL {
        panel_ops(state, quadrant, &mut ops);
    }
    van_figure_ops(&mut ops);

    ops
}

/// Header band: yellow fill, red border, route name, tagline.
fn header_ops(state: &ChartState, ops: &mut Vec<DrawOp>) {
    ops.push(DrawOp::Rect {
        rect: Rect::new(0.0, 0.0, EXPORT_WIDTH, HEADER_HEIGHT),
        fill: Some(theme::ACCENT),
        stroke: Some(Stroke {
            color: theme::BRAND,
            width: HEADER_BORDER,
        }),
        radius: CARD_RADIUS,
        opacity: 1.0,
    });

    let (route_text, route_color) = if state.route_name.is_empty() {
        (ROUTE_PLACEHOLDER.to_owned(), theme::PLACEHOLDER)
    } else {
        (state.route_name.clone(), theme::BRAND)
    };
    ops.push(DrawOp::Text {
        x: EXPORT_WIDTH / 2.0,
        y: HEADER_HEIGHT / 2.0,
        content: route_text,
        size: ROUTE_TEXT_SIZE,
        color: route_color,
        bold: true,
        align: TextAlign::Center,
    });

    ops.push(DrawOp::Text {
        x: EXPORT_WIDTH - SIDE_MARGIN,
        y: HEADER_HEIGHT - TAGLINE_TEXT_SIZE,
        content: TAGLINE.to_owned(),
        size: TAGLINE_TEXT_SIZE,
        color: theme::BRAND,
        bold: true,
        align: TextAlign::Right,
    });
}

/// One quadrant panel: bordered box, title, four slot boxes.
fn panel_ops(state: &ChartState, quadrant: Quadrant, ops: &mut Vec<DrawOp>) {
    let panel = panel_rect(quadrant);
    ops.push(DrawOp::Rect {
        rect: panel,
        fill: Some(theme::CREAM),
        stroke: Some(Stroke {
            color: theme::BRAND,
            width: PANEL_BORDER,
        }),
        radius: PANEL_RADIUS,
        opacity: 1.0,
    });

    ops.push(DrawOp::Text {
        x: panel.x + PANEL_PADDING,
        y: panel.y + PANEL_PADDING + TITLE_HEIGHT / 2.0,
        content: quadrant.title().to_owned(),
        size: TITLE_TEXT_SIZE,
        color: theme::BRAND,
        bold: true,
        align: TextAlign::Left,
    });

    for (index, text) in state.slots(quadrant).iter().enumerate() {
        let rect = slot_rect(quadrant, index);
        if slot_is_blank(text) {
            // Ghosted box only; blank slots print no text.
            ops.push(DrawOp::Rect {
                rect,
                fill: Some(theme::CREAM),
                stroke: Some(Stroke {
                    color: theme::ACCENT,
                    width: BLANK_SLOT_BORDER,
                }),
                radius: SLOT_RADIUS,
                opacity: BLANK_SLOT_OPACITY,
            });
        } else {
            ops.push(DrawOp::Rect {
                rect,
                fill: Some(theme::CARD),
                stroke: Some(Stroke {
                    color: theme::BRAND,
                    width: FILLED_SLOT_BORDER,
                }),
                radius: SLOT_RADIUS,
                opacity: 1.0,
            });
            ops.push(DrawOp::Text {
                x: rect.x + SLOT_TEXT_INSET,
                y: rect.y + rect.h / 2.0,
                content: text.clone(),
                size: SLOT_TEXT_SIZE,
                color: theme::INK,
                bold: false,
                align: TextAlign::Left,
            });
        }
    }
}

/// Schematic van: framed figure with cab, cargo area split into the
/// four labelled zones, wheels, and a caption underneath.
fn van_figure_ops(ops: &mut Vec<DrawOp>) {
    let van = van_rect();

    // Outer frame, yellow-bordered like the reference photo it replaces.
    ops.push(DrawOp::Rect {
        rect: van,
        fill: Some(theme::CARD),
        stroke: Some(Stroke {
            color: theme::ACCENT,
            width: 2.5,
        }),
        radius: PANEL_RADIUS,
        opacity: 1.0,
    });

    // Cab at the front (left), cargo box behind it.
    let cab = Rect::new(van.x + 16.0, van.y + 35.0, 70.0, van.h - 70.0);
    ops.push(DrawOp::Rect {
        rect: cab,
        fill: Some(theme::CREAM),
        stroke: Some(Stroke {
            color: theme::BRAND,
            width: 2.0,
        }),
        radius: SLOT_RADIUS,
        opacity: 1.0,
    });
    ops.push(DrawOp::Text {
        x: cab.x + cab.w / 2.0,
        y: cab.y + cab.h / 2.0,
        content: "Cab".to_owned(),
        size: CAPTION_TEXT_SIZE,
        color: theme::MUTED,
        bold: false,
        align: TextAlign::Center,
    });

    let cargo = Rect::new(cab.x + cab.w + 16.0, van.y + 20.0, 320.0, van.h - 40.0);
    ops.push(DrawOp::Rect {
        rect: cargo,
        fill: Some(theme::CREAM),
        stroke: Some(Stroke {
            color: theme::BRAND,
            width: 2.5,
        }),
        radius: SLOT_RADIUS,
        opacity: 1.0,
    });

    // Cross dividers splitting the cargo area into four zones.
    let mid_x = cargo.x + cargo.w / 2.0;
    let mid_y = cargo.y + cargo.h / 2.0;
    let divider = Stroke {
        color: theme::BRAND,
        width: 1.5,
    };
    ops.push(DrawOp::Line {
        x1: mid_x,
        y1: cargo.y,
        x2: mid_x,
        y2: cargo.y + cargo.h,
        stroke: divider,
    });
    ops.push(DrawOp::Line {
        x1: cargo.x,
        y1: mid_y,
        x2: cargo.x + cargo.w,
        y2: mid_y,
        stroke: divider,
    });

    // Zone labels: front zones (Q1/Q2) toward the cab, curb side (Q1/Q3)
    // on top in this plan view.
    let zone_centers = [
        (Quadrant::Q1, cargo.x + cargo.w / 4.0, cargo.y + cargo.h / 4.0),
        (Quadrant::Q2, cargo.x + cargo.w / 4.0, mid_y + cargo.h / 4.0),
        (Quadrant::Q3, mid_x + cargo.w / 4.0, cargo.y + cargo.h / 4.0),
        (Quadrant::Q4, mid_x + cargo.w / 4.0, mid_y + cargo.h / 4.0),
    ];
    for (quadrant, cx, cy) in zone_centers {
        ops.push(DrawOp::Text {
            x: cx,
            y: cy,
            content: quadrant.short_label().to_owned(),
            size: TITLE_TEXT_SIZE,
            color: theme::BRAND,
            bold: true,
            align: TextAlign::Center,
        });
    }

    // Wheels straddling the frame's bottom edge.
    for cx in [van.x + 90.0, van.x + van.w - 90.0] {
        ops.push(DrawOp::Circle {
            cx,
            cy: van.y + van.h,
            r: 14.0,
            fill: theme::INK,
        });
    }

    ops.push(DrawOp::Text {
        x: van.x + van.w / 2.0,
        y: van.y + van.h + 34.0,
        content: VAN_CAPTION.to_owned(),
        size: CAPTION_TEXT_SIZE,
        color: theme::MUTED,
        bold: false,
        align: TextAlign::Center,
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const LOGICAL_BOUNDS: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: EXPORT_WIDTH,
        h: EXPORT_HEIGHT,
    };

    fn text_ops(ops: &[DrawOp]) -> Vec<&str> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    fn blank_slot_count(ops: &[DrawOp]) -> usize {
        ops.iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::Rect { opacity, .. } if (*opacity - BLANK_SLOT_OPACITY).abs() < f64::EPSILON
                )
            })
            .count()
    }

    #[test]
    fn first_op_is_full_bleed_background() {
        let ops = chart_draw_ops(&ChartState::default());
        assert!(matches!(
            ops.first(),
            Some(DrawOp::Rect {
                rect,
                fill: Some(fill),
                ..
            }) if *rect == LOGICAL_BOUNDS && *fill == crate::theme::CREAM
        ));
    }

    #[test]
    fn panels_do_not_overlap_and_sit_inside_bounds() {
        for quadrant in Quadrant::ALL {
            let panel = panel_rect(quadrant);
            assert!(
                LOGICAL_BOUNDS.contains(&panel),
                "{quadrant} panel out of bounds: {panel:?}"
            );
            assert!(panel.y >= HEADER_HEIGHT, "{quadrant} panel under header");
        }
        // Left/right columns are disjoint, as are top/bottom rows.
        let q2 = panel_rect(Quadrant::Q2);
        let q1 = panel_rect(Quadrant::Q1);
        assert!(q2.x + q2.w < q1.x);
        let q4 = panel_rect(Quadrant::Q4);
        assert!(q2.y + q2.h < q4.y);
    }

    #[test]
    fn sixteen_distinct_slot_rects_inside_their_panels() {
        let mut seen = Vec::new();
        for quadrant in Quadrant::ALL {
            let panel = panel_rect(quadrant);
            for index in 0..SLOTS_PER_QUADRANT {
                let rect = slot_rect(quadrant, index);
                assert!(
                    panel.contains(&rect),
                    "slot {quadrant}/{index} escapes its panel"
                );
                assert!(!seen.contains(&rect), "duplicate slot rect {rect:?}");
                seen.push(rect);
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn default_state_renders_all_slots_blank_with_placeholder_route() {
        let ops = chart_draw_ops(&ChartState::default());
        assert_eq!(blank_slot_count(&ops), 16);

        let texts = text_ops(&ops);
        assert!(texts.contains(&ROUTE_PLACEHOLDER));
        assert!(texts.contains(&TAGLINE));
        assert!(texts.contains(&VAN_CAPTION));
        for quadrant in Quadrant::ALL {
            assert!(texts.contains(&quadrant.title()));
        }
    }

    #[test]
    fn route_name_replaces_placeholder() {
        let state = ChartState::default().with_route_name("KR1A");
        let texts: Vec<String> = text_ops(&chart_draw_ops(&state))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(texts.iter().any(|t| t == "KR1A"));
        assert!(!texts.iter().any(|t| t == ROUTE_PLACEHOLDER));
    }

    #[test]
    fn filled_slot_gets_opaque_box_and_text() {
        let state = ChartState::default()
            .with_location(Quadrant::Q1, 0, "Maple St")
            .unwrap();
        let ops = chart_draw_ops(&state);

        assert_eq!(blank_slot_count(&ops), 15);
        let rect = slot_rect(Quadrant::Q1, 0);
        assert!(ops.iter().any(|op| matches!(
            op,
            DrawOp::Rect { rect: r, opacity, fill: Some(fill), .. }
                if *r == rect && (*opacity - 1.0).abs() < f64::EPSILON && *fill == crate::theme::CARD
        )));
        assert!(text_ops(&ops).contains(&"Maple St"));
    }

    #[test]
    fn whitespace_only_slot_stays_blank() {
        let state = ChartState::default()
            .with_location(Quadrant::Q2, 3, "   ")
            .unwrap();
        let ops = chart_draw_ops(&state);
        assert_eq!(blank_slot_count(&ops), 16);
        assert!(!text_ops(&ops).contains(&"   "));
    }

    #[test]
    fn every_op_stays_inside_logical_bounds() {
        let mut state = ChartState::default().with_route_name("KR1A");
        for quadrant in Quadrant::ALL {
            for index in 0..SLOTS_PER_QUADRANT {
                state = state
                    .with_location(quadrant, index, format!("{quadrant} stop {index}"))
                    .unwrap();
            }
        }

        for op in chart_draw_ops(&state) {
            match op {
                DrawOp::Rect { rect, .. } => {
                    assert!(LOGICAL_BOUNDS.contains(&rect), "rect out of bounds: {rect:?}");
                }
                DrawOp::Text { x, y, .. } => {
                    assert!((0.0..=EXPORT_WIDTH).contains(&x), "text x out of bounds: {x}");
                    assert!((0.0..=EXPORT_HEIGHT).contains(&y), "text y out of bounds: {y}");
                }
                DrawOp::Line { x1, y1, x2, y2, .. } => {
                    for x in [x1, x2] {
                        assert!((0.0..=EXPORT_WIDTH).contains(&x));
                    }
                    for y in [y1, y2] {
                        assert!((0.0..=EXPORT_HEIGHT).contains(&y));
                    }
                }
                DrawOp::Circle { cx, cy, r, .. } => {
                    assert!(cx - r >= 0.0 && cx + r <= EXPORT_WIDTH);
                    assert!(cy - r >= 0.0 && cy + r <= EXPORT_HEIGHT);
                }
            }
        }
    }
}
