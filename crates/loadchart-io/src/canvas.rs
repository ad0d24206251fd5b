//! Offscreen 2D canvas painting of the chart display list.
//!
//! The export never screenshots the DOM: it replays the display list
//! from `loadchart-chart` onto a detached `<canvas>` scaled to the
//! export pixel density, then reads the pixels back for encoding.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use loadchart_chart::layout::{DrawOp, Rect, TextAlign};
use loadchart_chart::{EXPORT_HEIGHT, EXPORT_SCALE, EXPORT_WIDTH};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Font stack used for all text in the exported chart.
const FONT_FAMILY: &str = "'Helvetica Neue', Arial, sans-serif";

/// Errors that can occur while painting the export canvas.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// A required global (window, document) was missing.
    #[error("browser environment unavailable: no {0}")]
    MissingGlobal(&'static str),

    /// The canvas refused to hand out a 2D rendering context.
    #[error("2d canvas context unavailable")]
    ContextUnavailable,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Create a detached canvas sized for the export.
///
/// The backing store is the logical chart size multiplied by
/// [`EXPORT_SCALE`]; the returned context is pre-scaled so the painter
/// works in logical units.
///
/// # Errors
///
/// Returns [`CanvasError::MissingGlobal`] outside a browser,
/// [`CanvasError::ContextUnavailable`] when no 2D context can be
/// obtained, and [`CanvasError::JsError`] for other API failures.
pub fn create_export_canvas() -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), CanvasError>
{
    let document = web_sys::window()
        .ok_or(CanvasError::MissingGlobal("window"))?
        .document()
        .ok_or(CanvasError::MissingGlobal("document"))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|e| CanvasError::JsError(format!("failed to cast element: {e:?}")))?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width((EXPORT_WIDTH * EXPORT_SCALE) as u32);
        canvas.set_height((EXPORT_HEIGHT * EXPORT_SCALE) as u32);
    }

    let ctx = canvas
        .get_context("2d")?
        .ok_or(CanvasError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CanvasError::ContextUnavailable)?;
    ctx.scale(EXPORT_SCALE, EXPORT_SCALE)?;

    Ok((canvas, ctx))
}

/// Replay a display list onto a 2D context, in order.
///
/// # Errors
///
/// Returns [`CanvasError::JsError`] when a drawing call fails.
pub fn paint(ctx: &CanvasRenderingContext2d, ops: &[DrawOp]) -> Result<(), CanvasError> {
    for op in ops {
        match op {
            DrawOp::Rect {
                rect,
                fill,
                stroke,
                radius,
                opacity,
            } => {
                ctx.set_global_alpha(*opacity);
                trace_rect(ctx, rect, *radius)?;
                if let Some(color) = fill {
                    ctx.set_fill_style_str(&color.css());
                    ctx.fill();
                }
                if let Some(stroke) = stroke {
                    ctx.set_stroke_style_str(&stroke.color.css());
                    ctx.set_line_width(stroke.width);
                    ctx.stroke();
                }
                ctx.set_global_alpha(1.0);
            }
            DrawOp::Text {
                x,
                y,
                content,
                size,
                color,
                bold,
                align,
            } => {
                let weight = if *bold { "bold " } else { "" };
                ctx.set_font(&format!("{weight}{size}px {FONT_FAMILY}"));
                ctx.set_text_align(match align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                    TextAlign::Right => "right",
                });
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(&color.css());
                ctx.fill_text(content, *x, *y)?;
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => {
                ctx.begin_path();
                ctx.move_to(*x1, *y1);
                ctx.line_to(*x2, *y2);
                ctx.set_stroke_style_str(&stroke.color.css());
                ctx.set_line_width(stroke.width);
                ctx.stroke();
            }
            DrawOp::Circle { cx, cy, r, fill } => {
                ctx.begin_path();
                ctx.arc(*cx, *cy, *r, 0.0, std::f64::consts::TAU)?;
                ctx.set_fill_style_str(&fill.css());
                ctx.fill();
            }
        }
    }
    Ok(())
}

/// Trace a (possibly rounded) rectangle path.
fn trace_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, radius: f64) -> Result<(), CanvasError> {
    ctx.begin_path();
    if radius <= 0.0 {
        ctx.rect(rect.x, rect.y, rect.w, rect.h);
        return Ok(());
    }

    // Corner arcs via arc_to; radius never exceeds half the short side
    // for any rect the layout produces.
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.w, rect.y + rect.h);
    ctx.move_to(left + radius, top);
    ctx.arc_to(right, top, right, bottom, radius)?;
    ctx.arc_to(right, bottom, left, bottom, radius)?;
    ctx.arc_to(left, bottom, left, top, radius)?;
    ctx.arc_to(left, top, right, top, radius)?;
    ctx.close_path();
    Ok(())
}

/// Read back the full canvas as RGBA bytes (device pixels).
///
/// `getImageData` works in backing-store coordinates, unaffected by
/// the context's logical-unit scale.
///
/// # Errors
///
/// Returns [`CanvasError::JsError`] when the read fails.
pub fn read_rgba(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
) -> Result<Vec<u8>, CanvasError> {
    let image_data =
        ctx.get_image_data(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()))?;
    Ok(image_data.data().0)
}
