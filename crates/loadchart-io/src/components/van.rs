//! Static van reference figure.

use dioxus::prelude::*;
use loadchart_chart::layout::VAN_CAPTION;
use loadchart_chart::{Quadrant, theme};

/// Plan-view schematic of the van with its four labelled cargo zones.
///
/// Drawn as an inline SVG so the app ships no binary assets. Purely
/// decorative reference; it takes no props and never re-renders from
/// state.
#[component]
pub fn VanFigure() -> Element {
    let brand = theme::BRAND.css();
    let accent = theme::ACCENT.css();
    let cream = theme::CREAM.css();
    let ink = theme::INK.css();
    let muted = theme::MUTED.css();

    let zone_label_style = format!(
        "fill:{brand};font-size:22px;font-weight:bold;text-anchor:middle;dominant-baseline:middle"
    );
    // Zone centers: front zones toward the cab (left), Q1/Q3 on top.
    let zones = [
        (Quadrant::Q1.short_label(), 186.0, 70.0),
        (Quadrant::Q2.short_label(), 186.0, 170.0),
        (Quadrant::Q3.short_label(), 346.0, 70.0),
        (Quadrant::Q4.short_label(), 346.0, 170.0),
    ];

    rsx! {
        figure { class: "van-figure",
            svg {
                class: "van-svg",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 440 260",
                "preserveAspectRatio": "xMidYMid meet",

                // Outer frame.
                rect {
                    x: "4", y: "4", width: "432", height: "232", rx: "12",
                    fill: "white", stroke: "{accent}", stroke_width: "2.5",
                }

                // Cab at the front (left).
                rect {
                    x: "20", y: "40", width: "70", height: "160", rx: "8",
                    fill: "{cream}", stroke: "{brand}", stroke_width: "2",
                }
                text {
                    x: "55", y: "125",
                    style: "fill:{muted};font-size:14px;text-anchor:middle;dominant-baseline:middle",
                    "Cab"
                }

                // Cargo area split into the four zones.
                rect {
                    x: "106", y: "20", width: "320", height: "200", rx: "8",
                    fill: "{cream}", stroke: "{brand}", stroke_width: "2.5",
                }
                line {
                    x1: "266", y1: "20", x2: "266", y2: "220",
                    stroke: "{brand}", stroke_width: "1.5",
                }
                line {
                    x1: "106", y1: "120", x2: "426", y2: "120",
                    stroke: "{brand}", stroke_width: "1.5",
                }

                for (label, cx, cy) in zones {
                    text {
                        key: "{label}",
                        x: "{cx}",
                        y: "{cy}",
                        style: "{zone_label_style}",
                        {label}
                    }
                }

                // Wheels.
                circle { cx: "90", cy: "240", r: "14", fill: "{ink}" }
                circle { cx: "350", cy: "240", r: "14", fill: "{ink}" }
            }
            figcaption { class: "van-caption", {VAN_CAPTION} }
        }
    }
}
