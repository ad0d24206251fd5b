use dioxus::prelude::*;
use loadchart_chart::{ChartState, Quadrant};
use loadchart_io::{ActionBar, QuadrantPanel, RouteHeader, VanFigure};
use wasm_bindgen::JsValue;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the whole chart state in a single signal and wires the header,
/// quadrant panels, van figure, and action bar together. Every edit
/// replaces the state value; nothing is mutated in place and nothing
/// is persisted.
fn app() -> Element {
    let mut state = use_signal(ChartState::default);
    let chart = state();

    // --- Route name handlers ---
    let on_route_input = move |text: String| {
        let next = state().with_route_name(text);
        state.set(next);
    };
    let on_commit = move |()| {
        let next = state().with_editing(false);
        state.set(next);
    };
    let on_edit = move |()| {
        let next = state().with_editing(true);
        state.set(next);
    };

    // --- Location slot handler ---
    // The panels only ever emit indices for their own four inputs, so
    // the out-of-range arm is unreachable from the UI; log it rather
    // than surface it.
    let mut set_location = move |quadrant: Quadrant, index: usize, text: String| {
        match state().with_location(quadrant, index, text) {
            Ok(next) => state.set(next),
            Err(e) => log_error(&format!("rejected location edit: {e}")),
        }
    };

    // --- Actions ---
    let on_clear = move |()| state.set(ChartState::reset());

    // Fire-and-forget: snapshot the state, yield one tick so the click
    // paints, then rasterize/encode/download. Concurrent exports are
    // allowed and independent; a failure is logged and not surfaced.
    let on_export = move |()| {
        let snapshot = state();
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            if let Err(e) = loadchart_io::export_chart_jpeg(&snapshot) {
                log_error(&format!("chart export failed: {e}"));
            }
        });
    };

    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            div { class: "chart-card",
                RouteHeader {
                    route_name: chart.route_name.clone(),
                    editing: chart.editing_route,
                    on_route_input: on_route_input,
                    on_commit: on_commit,
                    on_edit: on_edit,
                }

                div { class: "chart-grid",
                    // Road side on the left of the chart.
                    div { class: "quadrant-column",
                        QuadrantPanel {
                            quadrant: Quadrant::Q2,
                            slots: chart.slots(Quadrant::Q2).clone(),
                            on_change: move |(index, text): (usize, String)| {
                                set_location(Quadrant::Q2, index, text);
                            },
                        }
                        QuadrantPanel {
                            quadrant: Quadrant::Q4,
                            slots: chart.slots(Quadrant::Q4).clone(),
                            on_change: move |(index, text): (usize, String)| {
                                set_location(Quadrant::Q4, index, text);
                            },
                        }
                    }

                    VanFigure {}

                    div { class: "quadrant-column",
                        QuadrantPanel {
                            quadrant: Quadrant::Q1,
                            slots: chart.slots(Quadrant::Q1).clone(),
                            on_change: move |(index, text): (usize, String)| {
                                set_location(Quadrant::Q1, index, text);
                            },
                        }
                        QuadrantPanel {
                            quadrant: Quadrant::Q3,
                            slots: chart.slots(Quadrant::Q3).clone(),
                            on_change: move |(index, text): (usize, String)| {
                                set_location(Quadrant::Q3, index, text);
                            },
                        }
                    }
                }
            }

            ActionBar {
                on_clear: on_clear,
                on_export: on_export,
            }

            footer { class: "page-footer", "© {year} Van Load Chart" }
        }
    }
}

/// Log a non-fatal failure to the browser console.
fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
