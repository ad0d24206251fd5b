//! Clear All / Export as JPEG action buttons.

use dioxus::prelude::*;

/// Props for the [`ActionBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ActionBarProps {
    /// Fired when "Clear All" is clicked. No confirmation step.
    on_clear: EventHandler<()>,
    /// Fired when "Export as JPEG" is clicked. No confirmation step,
    /// no de-duplication; a second click during an in-flight export
    /// starts another independent export.
    on_export: EventHandler<()>,
}

/// The two chart-level commands, rendered below the chart card.
#[component]
pub fn ActionBar(props: ActionBarProps) -> Element {
    rsx! {
        div { class: "action-bar",
            button {
                class: "btn btn-clear",
                onclick: move |_| props.on_clear.call(()),
                "Clear All"
            }
            button {
                class: "btn btn-export",
                onclick: move |_| props.on_export.call(()),
                "Export as JPEG"
            }
        }
    }
}
