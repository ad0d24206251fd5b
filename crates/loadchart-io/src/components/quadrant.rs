//! One quadrant's panel of four location inputs.

use dioxus::prelude::*;
use loadchart_chart::{Quadrant, SLOTS_PER_QUADRANT, slot_is_blank};

/// Placeholder shown inside every location slot.
const SLOT_PLACEHOLDER: &str = "Town or street";

/// Props for the [`QuadrantPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct QuadrantPanelProps {
    /// Which quadrant this panel edits (fixes the title).
    quadrant: Quadrant,
    /// Current slot texts, in slot order.
    slots: [String; SLOTS_PER_QUADRANT],
    /// Fired with `(slot index, new text)` on every keystroke.
    on_change: EventHandler<(usize, String)>,
}

/// A bordered panel with the quadrant title and four text inputs.
///
/// Each input's styling is derived from its text on every render:
/// blank (trimmed-empty) slots get the faint ghosted treatment, filled
/// slots the opaque bordered one. Nothing about "filled" is stored.
#[component]
pub fn QuadrantPanel(props: QuadrantPanelProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        section { class: "quadrant-panel",
            h2 { class: "quadrant-title", "{props.quadrant}" }
            for (index, text) in props.slots.iter().enumerate() {
                input {
                    key: "{index}",
                    class: if slot_is_blank(text) {
                        "slot-input slot-blank"
                    } else {
                        "slot-input slot-filled"
                    },
                    r#type: "text",
                    value: "{text}",
                    placeholder: SLOT_PLACEHOLDER,
                    oninput: move |evt| on_change.call((index, evt.value())),
                }
            }
        }
    }
}
