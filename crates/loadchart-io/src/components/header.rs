//! Header band with the editable route name and the tagline.

use dioxus::prelude::*;
use loadchart_chart::layout::{ROUTE_PLACEHOLDER, TAGLINE};

/// Props for the [`RouteHeader`] component.
#[derive(Props, Clone, PartialEq)]
pub struct RouteHeaderProps {
    /// Current route name (shown verbatim).
    route_name: String,
    /// Whether the name renders as a live input or a static label.
    editing: bool,
    /// Fired with the new text on every keystroke while editing.
    on_route_input: EventHandler<String>,
    /// Fired when editing ends (blur or Enter).
    on_commit: EventHandler<()>,
    /// Fired when the static label is clicked to re-enter edit mode.
    on_edit: EventHandler<()>,
}

/// The chart header: route name plus tagline.
///
/// Two-state field: while `editing` is true an autofocused input shows
/// the live value; otherwise the value renders as a clickable label
/// (grey placeholder when empty). Blur or Enter commits; a click on
/// the label re-opens editing. No other event changes the mode.
#[component]
pub fn RouteHeader(props: RouteHeaderProps) -> Element {
    let on_route_input = props.on_route_input;
    let on_commit = props.on_commit;
    let on_edit = props.on_edit;

    rsx! {
        header { class: "chart-header",
            if props.editing {
                input {
                    class: "route-input",
                    value: "{props.route_name}",
                    placeholder: ROUTE_PLACEHOLDER,
                    autofocus: true,
                    oninput: move |evt| on_route_input.call(evt.value()),
                    onblur: move |_| on_commit.call(()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            on_commit.call(());
                        }
                    },
                }
            } else {
                div {
                    class: "route-display",
                    title: "Click to edit route name",
                    onclick: move |_| on_edit.call(()),
                    if props.route_name.is_empty() {
                        span { class: "route-placeholder", {ROUTE_PLACEHOLDER} }
                    } else {
                        "{props.route_name}"
                    }
                }
            }
            p { class: "tagline", {TAGLINE} }
        }
    }
}
