use dioxus::prelude::*;

/// Placeholder shown in place of an empty list, with an optional call to action.
#[component]
pub fn EmptyState(
    #[props(into)] title: String,
    #[props(into)] description: String,
    icon: Element,
    action: Option<Element>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state-icon", {icon} }
            h4 { class: "empty-state-title", "{title}" }
            p { class: "empty-state-description", "{description}" }
            {action}
        }
    }
}
