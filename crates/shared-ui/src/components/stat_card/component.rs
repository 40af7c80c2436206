use dioxus::prelude::*;

/// Responsive row of [`StatCard`]s. Loads the shared stat styles.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-grid", {children} }
    }
}

/// A labelled counter with a leading icon.
#[component]
pub fn StatCard(
    #[props(into)] label: String,
    value: usize,
    #[props(into, default = "green".to_string())] tone: String,
    icon: Element,
) -> Element {
    rsx! {
        div { class: "stat-card", "data-tone": "{tone}",
            div { class: "stat-card-icon", {icon} }
            div { class: "stat-card-body",
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_and_value() {
        let html = dioxus_ssr::render_element(rsx! {
            StatCard { label: "Available Jobs", value: 7usize, tone: "purple", icon: rsx! { span { "i" } } }
        });
        assert!(html.contains("Available Jobs"));
        assert!(html.contains(">7<"));
        assert!(html.contains(r#"data-tone="purple""#));
    }
}
