use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Solid,
    Soft,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Solid => "solid",
            BadgeVariant::Soft => "soft",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline pill label. `tone` picks the colour family (`green`, `yellow`,
/// `blue`, `cyan`, `purple`, `red`, `orange`, `gray`).
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(into, default = "gray".to_string())] tone: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("data-tone", tone, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
