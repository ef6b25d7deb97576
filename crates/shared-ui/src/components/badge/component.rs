use dioxus::prelude::*;

/// Visual variant for status badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// Draft, still editable locally.
    #[default]
    Pending,
    /// Protocoled by the backend.
    Success,
    Neutral,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Pending => "pending",
            BadgeVariant::Success => "success",
            BadgeVariant::Neutral => "neutral",
        }
    }
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-style": variant.class(), {children} }
    }
}
