use dioxus::prelude::*;

/// Visual variant for alerts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Destructive,
}

impl AlertVariant {
    fn style(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Destructive => "destructive",
        }
    }
}

/// Inline callout for form feedback and errors.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "alert",
            "data-style": variant.style(),
            role: "alert",
            ..attributes,
            {children}
        }
    }
}

/// Body text of an Alert.
#[component]
pub fn AlertDescription(children: Element) -> Element {
    rsx! {
        p { class: "alert-description", {children} }
    }
}
