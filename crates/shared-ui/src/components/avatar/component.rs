use dioxus::prelude::*;

/// Circular user avatar. Renders children (normally an
/// [`AvatarFallback`]) when no image is supplied.
#[component]
pub fn Avatar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "avatar",
            ..attributes,
            {children}
        }
    }
}

/// Initials shown when there is no avatar image.
#[component]
pub fn AvatarFallback(children: Element) -> Element {
    rsx! {
        span { class: "avatar-fallback", {children} }
    }
}
