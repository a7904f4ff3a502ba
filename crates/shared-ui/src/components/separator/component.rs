use dioxus::prelude::*;

/// Thin divider line. `horizontal: false` renders a vertical rule for
/// use inside toolbars and navbars.
#[component]
pub fn Separator(#[props(default = true)] horizontal: bool) -> Element {
    let orientation = if horizontal { "horizontal" } else { "vertical" };
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "separator",
            role: "separator",
            "data-orientation": orientation,
        }
    }
}
