use dioxus::prelude::*;

/// Top navigation bar container.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar",
            {children}
        }
    }
}
