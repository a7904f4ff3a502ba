use dioxus::prelude::*;

/// Fixed application sidebar.
#[component]
pub fn Sidebar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside { class: "sidebar",
            {children}
        }
    }
}

/// Brand/header area at the top of the sidebar.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

/// Scrollable middle section holding the menus.
#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-content", {children} }
    }
}

/// Vertical list of menu items.
#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-menu", {children} }
    }
}

/// One row of the sidebar menu.
#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-menu-item", {children} }
    }
}

/// Clickable body of a menu row; `active` highlights the current route.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        span {
            class: "sidebar-menu-button",
            "data-active": if active { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Pinned footer area at the bottom of the sidebar.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// Main content area beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}
