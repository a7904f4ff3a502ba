use dioxus::prelude::*;

use crate::routes::{route_for, Route};
use crate::session::use_session;

/// Shown when an authenticated user reaches an area their role does not
/// cover. Links back to their own landing page rather than login.
#[component]
pub fn Unauthorized() -> Element {
    let session = use_session();
    let home = session
        .role()
        .map(|r| r.default_redirect())
        .unwrap_or("/dashboard");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./unauthorized.css") }

        div { class: "unauthorized-page",
            div { class: "unauthorized-card",
                div { class: "unauthorized-code", "403" }
                h1 { class: "unauthorized-title", "Access Denied" }
                p { class: "unauthorized-message",
                    "You don't have permission to view this page."
                }
                Link { to: route_for(home),
                    class: "unauthorized-link",
                    "Back to your dashboard"
                }
            }
        }
    }
}
