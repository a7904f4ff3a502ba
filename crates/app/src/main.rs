use dioxus::prelude::*;

mod api;
mod config;
mod gate;
mod routes;
mod session;
mod storage;

use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut session = use_context_provider(SessionState::new);

    // Restore the session from a stored token on startup. The guard
    // holds every protected route in its loading state until this
    // resolves, so a reload never flashes the login page.
    use_future(move || async move {
        if let Some(token) = storage::token() {
            match api::fetch_profile(&token).await {
                Ok(profile) => {
                    session.user.set(Some(profile.user));
                    session.employee.set(profile.employee);
                }
                Err(err) => {
                    tracing::warn!("session restore failed: {err}");
                    if err.invalidates_session() {
                        storage::clear_token();
                    }
                }
            }
        }
        session.restoring.set(false);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
