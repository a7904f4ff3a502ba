use dioxus::prelude::*;
use shared_types::{LoginRequest, LoginResponse};
use shared_ui::{
    Alert, AlertDescription, AlertVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Input, Label,
};

use crate::routes::{route_for, Route};
use crate::api;
use crate::session::use_session;

/// Login page with email/password and an optional second factor.
///
/// Accepts a `redirect` query param set by the auth guard — after a
/// successful login the user lands back on the page they asked for.
/// When the backend answers `requires_2fa`, the form keeps the entered
/// credentials and adds a code field for the second attempt.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut needs_code = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let redirect_target = use_signal(move || redirect);

    // Already signed in: skip the form entirely.
    if session.is_authenticated() {
        let target = redirect_target
            .read()
            .clone()
            .or_else(|| session.role().map(|r| r.default_redirect().to_string()))
            .unwrap_or_else(|| "/dashboard".to_string());
        navigator().replace(route_for(&target));
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let request = LoginRequest {
            email: email(),
            password: password(),
            two_factor_code: code(),
        };

        match api::login(&request).await {
            Ok(LoginResponse {
                requires_2fa: true, ..
            }) => {
                needs_code.set(true);
            }
            Ok(response) => match (response.access_token, response.user) {
                (Some(token), Some(user)) => {
                    let fallback = user
                        .role()
                        .map(|r| r.default_redirect().to_string())
                        .unwrap_or_else(|| "/dashboard".to_string());
                    session.set_session(&token, user, response.employee);
                    let target = redirect_target
                        .read()
                        .clone()
                        .or(response.redirect_url)
                        .unwrap_or(fallback);
                    navigator().push(route_for(&target));
                }
                _ => {
                    tracing::error!("login response missing token or user");
                    error_msg.set(Some("Unexpected response from the server.".to_string()));
                }
            },
            Err(err) => {
                error_msg.set(Some(err.message));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription {
                        if needs_code() {
                            "Enter the code from your authenticator app"
                        } else {
                            "Enter your credentials to access the portal"
                        }
                    }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { variant: AlertVariant::Destructive,
                            AlertDescription { "{err}" }
                        }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "user@example.com",
                                value: email(),
                                disabled: needs_code(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                disabled: needs_code(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        if needs_code() {
                            div { class: "auth-field",
                                Label { html_for: "two_factor_code", "Authentication Code" }
                                Input {
                                    id: "two_factor_code",
                                    placeholder: "6-digit code",
                                    value: code(),
                                    on_input: move |e: FormEvent| code.set(e.value()),
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() {
                                "Signing in..."
                            } else if needs_code() {
                                "Verify"
                            } else {
                                "Sign In"
                            }
                        }
                    }
                }
            }
        }
    }
}
