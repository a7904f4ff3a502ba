use dioxus::prelude::*;
use shared_types::ChangePasswordRequest;
use shared_ui::{
    Alert, AlertDescription, AlertVariant, Badge, BadgeVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Input, Label, PageHeader, PageTitle, Separator,
};

use crate::session::use_session;
use crate::{api, storage};

/// Account settings: profile summary plus the change-password form.
#[component]
pub fn Settings() -> Element {
    let session = use_session();

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut feedback = use_signal(|| Option::<(bool, String)>::None);
    let mut saving = use_signal(|| false);

    let email = session
        .user
        .read()
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();
    let two_factor = session
        .user
        .read()
        .as_ref()
        .map(|u| u.two_factor_enabled)
        .unwrap_or(false);
    let role = session.role();
    let employee = session.employee.read().clone();

    let handle_change_password = move |evt: FormEvent| async move {
        evt.prevent_default();
        feedback.set(None);

        if new_password().len() < 8 {
            feedback.set(Some((
                false,
                "New password must be at least 8 characters.".to_string(),
            )));
            return;
        }
        if new_password() != confirm_password() {
            feedback.set(Some((false, "Passwords do not match.".to_string())));
            return;
        }

        let Some(token) = storage::token() else {
            feedback.set(Some((false, "Your session has expired.".to_string())));
            return;
        };

        saving.set(true);
        let request = ChangePasswordRequest {
            current_password: current_password(),
            new_password: new_password(),
            confirm_password: confirm_password(),
        };
        match api::change_password(&token, &request).await {
            Ok(response) => {
                feedback.set(Some((true, response.message)));
                current_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
            }
            Err(err) => {
                feedback.set(Some((false, err.message)));
            }
        }
        saving.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        PageHeader {
            PageTitle { "Settings" }
        }

        div { class: "settings-grid",
            Card {
                CardHeader {
                    CardTitle { "Account" }
                    CardDescription { "Your profile as the portal sees it" }
                }
                CardContent {
                    div { class: "settings-row",
                        span { class: "settings-label", "Email" }
                        span { "{email}" }
                    }
                    if let Some(role) = role {
                        div { class: "settings-row",
                            span { class: "settings-label", "Role" }
                            Badge { variant: BadgeVariant::Secondary, "{role.display_name()}" }
                        }
                    }
                    div { class: "settings-row",
                        span { class: "settings-label", "Two-factor" }
                        span { if two_factor { "Enabled" } else { "Disabled" } }
                    }
                    if let Some(emp) = employee {
                        Separator {}
                        div { class: "settings-row",
                            span { class: "settings-label", "Employee #" }
                            span { "{emp.employee_number}" }
                        }
                        if let Some(dept) = emp.department_name {
                            div { class: "settings-row",
                                span { class: "settings-label", "Department" }
                                span { "{dept}" }
                            }
                        }
                        if let Some(position) = emp.position {
                            div { class: "settings-row",
                                span { class: "settings-label", "Position" }
                                span { "{position}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Change Password" }
                    CardDescription { "Pick something you haven't used before" }
                }
                CardContent {
                    if let Some((success, msg)) = feedback() {
                        Alert {
                            variant: if success { AlertVariant::Success } else { AlertVariant::Destructive },
                            AlertDescription { "{msg}" }
                        }
                    }

                    form { onsubmit: handle_change_password,
                        div { class: "settings-field",
                            Label { html_for: "current_password", "Current Password" }
                            Input {
                                input_type: "password",
                                id: "current_password",
                                value: current_password(),
                                on_input: move |e: FormEvent| current_password.set(e.value()),
                            }
                        }
                        div { class: "settings-field",
                            Label { html_for: "new_password", "New Password" }
                            Input {
                                input_type: "password",
                                id: "new_password",
                                placeholder: "At least 8 characters",
                                value: new_password(),
                                on_input: move |e: FormEvent| new_password.set(e.value()),
                            }
                        }
                        div { class: "settings-field",
                            Label { html_for: "confirm_password", "Confirm New Password" }
                            Input {
                                input_type: "password",
                                id: "confirm_password",
                                value: confirm_password(),
                                on_input: move |e: FormEvent| confirm_password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "settings-submit button",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Update Password" }
                        }
                    }
                }
            }
        }
    }
}
