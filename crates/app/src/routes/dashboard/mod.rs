pub mod admin;
pub mod employee;
pub mod manager;
pub mod sales_rep;

use dioxus::prelude::*;
use shared_types::{AppError, DashboardData, Role};
use shared_ui::{
    Alert, AlertDescription, AlertVariant, BadgeVariant, Card, CardContent, Skeleton,
};

use crate::session::use_session;
use crate::{api, storage};

/// Role-adaptive dashboard — renders the branch for the user's role.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    match session.role() {
        Some(Role::Admin) => rsx! { admin::AdminDashboard {} },
        Some(Role::SalesRep) => rsx! { sales_rep::SalesRepDashboard {} },
        Some(Role::Employee) => rsx! { employee::EmployeeDashboard {} },
        Some(role) => rsx! { manager::ManagerDashboard { role } },
        None => rsx! {
            div { class: "dashboard-empty",
                p { "Your account has no dashboard assigned. Contact an administrator." }
            }
        },
    }
}

/// Fetch the role-shaped dashboard payload. The guard already handled
/// auth; a missing token here means the session died mid-view.
pub(crate) fn use_dashboard_data() -> Resource<Result<DashboardData, AppError>> {
    use_resource(move || async move {
        let Some(token) = storage::token() else {
            return Err(AppError::unauthorized("Your session has expired."));
        };
        api::fetch_dashboard(&token).await
    })
}

/// Inline failure card shown when the dashboard fetch errors out.
#[component]
pub(crate) fn DashboardError(message: String) -> Element {
    rsx! {
        Alert { variant: AlertVariant::Destructive,
            AlertDescription { "{message}" }
        }
    }
}

/// Dollar amount with thousands separators, e.g. `$12,480.50`.
pub(crate) fn money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac:02}", group_thousands(whole))
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Order/payroll status to badge variant mapping.
pub(crate) fn status_badge(status: &str) -> BadgeVariant {
    match status {
        "delivered" | "paid" | "completed" => BadgeVariant::Primary,
        "pending" | "processing" => BadgeVariant::Secondary,
        "cancelled" | "failed" => BadgeVariant::Destructive,
        _ => BadgeVariant::Outline,
    }
}

/// One metric tile.
#[component]
pub(crate) fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-value", "{value}" }
                div { class: "stat-label", "{label}" }
            }
        }
    }
}

/// Skeleton grid shown while the dashboard payload is in flight.
#[component]
pub(crate) fn StatSkeletons(#[props(default = 4)] count: usize) -> Element {
    rsx! {
        div { class: "dashboard-stats-grid",
            for _ in 0..count {
                Card {
                    CardContent {
                        Skeleton { style: "height: 2.5rem; width: 100%;" }
                    }
                }
            }
        }
    }
}
