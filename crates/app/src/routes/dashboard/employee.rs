use dioxus::prelude::*;
use shared_ui::{
    Badge, Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, Skeleton,
};

use super::{money, status_badge, use_dashboard_data, DashboardError, StatCard, StatSkeletons};
use crate::session::use_session;

/// Personal dashboard for regular employees: reward points and recent
/// payroll.
#[component]
pub fn EmployeeDashboard() -> Element {
    let session = use_session();
    let data = use_dashboard_data();

    let greeting = session
        .employee
        .read()
        .as_ref()
        .map(|e| format!("Welcome back, {}", e.full_name))
        .unwrap_or_else(|| "Welcome back".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "My Workspace" }
            PageSubtitle { "{greeting}" }
        }

        match &*data.read() {
            Some(Ok(d)) => rsx! {
                div { class: "dashboard-stats-grid",
                    StatCard { label: "Reward Points", value: d.key_metrics.reward_points.to_string() }
                    StatCard { label: "Rewards This Year", value: d.key_metrics.rewards_this_year.to_string() }
                }

                Card {
                    CardHeader {
                        CardTitle { "Recent Payroll" }
                    }
                    CardContent {
                        if d.recent_payroll.is_empty() {
                            p { class: "dashboard-empty", "No payroll entries yet." }
                        } else {
                            table { class: "dashboard-table",
                                thead {
                                    tr {
                                        th { "Pay Period" }
                                        th { "Paid On" }
                                        th { "Net Salary" }
                                        th { "Status" }
                                    }
                                }
                                tbody {
                                    for entry in &d.recent_payroll {
                                        tr {
                                            td { "{entry.pay_period_start} – {entry.pay_period_end}" }
                                            td {
                                                {entry
                                                    .payment_date
                                                    .map(|date| date.to_string())
                                                    .unwrap_or_else(|| "—".to_string())}
                                            }
                                            td { {money(entry.net_salary)} }
                                            td {
                                                Badge { variant: status_badge(&entry.status), "{entry.status}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                DashboardError { message: err.message.clone() }
            },
            None => rsx! {
                StatSkeletons { count: 2 }
                Card {
                    CardContent {
                        Skeleton { style: "height: 8rem; width: 100%;" }
                    }
                }
            },
        }
    }
}
