use dioxus::prelude::*;
use shared_types::MonthlyTrend;
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle,
    Skeleton,
};

use super::{money, status_badge, use_dashboard_data, DashboardError, StatCard, StatSkeletons};

/// Company-wide dashboard for administrators: headline metrics, the
/// six-month sales trend, and the latest orders across all reps.
#[component]
pub fn AdminDashboard() -> Element {
    let data = use_dashboard_data();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "Company Overview" }
        }

        match &*data.read() {
            Some(Ok(d)) => rsx! {
                div { class: "dashboard-stats-grid",
                    StatCard { label: "Total Employees", value: d.key_metrics.total_employees.to_string() }
                    StatCard { label: "Total Customers", value: d.key_metrics.total_customers.to_string() }
                    StatCard { label: "Total Orders", value: d.key_metrics.total_orders.to_string() }
                    StatCard { label: "Monthly Sales", value: money(d.key_metrics.monthly_sales) }
                }

                div { class: "dashboard-columns",
                    Card {
                        CardHeader {
                            CardTitle { "Sales Trend" }
                            CardDescription { "Last six months" }
                        }
                        CardContent {
                            TrendBars { trends: d.monthly_trends.clone() }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Recent Orders" }
                        }
                        CardContent {
                            if d.recent_orders.is_empty() {
                                p { class: "dashboard-empty", "No orders yet." }
                            } else {
                                table { class: "dashboard-table",
                                    thead {
                                        tr {
                                            th { "Order" }
                                            th { "Customer" }
                                            th { "Total" }
                                            th { "Status" }
                                        }
                                    }
                                    tbody {
                                        for order in &d.recent_orders {
                                            tr {
                                                td { "{order.order_number}" }
                                                td { {order.customer_name.clone().unwrap_or_else(|| "—".to_string())} }
                                                td { {money(order.total)} }
                                                td {
                                                    Badge { variant: status_badge(&order.status), "{order.status}" }
                                                }
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
                StatSkeletons {}
                Card {
                    CardContent {
                        Skeleton { style: "height: 10rem; width: 100%;" }
                    }
                }
            },
        }
    }
}

/// Horizontal bar per month, scaled against the best month.
#[component]
fn TrendBars(trends: Vec<MonthlyTrend>) -> Element {
    let max = trends.iter().map(|t| t.sales).fold(0.0_f64, f64::max);

    rsx! {
        if trends.is_empty() {
            p { class: "dashboard-empty", "No sales recorded yet." }
        } else {
            div { class: "trend-bars",
                for trend in trends {
                    div { class: "trend-row",
                        span { class: "trend-month", "{trend.month}" }
                        div { class: "trend-track",
                            div {
                                class: "trend-fill",
                                style: format!(
                                    "width: {:.0}%;",
                                    if max > 0.0 { trend.sales / max * 100.0 } else { 0.0 }
                                ),
                            }
                        }
                        span { class: "trend-value", {money(trend.sales)} }
                    }
                }
            }
        }
    }
}
