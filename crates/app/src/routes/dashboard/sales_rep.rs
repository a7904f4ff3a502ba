use dioxus::prelude::*;
use shared_ui::{
    Badge, Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, Skeleton,
};

use super::{money, status_badge, use_dashboard_data, DashboardError, StatCard, StatSkeletons};

/// Personal dashboard for sales representatives: own monthly numbers
/// and the latest orders they booked.
#[component]
pub fn SalesRepDashboard() -> Element {
    let data = use_dashboard_data();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "My Performance" }
            PageSubtitle { "This month at a glance" }
        }

        match &*data.read() {
            Some(Ok(d)) => rsx! {
                div { class: "dashboard-stats-grid",
                    StatCard { label: "My Orders This Month", value: d.key_metrics.my_orders_this_month.to_string() }
                    StatCard { label: "My Sales Value", value: money(d.key_metrics.my_sales_value) }
                }

                Card {
                    CardHeader {
                        CardTitle { "My Recent Orders" }
                    }
                    CardContent {
                        if d.recent_orders.is_empty() {
                            p { class: "dashboard-empty", "You haven't booked any orders yet." }
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
