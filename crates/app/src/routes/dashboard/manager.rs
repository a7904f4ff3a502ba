use dioxus::prelude::*;
use shared_types::{KeyMetrics, Permission, Role};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, Skeleton};

use super::{money, use_dashboard_data, DashboardError, StatCard, StatSkeletons};
use crate::gate::PermissionGate;

/// Which metric tiles a manager role gets. The backend only fills the
/// fields relevant to the role; the rest default to zero and would read
/// as noise, so each role names its own set.
fn metric_cards(role: Role, metrics: &KeyMetrics) -> Vec<(&'static str, String)> {
    match role {
        Role::HrManager => vec![
            ("Total Employees", metrics.total_employees.to_string()),
            ("New Hires This Month", metrics.new_employees_this_month.to_string()),
            ("Pending Payroll", metrics.pending_payroll.to_string()),
            ("Payroll This Month", money(metrics.total_payroll_this_month)),
            ("Rewards This Month", metrics.rewards_this_month.to_string()),
        ],
        Role::SalesManager => vec![
            ("Total Orders", metrics.total_orders.to_string()),
            ("Monthly Orders", metrics.monthly_orders.to_string()),
            ("Monthly Sales", money(metrics.monthly_sales)),
            ("Pending Orders", metrics.pending_orders.to_string()),
        ],
        Role::FinanceManager => vec![
            ("Monthly Revenue", money(metrics.monthly_revenue)),
            ("Monthly Expenses", money(metrics.monthly_expenses)),
            ("Net Profit", money(metrics.net_profit)),
            ("Pending Expenses", metrics.pending_expenses.to_string()),
            ("Outstanding Invoices", metrics.outstanding_invoices.to_string()),
            ("Outstanding Amount", money(metrics.outstanding_amount)),
        ],
        Role::LogisticsManager => vec![
            ("Urgent Orders", metrics.urgent_orders.to_string()),
            ("Orders to Ship", metrics.orders_to_ship.to_string()),
        ],
        Role::WarehouseManager => vec![
            ("Total Items", metrics.total_items.to_string()),
            ("Low Stock Items", metrics.low_stock_items.to_string()),
            ("Out of Stock", metrics.out_of_stock_items.to_string()),
            ("Inventory Value", money(metrics.total_inventory_value)),
        ],
        Role::CustomerSupport => vec![("Total Customers", metrics.total_customers.to_string())],
        // Admin, sales rep and employee have dedicated dashboards.
        Role::Admin | Role::SalesRep | Role::Employee => Vec::new(),
    }
}

/// Dashboard for the manager roles and customer support: the role's
/// metric tiles over a shared layout.
#[component]
pub fn ManagerDashboard(role: Role) -> Element {
    let data = use_dashboard_data();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "Dashboard" }
            PageSubtitle { "{role.display_name()}" }
        }

        match &*data.read() {
            Some(Ok(d)) => {
                let cards = metric_cards(role, &d.key_metrics);
                rsx! {
                    div { class: "dashboard-stats-grid",
                        for (label, value) in cards {
                            StatCard { label, value }
                        }
                    }

                    // Order data is only meaningful to roles holding the
                    // orders permission; others just see their tiles.
                    if !d.recent_orders.is_empty() {
                        PermissionGate {
                            required: Permission::Orders,
                            fallback: rsx! {},
                            Card {
                                CardHeader {
                                    CardTitle { "Recent Orders" }
                                }
                                CardContent {
                                    table { class: "dashboard-table",
                                        thead {
                                            tr {
                                                th { "Order" }
                                                th { "Total" }
                                                th { "Status" }
                                            }
                                        }
                                        tbody {
                                            for order in &d.recent_orders {
                                                tr {
                                                    td { "{order.order_number}" }
                                                    td { {money(order.total)} }
                                                    td { "{order.status}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(err)) => rsx! {
                DashboardError { message: err.message.clone() }
            },
            None => rsx! {
                StatSkeletons { count: 3 }
                Card {
                    CardContent {
                        Skeleton { style: "height: 8rem; width: 100%;" }
                    }
                }
            },
        }
    }
}
