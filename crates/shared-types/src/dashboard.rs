use serde::{Deserialize, Serialize};

/// Payload of `GET /dashboard`. The backend assembles a different shape
/// per role; fields absent for a role default to zero/empty so a single
/// type covers every branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardData {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub key_metrics: KeyMetrics,
    #[serde(default)]
    pub monthly_trends: Vec<MonthlyTrend>,
    #[serde(default)]
    pub recent_orders: Vec<OrderSummary>,
    #[serde(default)]
    pub recent_payroll: Vec<PayrollEntry>,
}

/// Union of the per-role metric fields. Each backend branch sends only
/// its own slice; the field groups below follow the branches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KeyMetrics {
    // Admin (sales manager shares total_orders/monthly_sales/pending_orders)
    #[serde(default)]
    pub total_employees: i64,
    #[serde(default)]
    pub total_customers: i64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub monthly_sales: f64,
    #[serde(default)]
    pub pending_orders: i64,
    #[serde(default)]
    pub low_stock_items: i64,
    // HR manager
    #[serde(default)]
    pub new_employees_this_month: i64,
    #[serde(default)]
    pub pending_payroll: i64,
    #[serde(default)]
    pub total_payroll_this_month: f64,
    #[serde(default)]
    pub rewards_this_month: i64,
    // Sales manager
    #[serde(default)]
    pub monthly_orders: i64,
    // Finance manager
    #[serde(default)]
    pub monthly_revenue: f64,
    #[serde(default)]
    pub monthly_expenses: f64,
    #[serde(default)]
    pub net_profit: f64,
    #[serde(default)]
    pub pending_expenses: i64,
    #[serde(default)]
    pub outstanding_invoices: i64,
    #[serde(default)]
    pub outstanding_amount: f64,
    // Logistics manager
    #[serde(default)]
    pub urgent_orders: i64,
    #[serde(default)]
    pub orders_to_ship: i64,
    // Warehouse manager (shares low_stock_items with admin)
    #[serde(default)]
    pub total_items: i64,
    #[serde(default)]
    pub out_of_stock_items: i64,
    #[serde(default)]
    pub total_inventory_value: f64,
    // Sales rep (shares pending_orders)
    #[serde(default)]
    pub my_orders_this_month: i64,
    #[serde(default)]
    pub my_sales_value: f64,
    // Employee
    #[serde(default)]
    pub reward_points: i64,
    #[serde(default)]
    pub rewards_this_year: i64,
}

/// One point of the six-month sales trend, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTrend {
    /// "YYYY-MM"
    pub month: String,
    pub sales: f64,
}

/// Row of the sales rep's recent-orders list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    pub order_number: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub total: f64,
    pub status: String,
}

/// Row of the employee's recent-payroll list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayrollEntry {
    pub pay_period_start: chrono::NaiveDate,
    pub pay_period_end: chrono::NaiveDate,
    #[serde(default)]
    pub payment_date: Option<chrono::NaiveDate>,
    pub net_salary: f64,
    pub status: String,
}

impl PayrollEntry {
    pub fn is_paid(&self) -> bool {
        self.status == "paid"
    }
}
