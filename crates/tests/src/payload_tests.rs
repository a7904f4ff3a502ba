//! Wire-format tests against captured backend payloads.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use shared_types::{
    AppError, AppErrorKind, DashboardData, LoginResponse, ProfileResponse, Role,
};

#[test]
fn test_login_challenge_payload() {
    let body = r#"{"requires_2fa": true}"#;
    let response: LoginResponse = serde_json::from_str(body).unwrap();

    assert!(response.requires_2fa);
    assert_eq!(response.access_token, None);
    assert_eq!(response.user, None);
}

#[test]
fn test_login_success_payload() {
    let body = r#"{
        "access_token": "eyJ0.access",
        "refresh_token": "eyJ0.refresh",
        "user": {
            "id": "u-17",
            "email": "maria@example.com",
            "role": "sales_manager",
            "is_active": true,
            "two_factor_enabled": false,
            "last_login": "2026-08-30T08:12:44Z"
        },
        "employee": {
            "id": "e-9",
            "user_id": "u-17",
            "employee_number": "EMP-0009",
            "full_name": "Maria Keller",
            "department_name": "Sales",
            "position": "Sales Manager",
            "hire_date": "2021-03-15",
            "reward_points": 120
        },
        "redirect_url": "/sales/dashboard"
    }"#;
    let response: LoginResponse = serde_json::from_str(body).unwrap();

    assert!(!response.requires_2fa);
    assert_eq!(response.access_token.as_deref(), Some("eyJ0.access"));
    assert_eq!(response.redirect_url.as_deref(), Some("/sales/dashboard"));

    let user = response.user.unwrap();
    assert_eq!(user.role(), Some(Role::SalesManager));

    let employee = response.employee.unwrap();
    assert_eq!(employee.full_name, "Maria Keller");
    assert_eq!(
        employee.hire_date,
        Some(NaiveDate::from_ymd_opt(2021, 3, 15).unwrap())
    );
}

#[test]
fn test_profile_payload_without_employee_record() {
    // Accounts like admin may carry no employee profile; the backend
    // sends an explicit null.
    let body = r#"{
        "user": {
            "id": "u-1",
            "email": "root@example.com",
            "role": "admin"
        },
        "employee": null
    }"#;
    let response: ProfileResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.user.role(), Some(Role::Admin));
    assert!(response.user.is_active, "is_active defaults to true");
    assert_eq!(response.employee, None);
}

#[test]
fn test_profile_with_unknown_role_still_parses() {
    let body = r#"{"user": {"id": "u-2", "email": "x@example.com", "role": "intern"}}"#;
    let response: ProfileResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.user.role_name, "intern");
    assert_eq!(response.user.role(), None);
}

#[test]
fn test_admin_dashboard_payload() {
    let body = r#"{
        "role": "admin",
        "key_metrics": {
            "total_employees": 48,
            "total_customers": 312,
            "total_orders": 1045,
            "monthly_sales": 88210.40
        },
        "monthly_trends": [
            {"month": "2026-03", "sales": 61200.0},
            {"month": "2026-04", "sales": 70480.5}
        ],
        "recent_orders": [
            {"order_number": "ORD-1045", "customer_name": "Acme GmbH", "total": 980.0, "status": "pending"}
        ]
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.total_employees, 48);
    assert_eq!(data.monthly_trends.len(), 2);
    assert_eq!(data.recent_orders[0].order_number, "ORD-1045");
    assert!(data.recent_payroll.is_empty(), "absent lists default empty");
}

#[test]
fn test_hr_dashboard_payload() {
    let body = r#"{
        "role": "hr_manager",
        "key_metrics": {
            "total_employees": 48,
            "new_employees_this_month": 3,
            "pending_payroll": 6,
            "total_payroll_this_month": 142300.75,
            "rewards_this_month": 11
        }
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.new_employees_this_month, 3);
    assert_eq!(data.key_metrics.pending_payroll, 6);
    assert_eq!(data.key_metrics.total_payroll_this_month, 142300.75);
    assert_eq!(data.key_metrics.rewards_this_month, 11);
}

#[test]
fn test_sales_manager_dashboard_payload() {
    let body = r#"{
        "role": "sales_manager",
        "key_metrics": {
            "total_orders": 1045,
            "monthly_orders": 87,
            "monthly_sales": 88210.40,
            "pending_orders": 14
        }
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.monthly_orders, 87);
    assert_eq!(data.key_metrics.monthly_sales, 88210.40);
    assert_eq!(data.key_metrics.pending_orders, 14);
}

#[test]
fn test_finance_dashboard_payload() {
    let body = r#"{
        "role": "finance_manager",
        "key_metrics": {
            "monthly_revenue": 52000.0,
            "monthly_expenses": 31500.0,
            "net_profit": 20500.0,
            "pending_expenses": 4,
            "outstanding_invoices": 7,
            "outstanding_amount": 8950.25
        }
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.monthly_revenue, 52000.0);
    assert_eq!(data.key_metrics.monthly_expenses, 31500.0);
    assert_eq!(data.key_metrics.net_profit, 20500.0);
    assert_eq!(data.key_metrics.outstanding_invoices, 7);
    assert_eq!(data.key_metrics.outstanding_amount, 8950.25);
}

#[test]
fn test_logistics_dashboard_payload() {
    let body = r#"{
        "role": "logistics_manager",
        "key_metrics": {"urgent_orders": 3, "orders_to_ship": 12}
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.urgent_orders, 3);
    assert_eq!(data.key_metrics.orders_to_ship, 12);
}

#[test]
fn test_warehouse_dashboard_payload() {
    let body = r#"{
        "role": "warehouse_manager",
        "key_metrics": {
            "total_items": 860,
            "low_stock_items": 19,
            "out_of_stock_items": 4,
            "total_inventory_value": 412870.60
        }
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.total_items, 860);
    assert_eq!(data.key_metrics.low_stock_items, 19);
    assert_eq!(data.key_metrics.out_of_stock_items, 4);
    assert_eq!(data.key_metrics.total_inventory_value, 412870.60);
}

#[test]
fn test_sales_rep_dashboard_payload() {
    let body = r#"{
        "role": "sales_rep",
        "key_metrics": {
            "my_orders_this_month": 9,
            "my_sales_value": 10240.0,
            "pending_orders": 2
        },
        "recent_orders": [
            {"order_number": "ORD-1051", "customer_name": null, "total": 440.0, "status": "shipped"}
        ]
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.my_orders_this_month, 9);
    assert_eq!(data.key_metrics.my_sales_value, 10240.0);
    assert_eq!(data.key_metrics.pending_orders, 2);
    assert_eq!(data.recent_orders[0].customer_name, None);
}

#[test]
fn test_support_dashboard_payload() {
    let body = r#"{
        "role": "customer_support",
        "key_metrics": {"total_customers": 312}
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.total_customers, 312);
}

#[test]
fn test_employee_dashboard_payload() {
    let body = r#"{
        "role": "employee",
        "key_metrics": {"reward_points": 340, "rewards_this_year": 3},
        "recent_payroll": [
            {
                "pay_period_start": "2026-07-01",
                "pay_period_end": "2026-07-31",
                "payment_date": "2026-08-01",
                "net_salary": 3120.55,
                "status": "paid"
            },
            {
                "pay_period_start": "2026-08-01",
                "pay_period_end": "2026-08-31",
                "payment_date": null,
                "net_salary": 3120.55,
                "status": "pending"
            }
        ]
    }"#;
    let data: DashboardData = serde_json::from_str(body).unwrap();

    assert_eq!(data.key_metrics.reward_points, 340);
    assert!(data.recent_payroll[0].is_paid());
    assert!(!data.recent_payroll[1].is_paid());
    assert_eq!(data.recent_payroll[1].payment_date, None);
}

#[test]
fn test_backend_error_body_maps_to_kind_and_message() {
    let err = AppError::from_response(401, r#"{"error": "Invalid credentials"}"#);
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
    assert!(err.invalidates_session());

    let err = AppError::from_response(403, r#"{"error": "Insufficient permissions"}"#);
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert!(!err.invalidates_session());

    let err = AppError::from_response(422, r#"{"error": "Passwords do not match"}"#);
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}
