use pretty_assertions::assert_eq;
use shared_types::{has_any_role, has_permission, has_role, Permission, Role};

/// The full role/permission table, written out as data so a change to
/// either side shows up as a diff here.
#[test]
fn test_permission_table_matches_backend() {
    use Permission::*;

    let expected: &[(Role, &[Permission])] = &[
        (Role::Admin, &[All]),
        (Role::HrManager, &[Employees, Payroll, Departments]),
        (Role::SalesManager, &[Orders, Customers, SalesReports]),
        (Role::FinanceManager, &[Payroll, Expenses, FinancialReports]),
        (Role::LogisticsManager, &[Orders, Shipping]),
        (Role::WarehouseManager, &[Inventory, Stock]),
        (Role::SalesRep, &[MyOrders, Customers]),
        (Role::Employee, &[MyProfile, MyPayroll]),
        (Role::CustomerSupport, &[Customers, SupportTickets]),
    ];

    assert_eq!(expected.len(), Role::ALL.len());
    for (role, permissions) in expected {
        assert_eq!(role.permissions(), *permissions, "table drift for {role}");
    }
}

#[test]
fn test_admin_wildcard_covers_every_named_permission() {
    for role in Role::ALL {
        for permission in role.permissions() {
            assert!(
                Role::Admin.has_permission(*permission),
                "admin denied {}",
                permission.as_str()
            );
        }
    }
}

#[test]
fn test_permission_check_is_exact_for_non_admin_roles() {
    // Payroll belongs to HR and finance but nobody else (besides admin).
    let holders: Vec<Role> = Role::ALL
        .into_iter()
        .filter(|r| r.has_permission(Permission::Payroll))
        .collect();
    assert_eq!(
        holders,
        vec![Role::Admin, Role::HrManager, Role::FinanceManager]
    );
}

#[test]
fn test_my_payroll_is_not_payroll() {
    // The employee's own payslip view is distinct from the payroll
    // management permission.
    assert!(Role::Employee.has_permission(Permission::MyPayroll));
    assert!(!Role::Employee.has_permission(Permission::Payroll));
    assert!(!Role::HrManager.has_permission(Permission::MyPayroll));
}

#[test]
fn test_optional_role_helpers() {
    assert!(has_permission(Some(Role::SalesRep), Permission::MyOrders));
    assert!(!has_permission(None, Permission::MyOrders));

    assert!(has_role(Some(Role::Admin), Role::Admin));
    assert!(!has_role(Some(Role::Admin), Role::Employee));
    assert!(!has_role(None, Role::Admin));

    let managers = [Role::HrManager, Role::SalesManager, Role::FinanceManager];
    assert!(has_any_role(Some(Role::SalesManager), &managers));
    assert!(!has_any_role(Some(Role::SalesRep), &managers));
    assert!(!has_any_role(None, &managers));
}

#[test]
fn test_no_role_grants_the_wildcard_by_membership() {
    for role in Role::ALL {
        if role == Role::Admin {
            continue;
        }
        assert!(!role.permissions().contains(&Permission::All));
    }
}
