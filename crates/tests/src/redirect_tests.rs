use pretty_assertions::assert_eq;
use shared_types::{menu_for_role, Role};

/// The client-side fallback redirect table used when a login response
/// carries no `redirect_url`. Matches the backend for every role except
/// the sales rep, which gets a path inside its own namespace.
#[test]
fn test_default_redirect_table() {
    let expected = [
        (Role::Admin, "/admin/dashboard"),
        (Role::HrManager, "/hr/dashboard"),
        (Role::SalesManager, "/sales/dashboard"),
        (Role::FinanceManager, "/finance/dashboard"),
        (Role::LogisticsManager, "/logistics/dashboard"),
        (Role::WarehouseManager, "/warehouse/dashboard"),
        (Role::SalesRep, "/sales-rep/orders"),
        (Role::Employee, "/employee/dashboard"),
        (Role::CustomerSupport, "/support/dashboard"),
    ];

    for (role, path) in expected {
        assert_eq!(role.default_redirect(), path, "redirect drift for {role}");
    }
}

#[test]
fn test_redirects_land_in_the_roles_own_namespace() {
    for role in Role::ALL {
        let redirect = role.default_redirect();
        let namespace = redirect
            .split('/')
            .nth(1)
            .map(|seg| format!("/{seg}/"))
            .unwrap_or_default();

        // Every menu item of the role lives under the same namespace,
        // so the landing page and the sidebar agree.
        for item in menu_for_role(Some(role)) {
            if item.path == "/dashboard" {
                continue;
            }
            assert!(
                item.path.starts_with(&namespace),
                "{role}: menu {} outside {namespace}",
                item.path
            );
        }
    }
}

#[test]
fn test_sales_rep_lands_on_their_orders() {
    // The one role that does not land on a dashboard section.
    assert_eq!(Role::SalesRep.default_redirect(), "/sales-rep/orders");
    assert!(menu_for_role(Some(Role::SalesRep))
        .iter()
        .any(|item| item.path == "/sales-rep/orders"));
}
