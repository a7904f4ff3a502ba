use serde::{Deserialize, Serialize};
use std::fmt;

/// User role controlling access to navigation areas and pages.
///
/// Roles form a flat set; there is no hierarchy. `Admin` holds the
/// wildcard permission and satisfies every permission check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    HrManager,
    SalesManager,
    FinanceManager,
    LogisticsManager,
    WarehouseManager,
    SalesRep,
    Employee,
    CustomerSupport,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::Admin,
        Role::HrManager,
        Role::SalesManager,
        Role::FinanceManager,
        Role::LogisticsManager,
        Role::WarehouseManager,
        Role::SalesRep,
        Role::Employee,
        Role::CustomerSupport,
    ];

    /// Parse the backend's `role` string. Unknown values yield `None`;
    /// callers must treat an unknown role as holding no permissions.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "hr_manager" => Some(Role::HrManager),
            "sales_manager" => Some(Role::SalesManager),
            "finance_manager" => Some(Role::FinanceManager),
            "logistics_manager" => Some(Role::LogisticsManager),
            "warehouse_manager" => Some(Role::WarehouseManager),
            "sales_rep" => Some(Role::SalesRep),
            "employee" => Some(Role::Employee),
            "customer_support" => Some(Role::CustomerSupport),
            _ => None,
        }
    }

    /// Wire string as the backend stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::HrManager => "hr_manager",
            Role::SalesManager => "sales_manager",
            Role::FinanceManager => "finance_manager",
            Role::LogisticsManager => "logistics_manager",
            Role::WarehouseManager => "warehouse_manager",
            Role::SalesRep => "sales_rep",
            Role::Employee => "employee",
            Role::CustomerSupport => "customer_support",
        }
    }

    /// Human label shown in the sidebar badge and dashboard greeting.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "System Administrator",
            Role::HrManager => "HR Manager",
            Role::SalesManager => "Sales Manager",
            Role::FinanceManager => "Finance Manager",
            Role::LogisticsManager => "Logistics Manager",
            Role::WarehouseManager => "Warehouse Manager",
            Role::SalesRep => "Sales Representative",
            Role::Employee => "Employee",
            Role::CustomerSupport => "Customer Support",
        }
    }

    /// Post-login landing path the backend advertises for each role.
    /// Post-login landing page per role; used as a fallback when the
    /// login response carries no `redirect_url`. Follows the server's
    /// table except for sales reps, who land on their own orders page
    /// rather than the manager-guarded `/sales` area.
    pub fn default_redirect(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::HrManager => "/hr/dashboard",
            Role::SalesManager => "/sales/dashboard",
            Role::FinanceManager => "/finance/dashboard",
            Role::LogisticsManager => "/logistics/dashboard",
            Role::WarehouseManager => "/warehouse/dashboard",
            Role::SalesRep => "/sales-rep/orders",
            Role::Employee => "/employee/dashboard",
            Role::CustomerSupport => "/support/dashboard",
        }
    }

    /// Permission set granted to this role. Immutable configuration;
    /// `Admin` holds the wildcard.
    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Admin => &[All],
            Role::HrManager => &[Employees, Payroll, Departments],
            Role::SalesManager => &[Orders, Customers, SalesReports],
            Role::FinanceManager => &[Payroll, Expenses, FinancialReports],
            Role::LogisticsManager => &[Orders, Shipping],
            Role::WarehouseManager => &[Inventory, Stock],
            Role::SalesRep => &[MyOrders, Customers],
            Role::Employee => &[MyProfile, MyPayroll],
            Role::CustomerSupport => &[Customers, SupportTickets],
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        let set = self.permissions();
        set.contains(&Permission::All) || set.contains(&permission)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named capability tag a page or menu item requires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Wildcard held only by `Role::Admin`.
    All,
    Employees,
    Payroll,
    Departments,
    Orders,
    Customers,
    SalesReports,
    Expenses,
    FinancialReports,
    Shipping,
    Inventory,
    Stock,
    MyOrders,
    MyProfile,
    MyPayroll,
    SupportTickets,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::All => "all",
            Permission::Employees => "employees",
            Permission::Payroll => "payroll",
            Permission::Departments => "departments",
            Permission::Orders => "orders",
            Permission::Customers => "customers",
            Permission::SalesReports => "sales_reports",
            Permission::Expenses => "expenses",
            Permission::FinancialReports => "financial_reports",
            Permission::Shipping => "shipping",
            Permission::Inventory => "inventory",
            Permission::Stock => "stock",
            Permission::MyOrders => "my_orders",
            Permission::MyProfile => "my_profile",
            Permission::MyPayroll => "my_payroll",
            Permission::SupportTickets => "support_tickets",
        }
    }
}

/// Permission check against an optional role. An absent or unknown role
/// simply yields `false`; there is no error condition.
pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    role.map(|r| r.has_permission(permission)).unwrap_or(false)
}

/// Equality check against a single required role.
pub fn has_role(role: Option<Role>, required: Role) -> bool {
    role == Some(required)
}

/// Membership check against a list of acceptable roles.
pub fn has_any_role(role: Option<Role>, required: &[Role]) -> bool {
    role.map(|r| required.contains(&r)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_role() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn parse_rejects_unknown_role() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn wildcard_is_admin_only() {
        for role in Role::ALL {
            assert_eq!(
                role.has_permission(Permission::All),
                role == Role::Admin,
                "wildcard leaked to {role}"
            );
        }
    }

    #[test]
    fn admin_passes_every_permission() {
        for perm in [
            Permission::Employees,
            Permission::Payroll,
            Permission::SupportTickets,
            Permission::MyPayroll,
        ] {
            assert!(Role::Admin.has_permission(perm));
        }
    }

    #[test]
    fn unknown_role_holds_nothing() {
        assert!(!has_permission(None, Permission::Orders));
        assert!(!has_permission(None, Permission::All));
    }

    #[test]
    fn membership_check() {
        let accepted = [Role::SalesManager, Role::SalesRep];
        assert!(has_any_role(Some(Role::SalesRep), &accepted));
        assert!(!has_any_role(Some(Role::HrManager), &accepted));
        assert!(!has_any_role(None, &accepted));
    }
}
