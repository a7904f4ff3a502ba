use crate::auth::{has_permission, Permission, Role};

/// Icon slot for a menu item. The UI layer maps these to its icon set;
/// keeping the menu tables free of renderer types lets them live here as
/// plain configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Users,
    UserCheck,
    Building,
    Cart,
    Package,
    Currency,
    Report,
    Settings,
    Truck,
    Warehouse,
    Headset,
}

/// One sidebar entry. `permission` of `None` means the item is visible
/// to every authenticated user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: MenuIcon,
    pub path: &'static str,
    pub permission: Option<Permission>,
}

const fn item(
    label: &'static str,
    icon: MenuIcon,
    path: &'static str,
    permission: Option<Permission>,
) -> MenuItem {
    MenuItem {
        label,
        icon,
        path,
        permission,
    }
}

/// Items every role sees. The dashboard entry carries no permission tag:
/// it is the shared landing page.
pub const BASE_MENU: &[MenuItem] = &[item(
    "Dashboard",
    MenuIcon::Dashboard,
    "/dashboard",
    None,
)];

const ADMIN_MENU: &[MenuItem] = &[
    item("User Management", MenuIcon::Users, "/admin/users", Some(Permission::All)),
    item("Employees", MenuIcon::UserCheck, "/admin/employees", Some(Permission::All)),
    item("Departments", MenuIcon::Building, "/admin/departments", Some(Permission::All)),
    item("Customers", MenuIcon::Users, "/admin/customers", Some(Permission::All)),
    item("Orders", MenuIcon::Cart, "/admin/orders", Some(Permission::All)),
    item("Inventory", MenuIcon::Package, "/admin/inventory", Some(Permission::All)),
    item("Payroll", MenuIcon::Currency, "/admin/payroll", Some(Permission::All)),
    item("Reports", MenuIcon::Report, "/admin/reports", Some(Permission::All)),
    item("Settings", MenuIcon::Settings, "/admin/settings", Some(Permission::All)),
];

const HR_MENU: &[MenuItem] = &[
    item("Employees", MenuIcon::UserCheck, "/hr/employees", Some(Permission::Employees)),
    item("Departments", MenuIcon::Building, "/hr/departments", Some(Permission::Departments)),
    item("Payroll", MenuIcon::Currency, "/hr/payroll", Some(Permission::Payroll)),
    item("HR Reports", MenuIcon::Report, "/hr/reports", Some(Permission::Employees)),
];

const SALES_MANAGER_MENU: &[MenuItem] = &[
    item("Customers", MenuIcon::Users, "/sales/customers", Some(Permission::Customers)),
    item("Orders", MenuIcon::Cart, "/sales/orders", Some(Permission::Orders)),
    // Tagged with the orders permission rather than a dedicated one;
    // the tables are allowed to diverge from the permission sets.
    item("Sales Team", MenuIcon::UserCheck, "/sales/team", Some(Permission::Orders)),
    item("Sales Reports", MenuIcon::Report, "/sales/reports", Some(Permission::SalesReports)),
];

const FINANCE_MENU: &[MenuItem] = &[
    item("Payroll", MenuIcon::Currency, "/finance/payroll", Some(Permission::Payroll)),
    item("Expenses", MenuIcon::Report, "/finance/expenses", Some(Permission::Expenses)),
    item("Financial Reports", MenuIcon::Report, "/finance/reports", Some(Permission::FinancialReports)),
];

const LOGISTICS_MENU: &[MenuItem] = &[
    item("Orders", MenuIcon::Cart, "/logistics/orders", Some(Permission::Orders)),
    item("Shipping", MenuIcon::Truck, "/logistics/shipping", Some(Permission::Shipping)),
    item("Logistics Reports", MenuIcon::Report, "/logistics/reports", Some(Permission::Orders)),
];

const WAREHOUSE_MENU: &[MenuItem] = &[
    item("Inventory", MenuIcon::Package, "/warehouse/inventory", Some(Permission::Inventory)),
    item("Stock", MenuIcon::Warehouse, "/warehouse/stock", Some(Permission::Stock)),
    item("Inventory Reports", MenuIcon::Report, "/warehouse/reports", Some(Permission::Inventory)),
];

const SALES_REP_MENU: &[MenuItem] = &[
    item("My Orders", MenuIcon::Cart, "/sales-rep/orders", Some(Permission::MyOrders)),
    item("Customers", MenuIcon::Users, "/sales-rep/customers", Some(Permission::Customers)),
    item("My Performance", MenuIcon::Report, "/sales-rep/performance", Some(Permission::MyOrders)),
];

const EMPLOYEE_MENU: &[MenuItem] = &[
    item("My Profile", MenuIcon::UserCheck, "/employee/profile", Some(Permission::MyProfile)),
    item("My Payroll", MenuIcon::Currency, "/employee/payroll", Some(Permission::MyPayroll)),
];

const SUPPORT_MENU: &[MenuItem] = &[
    item("Customers", MenuIcon::Users, "/support/customers", Some(Permission::Customers)),
    item("Support Tickets", MenuIcon::Headset, "/support/tickets", Some(Permission::SupportTickets)),
];

/// Role-specific portion of the sidebar.
pub fn role_menu(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::HrManager => HR_MENU,
        Role::SalesManager => SALES_MANAGER_MENU,
        Role::FinanceManager => FINANCE_MENU,
        Role::LogisticsManager => LOGISTICS_MENU,
        Role::WarehouseManager => WAREHOUSE_MENU,
        Role::SalesRep => SALES_REP_MENU,
        Role::Employee => EMPLOYEE_MENU,
        Role::CustomerSupport => SUPPORT_MENU,
    }
}

/// Build the visible sidebar for a role: base items plus the role's
/// items, dropping anything the role lacks permission for. An unknown
/// role sees only permission-free base items.
pub fn menu_for_role(role: Option<Role>) -> Vec<MenuItem> {
    let role_items = role.map(role_menu).unwrap_or(&[]);
    BASE_MENU
        .iter()
        .chain(role_items.iter())
        .filter(|item| match item.permission {
            None => true,
            Some(p) => has_permission(role, p),
        })
        .copied()
        .collect()
}
