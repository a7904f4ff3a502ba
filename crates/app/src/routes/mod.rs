pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod sections;
pub mod settings;
pub mod unauthorized;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding, LdDollarSign, LdFileText, LdHeadset, LdLayoutDashboard, LdLogOut, LdPackage,
    LdSettings, LdShoppingCart, LdTruck, LdUserCheck, LdUsers, LdWarehouse,
};
use dioxus_free_icons::Icon;
use shared_types::{
    evaluate, menu_for_role, GuardDecision, MenuIcon, Role, RouteRequirement,
};
use shared_ui::{
    Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonVariant, Navbar, Separator,
    Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem,
};

use crate::session::{use_display_name, use_session};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use sections::{
    AdminArea, EmployeeArea, FinanceArea, HrArea, LogisticsArea, SalesArea, SalesRepArea,
    SupportArea, WarehouseArea,
};
use settings::Settings;
use unauthorized::Unauthorized;

/// Application routes. Everything inside the guarded layout requires an
/// authenticated session; the per-role areas add a role check on top.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/settings")]
    Settings {},
    // Role-namespaced areas
    #[route("/admin/:..section")]
    AdminArea { section: Vec<String> },
    #[route("/hr/:..section")]
    HrArea { section: Vec<String> },
    #[route("/sales/:..section")]
    SalesArea { section: Vec<String> },
    #[route("/finance/:..section")]
    FinanceArea { section: Vec<String> },
    #[route("/logistics/:..section")]
    LogisticsArea { section: Vec<String> },
    #[route("/warehouse/:..section")]
    WarehouseArea { section: Vec<String> },
    #[route("/sales-rep/:..section")]
    SalesRepArea { section: Vec<String> },
    #[route("/employee/:..section")]
    EmployeeArea { section: Vec<String> },
    #[route("/support/:..section")]
    SupportArea { section: Vec<String> },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Resolve a path string (from the menu tables or the backend's
/// redirect map) into a typed route. The catch-all means any path
/// parses; unknown ones land on the 404 page.
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| Route::NotFound {
        route: path
            .trim_start_matches('/')
            .split('/')
            .map(str::to_string)
            .collect(),
    })
}

/// Landing redirect: forwards to the role's default area once the
/// session is known.
#[component]
fn Home() -> Element {
    let session = use_session();
    let target = session
        .role()
        .map(|r| r.default_redirect())
        .unwrap_or("/dashboard");
    navigator().replace(route_for(target));
    rsx! {
        div { class: "guard-loading",
            p { "Redirecting..." }
        }
    }
}

/// Auth guard layout — holds the loading view until the session restore
/// settles, then either renders the outlet or redirects to /login with
/// the originally requested location preserved.
#[component]
fn AuthGuard() -> Element {
    let route: Route = use_route();
    let session = use_session();

    match evaluate(session.phase(), session.role(), RouteRequirement::none()) {
        GuardDecision::Loading => rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        },
        GuardDecision::Authorized => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirectLogin => {
            navigator().replace(Route::Login {
                redirect: Some(route.to_string()),
            });
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GuardDecision::RedirectUnauthorized => {
            navigator().replace(Route::Unauthorized {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Per-area guard layered inside [`AuthGuard`]. An authenticated user
/// with the wrong role lands on /unauthorized, not back at login.
#[component]
pub fn RoleGuard(required: Role, children: Element) -> Element {
    let session = use_session();

    match evaluate(
        session.phase(),
        session.role(),
        RouteRequirement::role(required),
    ) {
        GuardDecision::Authorized => rsx! { {children} },
        GuardDecision::Loading => rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        },
        GuardDecision::RedirectLogin => {
            navigator().replace(Route::Login { redirect: None });
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GuardDecision::RedirectUnauthorized => {
            navigator().replace(Route::Unauthorized {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        MenuIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        MenuIcon::UserCheck => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        MenuIcon::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        MenuIcon::Cart => rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 18, height: 18 } },
        MenuIcon::Package => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        MenuIcon::Currency => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 18, height: 18 } },
        MenuIcon::Report => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        MenuIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        MenuIcon::Truck => rsx! { Icon::<LdTruck> { icon: LdTruck, width: 18, height: 18 } },
        MenuIcon::Warehouse => rsx! { Icon::<LdWarehouse> { icon: LdWarehouse, width: 18, height: 18 } },
        MenuIcon::Headset => rsx! { Icon::<LdHeadset> { icon: LdHeadset, width: 18, height: 18 } },
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Main app layout with the role-filtered sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let display_name = use_display_name();
    let role = session.role();

    let menu = menu_for_role(role);
    let current_path = route.to_string();
    let avatar_text = initials(&display_name);

    let page_title = match &route {
        Route::Home {} | Route::Dashboard {} => "Dashboard",
        Route::Settings {} => "Settings",
        Route::AdminArea { .. } => "Administration",
        Route::HrArea { .. } => "Human Resources",
        Route::SalesArea { .. } => "Sales",
        Route::FinanceArea { .. } => "Finance",
        Route::LogisticsArea { .. } => "Logistics",
        Route::WarehouseArea { .. } => "Warehouse",
        Route::SalesRepArea { .. } => "My Sales",
        Route::EmployeeArea { .. } => "My Workspace",
        Route::SupportArea { .. } => "Customer Support",
        _ => "",
    };

    let handle_logout = move |_| {
        session.clear();
        navigator().push(Route::Login { redirect: None });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Enterprise Portal" }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        for entry in menu {
                            SidebarMenuItem {
                                Link { to: route_for(entry.path),
                                    SidebarMenuButton { active: current_path == entry.path,
                                        {menu_icon(entry.icon)}
                                        "{entry.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-user",
                        Avatar {
                            AvatarFallback { "{avatar_text}" }
                        }
                        div { class: "sidebar-user-info",
                            span { class: "sidebar-user-name", "{display_name}" }
                            if let Some(role) = role {
                                Badge { variant: BadgeVariant::Secondary, "{role.display_name()}" }
                            }
                        }
                    }
                    Separator {}
                    Link { to: Route::Settings {},
                        SidebarMenuButton { active: matches!(route, Route::Settings {}),
                            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                            "Settings"
                        }
                    }
                    Button { variant: ButtonVariant::Ghost, onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                Navbar {
                    span { class: "navbar-title", "{page_title}" }
                }
                main { class: "app-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
