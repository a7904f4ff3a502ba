//! Role-namespaced areas.
//!
//! Each area is a catch-all route wrapped in a [`RoleGuard`]; the
//! `dashboard` section of every area renders the shared role dashboard,
//! other sections render a titled work-in-progress page until their
//! backing screens ship.

use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Card, CardContent, PageHeader, PageSubtitle, PageTitle};

use crate::routes::dashboard::Dashboard;
use crate::routes::RoleGuard;

/// Title-case a path slug: `sales-reports` becomes `Sales Reports`.
fn section_title(section: &[String]) -> String {
    let slug = section.first().map(String::as_str).unwrap_or("overview");
    slug.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| match part {
            "hr" => "HR".to_string(),
            other => {
                let mut chars = other.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn AreaPage(area: &'static str, section: Vec<String>) -> Element {
    if section.first().map(String::as_str) == Some("dashboard") {
        return rsx! { Dashboard {} };
    }

    let title = section_title(&section);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sections.css") }

        PageHeader {
            PageTitle { "{title}" }
            PageSubtitle { "{area}" }
        }
        Card {
            CardContent {
                p { class: "section-placeholder",
                    "This screen is on its way. Check back soon."
                }
            }
        }
    }
}

#[component]
pub fn AdminArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::Admin,
            AreaPage { area: "Administration", section }
        }
    }
}

#[component]
pub fn HrArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::HrManager,
            AreaPage { area: "Human Resources", section }
        }
    }
}

#[component]
pub fn SalesArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::SalesManager,
            AreaPage { area: "Sales", section }
        }
    }
}

#[component]
pub fn FinanceArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::FinanceManager,
            AreaPage { area: "Finance", section }
        }
    }
}

#[component]
pub fn LogisticsArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::LogisticsManager,
            AreaPage { area: "Logistics", section }
        }
    }
}

#[component]
pub fn WarehouseArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::WarehouseManager,
            AreaPage { area: "Warehouse", section }
        }
    }
}

#[component]
pub fn SalesRepArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::SalesRep,
            AreaPage { area: "My Sales", section }
        }
    }
}

#[component]
pub fn EmployeeArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::Employee,
            AreaPage { area: "My Workspace", section }
        }
    }
}

#[component]
pub fn SupportArea(section: Vec<String>) -> Element {
    rsx! {
        RoleGuard { required: Role::CustomerSupport,
            AreaPage { area: "Customer Support", section }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_become_readable_titles() {
        let section = vec!["sales-reports".to_string()];
        assert_eq!(section_title(&section), "Sales Reports");

        let section = vec!["hr_reports".to_string()];
        assert_eq!(section_title(&section), "HR Reports");
    }

    #[test]
    fn empty_section_falls_back_to_overview() {
        assert_eq!(section_title(&[]), "Overview");
    }
}
