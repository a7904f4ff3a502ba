use dioxus::prelude::*;
use shared_types::{has_permission, Permission};

use crate::session::use_role;

/// Check if the current user holds a permission. Admin's wildcard
/// satisfies every check; a logged-out or unknown-role user none.
pub fn use_permission_check(required: Permission) -> bool {
    has_permission(use_role(), required)
}

/// Conditionally render children based on a permission.
/// Shows `fallback` when the permission is missing.
#[component]
pub fn PermissionGate(required: Permission, fallback: Element, children: Element) -> Element {
    if use_permission_check(required) {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}
