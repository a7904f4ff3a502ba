use crate::auth::{has_permission, Permission, Role};

/// Where the session store currently stands. `Loading` covers the
/// startup window while a stored token is being validated against
/// `GET /auth/profile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Unauthenticated,
    Authenticated,
}

/// What a guarded route demands beyond authentication.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteRequirement {
    pub role: Option<Role>,
    pub permission: Option<Permission>,
}

impl RouteRequirement {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            permission: None,
        }
    }

    pub fn permission(permission: Permission) -> Self {
        Self {
            role: None,
            permission: Some(permission),
        }
    }
}

/// Outcome of evaluating a guarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session fetch still in flight; keep the loading view.
    Loading,
    /// Render the guarded children.
    Authorized,
    /// Unauthenticated; redirect to the login page, preserving the
    /// originally requested location.
    RedirectLogin,
    /// Authenticated but lacking the required role or permission.
    RedirectUnauthorized,
}

/// Pure route-guard transition function.
///
/// `user_role` is the authenticated user's parsed role; `None` means the
/// backend reported a role this client does not know, which fails every
/// role and permission requirement rather than erroring.
pub fn evaluate(
    phase: SessionPhase,
    user_role: Option<Role>,
    requirement: RouteRequirement,
) -> GuardDecision {
    match phase {
        SessionPhase::Loading => GuardDecision::Loading,
        SessionPhase::Unauthenticated => GuardDecision::RedirectLogin,
        SessionPhase::Authenticated => {
            if let Some(required) = requirement.role {
                if user_role != Some(required) {
                    return GuardDecision::RedirectUnauthorized;
                }
            }
            if let Some(required) = requirement.permission {
                if !has_permission(user_role, required) {
                    return GuardDecision::RedirectUnauthorized;
                }
            }
            GuardDecision::Authorized
        }
    }
}
