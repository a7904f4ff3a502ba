use pretty_assertions::assert_eq;
use shared_types::{
    evaluate, GuardDecision, Permission, Role, RouteRequirement, SessionPhase,
};

#[test]
fn test_loading_never_redirects() {
    for requirement in [
        RouteRequirement::none(),
        RouteRequirement::role(Role::Admin),
        RouteRequirement::permission(Permission::Payroll),
    ] {
        assert_eq!(
            evaluate(SessionPhase::Loading, None, requirement),
            GuardDecision::Loading
        );
        assert_eq!(
            evaluate(SessionPhase::Loading, Some(Role::Admin), requirement),
            GuardDecision::Loading
        );
    }
}

#[test]
fn test_unauthenticated_goes_to_login_not_unauthorized() {
    // Even on a role-guarded route: the user first has to sign in.
    let requirement = RouteRequirement::role(Role::FinanceManager);
    assert_eq!(
        evaluate(SessionPhase::Unauthenticated, None, requirement),
        GuardDecision::RedirectLogin
    );
}

#[test]
fn test_authenticated_without_requirement_is_authorized() {
    for role in Role::ALL {
        assert_eq!(
            evaluate(
                SessionPhase::Authenticated,
                Some(role),
                RouteRequirement::none()
            ),
            GuardDecision::Authorized
        );
    }
}

#[test]
fn test_role_requirement_admits_exactly_that_role() {
    let requirement = RouteRequirement::role(Role::WarehouseManager);
    for role in Role::ALL {
        let expected = if role == Role::WarehouseManager {
            GuardDecision::Authorized
        } else {
            GuardDecision::RedirectUnauthorized
        };
        assert_eq!(
            evaluate(SessionPhase::Authenticated, Some(role), requirement),
            expected,
            "role {role}"
        );
    }
}

#[test]
fn test_admin_is_not_admitted_to_other_areas_by_role() {
    // The wildcard applies to permissions, not to role-gated areas.
    assert_eq!(
        evaluate(
            SessionPhase::Authenticated,
            Some(Role::Admin),
            RouteRequirement::role(Role::HrManager)
        ),
        GuardDecision::RedirectUnauthorized
    );
}

#[test]
fn test_permission_requirement_admits_holders_and_admin() {
    let requirement = RouteRequirement::permission(Permission::Customers);
    for role in Role::ALL {
        let expected = if role.has_permission(Permission::Customers) {
            GuardDecision::Authorized
        } else {
            GuardDecision::RedirectUnauthorized
        };
        assert_eq!(
            evaluate(SessionPhase::Authenticated, Some(role), requirement),
            expected,
            "role {role}"
        );
    }
    assert_eq!(
        evaluate(SessionPhase::Authenticated, Some(Role::Admin), requirement),
        GuardDecision::Authorized
    );
}

#[test]
fn test_unknown_backend_role_fails_closed() {
    // The backend can ship a role this client predates; such a session
    // is authenticated but passes no role or permission gate.
    assert_eq!(
        evaluate(
            SessionPhase::Authenticated,
            None,
            RouteRequirement::permission(Permission::MyProfile)
        ),
        GuardDecision::RedirectUnauthorized
    );
    assert_eq!(
        evaluate(SessionPhase::Authenticated, None, RouteRequirement::none()),
        GuardDecision::Authorized
    );
}
