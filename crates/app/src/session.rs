use dioxus::prelude::*;
use shared_types::{AuthUser, EmployeeProfile, Role, SessionPhase};

use crate::storage;

/// Global session state, provided once at the app root.
///
/// `restoring` stays true from startup until the stored token has been
/// validated (or found absent); guards render their loading view for
/// that window instead of bouncing an authenticated user to login.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub user: Signal<Option<AuthUser>>,
    pub employee: Signal<Option<EmployeeProfile>>,
    pub restoring: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            employee: Signal::new(None),
            restoring: Signal::new(true),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if *self.restoring.read() {
            SessionPhase::Loading
        } else if self.user.read().is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// The current user's parsed role. `None` while logged out or when
    /// the backend reports a role this client does not know.
    pub fn role(&self) -> Option<Role> {
        self.user.read().as_ref().and_then(|u| u.role())
    }

    pub fn set_session(
        &mut self,
        token: &str,
        user: AuthUser,
        employee: Option<EmployeeProfile>,
    ) {
        storage::store_token(token);
        self.user.set(Some(user));
        self.employee.set(employee);
    }

    /// Drop the session and the stored token. Purely client-side; the
    /// backend holds no session state to revoke.
    pub fn clear(&mut self) {
        storage::clear_token();
        self.user.set(None);
        self.employee.set(None);
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Hook for the current user's role.
pub fn use_role() -> Option<Role> {
    use_session().role()
}

/// Name shown in the sidebar footer: the employee's full name when a
/// profile is attached, the account email otherwise.
pub fn use_display_name() -> String {
    let session = use_session();
    let from_profile = session
        .employee
        .read()
        .as_ref()
        .map(|e| e.full_name.clone());
    from_profile.unwrap_or_else(|| {
        session
            .user
            .read()
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    })
}
