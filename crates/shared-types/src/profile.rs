use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// Authenticated account as returned by the backend's `user` payload.
///
/// `role` is kept as the raw wire string; use [`AuthUser::role`] for the
/// typed view. An unknown role string parses to `None` and therefore
/// holds no permissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default)]
    pub last_login: Option<String>,
}

fn default_true() -> bool {
    true
}

impl AuthUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role_name)
    }
}

/// Employee record attached to an account. Absent for accounts without
/// an employee profile (the backend sends `null`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeProfile {
    pub id: String,
    pub user_id: String,
    pub employee_number: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub hire_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub reward_points: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
