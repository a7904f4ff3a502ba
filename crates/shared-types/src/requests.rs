use crate::profile::{AuthUser, EmployeeProfile};
use serde::{Deserialize, Serialize};

/// Body for `POST /auth/login`. The two-factor code is sent as an empty
/// string on the first attempt; the backend answers `requires_2fa` when
/// the account has a second factor enrolled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub two_factor_code: String,
}

/// Response to `POST /auth/login`.
///
/// Two shapes share this type: the challenge response (`requires_2fa`
/// true, everything else absent) and the success response (token and
/// profiles present). [`LoginResponse::requires_2fa`] defaults to false
/// so the success shape needs no extra field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub requires_2fa: bool,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub employee: Option<EmployeeProfile>,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// Response to `GET /auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub user: AuthUser,
    #[serde(default)]
    pub employee: Option<EmployeeProfile>,
}

/// Body for `POST /auth/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Plain acknowledgement payload (`{"message": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
