//! REST client for the portal backend.
//!
//! Every call funnels through [`send`]: transport failures become
//! [`AppError::network`], non-2xx responses are decoded from the
//! backend's `{"error": "..."}` shape, and 2xx bodies deserialize into
//! the typed response.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, ChangePasswordRequest, DashboardData, LoginRequest, LoginResponse, MessageResponse,
    ProfileResponse,
};

use crate::config;

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn url(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}

async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, AppError> {
    let response = request.send().await.map_err(|err| {
        tracing::warn!("request failed: {err}");
        AppError::network()
    })?;

    let status = response.status().as_u16();
    let body = response.text().await.map_err(|_| AppError::network())?;

    if !(200..300).contains(&status) {
        return Err(AppError::from_response(status, &body));
    }

    serde_json::from_str(&body).map_err(|err| {
        tracing::error!("unexpected response shape: {err}");
        AppError::internal("Unexpected response from the server.")
    })
}

fn post_json<B: Serialize>(path: &str, body: &B) -> reqwest::RequestBuilder {
    client().post(url(path)).json(body)
}

fn get_authed(path: &str, token: &str) -> reqwest::RequestBuilder {
    client().get(url(path)).bearer_auth(token)
}

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    send(post_json("/auth/login", request)).await
}

pub async fn fetch_profile(token: &str) -> Result<ProfileResponse, AppError> {
    send(get_authed("/auth/profile", token)).await
}

pub async fn change_password(
    token: &str,
    request: &ChangePasswordRequest,
) -> Result<MessageResponse, AppError> {
    send(post_json("/auth/change-password", request).bearer_auth(token)).await
}

pub async fn fetch_dashboard(token: &str) -> Result<DashboardData, AppError> {
    send(get_authed("/dashboard", token)).await
}
