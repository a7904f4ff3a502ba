/// Base URL for the portal backend, without a trailing slash.
///
/// Baked in at compile time: the web bundle is static, so there is no
/// runtime environment to read. Defaults to the local dev server.
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:5000/api")
}
