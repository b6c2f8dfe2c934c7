//! API utilities for frontend-backend communication
//!
//! Endpoint URLs are fixed at build time (`PORTAL_*` environment variables);
//! a missing one fails the call before anything is sent.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Build-time endpoint set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub login: Option<&'static str>,
    pub register: Option<&'static str>,
    pub api_base: Option<&'static str>,
    pub complaint_form: Option<&'static str>,
    pub request_form: Option<&'static str>,
}

impl Endpoints {
    pub const fn from_build_env() -> Self {
        Self {
            login: option_env!("PORTAL_LOGIN_URL"),
            register: option_env!("PORTAL_REGISTER_URL"),
            api_base: option_env!("PORTAL_API_BASE_URL"),
            complaint_form: option_env!("PORTAL_COMPLAINT_FORM_URL"),
            request_form: option_env!("PORTAL_REQUEST_FORM_URL"),
        }
    }
}

pub const ENDPOINTS: Endpoints = Endpoints::from_build_env();

fn required(value: Option<&'static str>, name: &'static str) -> Result<&'static str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            log::error!("{} is not set at build time", name);
            ApiError::MissingConfig(name)
        })
}

pub fn login_url() -> Result<&'static str, ApiError> {
    required(ENDPOINTS.login, "PORTAL_LOGIN_URL")
}

pub fn register_url() -> Result<&'static str, ApiError> {
    required(ENDPOINTS.register, "PORTAL_REGISTER_URL")
}

pub fn complaint_form_url() -> Result<&'static str, ApiError> {
    required(ENDPOINTS.complaint_form, "PORTAL_COMPLAINT_FORM_URL")
}

pub fn request_form_url() -> Result<&'static str, ApiError> {
    required(ENDPOINTS.request_form, "PORTAL_REQUEST_FORM_URL")
}

/// `{api_base}{path}` with no doubled slash
pub fn api_url(path: &str) -> Result<String, ApiError> {
    let base = required(ENDPOINTS.api_base, "PORTAL_API_BASE_URL")?;
    Ok(join_url(base, path))
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Adds `Authorization: Bearer`; no token means no request.
pub fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> Result<RequestBuilder, ApiError> {
    let token = token
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::Unauthenticated)?;
    Ok(builder.header("Authorization", &format!("Bearer {}", token)))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("request failed with status {}: {}", status, body);
    if status == 401 {
        return Err(ApiError::Unauthenticated);
    }
    Err(ApiError::from_status_body(status, &body))
}

/// Sends and parses a JSON body; an unparsable body keeps the raw text for the log.
pub async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = send(request).await?;
    let raw = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str::<T>(&raw).map_err(|e| {
        log::error!("unexpected response body ({}): {}", e, raw);
        ApiError::unexpected(raw)
    })
}

/// Sends and ignores the body
pub async fn send_empty(request: Request) -> Result<(), ApiError> {
    send(request).await.map(|_| ())
}

/// Attaches a JSON body
pub fn json_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Rejected(format!("Falha ao preparar a requisição: {}", e)))
}

pub fn no_body(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .build()
        .map_err(|e| ApiError::Rejected(format!("Falha ao preparar a requisição: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://api.elos.test/", "/support-requests"),
            "https://api.elos.test/support-requests"
        );
        assert_eq!(join_url("http://x", "a/b"), "http://x/a/b");
    }

    #[test]
    fn test_missing_endpoint_is_config_error() {
        assert_eq!(required(None, "PORTAL_API_BASE_URL"), Err(ApiError::MissingConfig("PORTAL_API_BASE_URL")));
        assert_eq!(required(Some("  "), "X"), Err(ApiError::MissingConfig("X")));
        assert_eq!(required(Some("http://a"), "X"), Ok("http://a"));
    }
}
