use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{json_body, login_url, register_url, send_empty, send_json};

/// Login with login name and password; returns the access token
pub async fn login(login: String, password: String) -> Result<String, ApiError> {
    if login.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Rejected("Informe login e senha.".to_string()));
    }
    let request = json_body(Request::post(login_url()?), &LoginRequest { login, password })?;
    let response: LoginResponse = send_json(request).await?;
    Ok(response.token)
}

/// Create an account
pub async fn register(request: RegisterRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() || request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::Rejected(
            "Por favor, preencha todos os campos obrigatórios.".to_string(),
        ));
    }
    let request = json_body(Request::post(register_url()?), &request)?;
    send_empty(request).await
}
