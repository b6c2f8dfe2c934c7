use thiserror::Error;

const GENERIC_SERVER_MESSAGE: &str = "Ocorreu um erro ao processar a solicitação.";

/// Failure of a portal operation, one variant per user-visible error kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required endpoint URL is absent; nothing was sent
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    /// No access token; the caller must go through the login page
    #[error("not authenticated")]
    Unauthenticated,

    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status, with the server's own message when it sent one
    #[error("server responded with status {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// Body could not be parsed; `raw` is kept for the logs
    #[error("unexpected response: {raw}")]
    UnexpectedResponse { raw: String },

    /// Refused locally before any request was made
    #[error("rejected: {0}")]
    Rejected(String),
}

impl ApiError {
    /// Builds a `Server` error, picking `message` or `error` out of a JSON body.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"].iter().find_map(|key| {
                    v.get(*key)
                        .and_then(|m| m.as_str())
                        .map(str::trim)
                        .filter(|m| !m.is_empty())
                        .map(str::to_string)
                })
            });
        ApiError::Server { status, message }
    }

    pub fn unexpected(raw: impl Into<String>) -> Self {
        ApiError::UnexpectedResponse { raw: raw.into() }
    }

    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }

    /// Text for the notification surface
    pub fn user_message(&self) -> String {
        match self {
            ApiError::MissingConfig(name) => {
                format!("Configuração ausente ({}). Contate o suporte.", name)
            }
            ApiError::Unauthenticated => "Sua sessão expirou. Faça login novamente.".to_string(),
            ApiError::Network(_) => {
                "Não foi possível conectar ao servidor. Verifique sua conexão.".to_string()
            }
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server { message: None, .. } => GENERIC_SERVER_MESSAGE.to_string(),
            ApiError::UnexpectedResponse { .. } => "Resposta inesperada do servidor.".to_string(),
            ApiError::Rejected(reason) => reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_used_verbatim() {
        let err = ApiError::from_status_body(400, r#"{"message":"E-mail inválido"}"#);
        assert_eq!(err.user_message(), "E-mail inválido");

        let err = ApiError::from_status_body(409, r#"{"error":"Usuário já existe"}"#);
        assert_eq!(err.user_message(), "Usuário já existe");
    }

    #[test]
    fn test_server_without_message_is_generic() {
        let err = ApiError::from_status_body(500, "<html>boom</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message(), GENERIC_SERVER_MESSAGE);

        let err = ApiError::from_status_body(500, r#"{"message":"   "}"#);
        assert_eq!(err.user_message(), GENERIC_SERVER_MESSAGE);
    }

    #[test]
    fn test_blank_message_defers_to_error_field() {
        let err = ApiError::from_status_body(422, r#"{"message":"  ","error":"CPF inválido"}"#);
        assert_eq!(err.user_message(), "CPF inválido");

        let err = ApiError::from_status_body(422, r#"{"message":null,"error":" Campo obrigatório "}"#);
        assert_eq!(err.user_message(), "Campo obrigatório");
    }

    #[test]
    fn test_unexpected_response_hides_raw_body() {
        let err = ApiError::unexpected("not json");
        assert_eq!(err.user_message(), "Resposta inesperada do servidor.");
        assert!(err.to_string().contains("not json"));
    }

    #[test]
    fn test_requires_login() {
        assert!(ApiError::Unauthenticated.requires_login());
        assert!(!ApiError::Network("x".into()).requires_login());
    }
}
