pub mod route_guard;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use route_guard::{GuardDecision, RouteTable, Viewer};

/// Cookie holding the access token
pub const AUTH_COOKIE: &str = "authToken";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Role claim of the access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            Some("ADMIN") => Role::Admin,
            Some("USER") | None => Role::User,
            Some(other) => Role::Other(other.to_string()),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Only `role` drives routing; other claims are kept as raw JSON so issuers
/// may type them freely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<serde_json::Value>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<serde_json::Value>,
}

impl TokenClaims {
    pub fn role(&self) -> Role {
        Role::from_claim(self.role.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Shape,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
    #[error("token signature rejected: {0}")]
    Signature(String),
}

/// Value of `name` in a `Cookie` header or `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

/// Reads the claims of a JWT without checking its signature.
///
/// Used for UI routing only; authorization is enforced by the API.
pub fn decode_claims_unverified(token: &str) -> Result<TokenClaims, TokenError> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(p), Some(_), None) if !h.is_empty() && !p.is_empty() => p,
        _ => return Err(TokenError::Shape),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_cookie_value() {
        let cookies = "theme=dark; authToken=abc.def.ghi; other=1";
        assert_eq!(cookie_value(cookies, AUTH_COOKIE).as_deref(), Some("abc.def.ghi"));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("authToken=", AUTH_COOKIE), None);
        assert_eq!(cookie_value("a=%7Bx%7D", "a").as_deref(), Some("{x}"));
    }

    #[test]
    fn test_decode_role() {
        let claims = decode_claims_unverified(&token_with(r#"{"sub":"7","role":"ADMIN"}"#)).unwrap();
        assert_eq!(claims.role(), Role::Admin);
        assert_eq!(claims.sub, Some(serde_json::json!("7")));

        let claims = decode_claims_unverified(&token_with(r#"{"sub":"8"}"#)).unwrap();
        assert_eq!(claims.role(), Role::User);
    }

    #[test]
    fn test_unrelated_claims_of_any_type() {
        let claims = decode_claims_unverified(&token_with(
            r#"{"sub":42,"role":"ADMIN","iat":1718000000,"exp":1718003600}"#,
        ))
        .unwrap();
        assert_eq!(claims.role(), Role::Admin);
        assert_eq!(claims.sub, Some(serde_json::json!(42)));

        let claims =
            decode_claims_unverified(&token_with(r#"{"sub":"7","role":"USER","exp":1718003600.5}"#))
                .unwrap();
        assert_eq!(claims.role(), Role::User);
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_claims_unverified("abc").unwrap_err(), TokenError::Shape);
        assert_eq!(decode_claims_unverified("a.b.c.d").unwrap_err(), TokenError::Shape);
        assert!(matches!(
            decode_claims_unverified("a.!!!.c"),
            Err(TokenError::Encoding(_))
        ));
        assert!(matches!(
            decode_claims_unverified(&token_with("not json")),
            Err(TokenError::Payload(_))
        ));
    }

    #[test]
    fn test_login_response_aliases() {
        for body in [
            r#"{"token":"t"}"#,
            r#"{"accessToken":"t"}"#,
            r#"{"access_token":"t"}"#,
        ] {
            let parsed: LoginResponse = serde_json::from_str(body).unwrap();
            assert_eq!(parsed.token, "t");
        }
    }
}
