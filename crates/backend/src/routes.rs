use std::sync::Arc;

use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::Config;
use crate::system::auth::jwt::TokenVerifier;
use crate::system::auth::middleware::{route_guard, GuardState};
use crate::system::middleware::request_logger::request_logger;

/// Application router: `/health`, then the guarded SPA bundle.
///
/// Unknown paths get `index.html` so the client router can take over.
pub fn build_router(config: &Config) -> Router {
    let dist = config.dist_path();
    let verifier = TokenVerifier::new(config.auth.jwt_secret.as_deref());
    if !verifier.verifies_signatures() {
        tracing::warn!("auth.jwt_secret is not set; token claims are not verified");
    }

    let guard = Arc::new(GuardState {
        routes: config.routes.clone(),
        cookie_name: config.auth.cookie_name.clone(),
        verifier,
    });

    let spa = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));
    let guarded = Router::new()
        .fallback_service(spa)
        .layer(middleware::from_fn_with_state(guard, route_guard));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(guarded)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use contracts::system::auth::TokenClaims;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use tower::ServiceExt;

    fn config(secret: Option<&str>) -> Config {
        let mut config = Config::embedded().unwrap();
        config.server.dist_dir = std::env::temp_dir()
            .join("elos-portal-missing-dist")
            .to_string_lossy()
            .into_owned();
        config.auth.jwt_secret = secret.map(str::to_string);
        config
    }

    fn mint_claims(secret: &str, claims: &TokenClaims) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    fn mint(secret: &str, role: &str) -> String {
        mint_claims(
            secret,
            &TokenClaims {
                sub: Some("42".into()),
                role: Some(role.into()),
                exp: Some((chrono::Utc::now().timestamp() + 3600).into()),
            },
        )
    }

    async fn get(router: Router, path: &str, token: Option<&str>) -> axum::response::Response {
        let mut req = Request::builder().uri(path);
        if let Some(token) = token {
            req = req.header(header::COOKIE, format!("authToken={}", token));
        }
        router.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
    }

    fn location(response: &axum::response::Response) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_health_is_not_guarded() {
        let response = get(build_router(&config(None)), "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_anonymous_is_sent_to_login() {
        let router = build_router(&config(None));
        let response = get(router.clone(), "/records", None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), Some("/login"));

        let response = get(router.clone(), "/login", None).await;
        assert!(location(&response).is_none());

        let response = get(router, "/", None).await;
        assert!(location(&response).is_none());
    }

    #[tokio::test]
    async fn test_static_assets_pass() {
        let response = get(build_router(&config(None)), "/logo.svg", None).await;
        assert!(location(&response).is_none());
    }

    #[tokio::test]
    async fn test_role_redirects() {
        let router = build_router(&config(None));
        let admin = mint("unused", "ADMIN");
        let user = mint("unused", "USER");

        let response = get(router.clone(), "/records", Some(&admin)).await;
        assert_eq!(location(&response), Some("/admin"));

        let response = get(router.clone(), "/admin/users", Some(&user)).await;
        assert_eq!(location(&response), Some("/records"));

        let response = get(router, "/records?type=denuncia", Some(&user)).await;
        assert!(location(&response).is_none());
    }

    #[tokio::test]
    async fn test_malformed_token_clears_cookie() {
        let response = get(build_router(&config(None)), "/records", Some("not-a-jwt")).await;
        assert_eq!(location(&response), Some("/login"));
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(cookie.starts_with("authToken=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_signed_mode_rejects_forged_tokens() {
        let router = build_router(&config(Some("s3cret")));

        let response = get(router.clone(), "/admin", Some(&mint("s3cret", "ADMIN"))).await;
        assert!(location(&response).is_none());

        let forged = mint("guess", "ADMIN");
        let response = get(router.clone(), "/admin", Some(&forged)).await;
        assert_eq!(location(&response), Some("/login"));

        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
        let payload = URL_SAFE_NO_PAD.encode(r#"{"role":"ADMIN"}"#);
        let unsigned = format!("{}.{}.", header, payload);
        let response = get(router, "/admin", Some(&unsigned)).await;
        assert_eq!(location(&response), Some("/login"));
    }

    #[tokio::test]
    async fn test_numeric_subject_is_accepted() {
        let claims = TokenClaims {
            sub: Some(42.into()),
            role: Some("ADMIN".into()),
            exp: Some((chrono::Utc::now().timestamp() + 3600).into()),
        };

        for secret in [None, Some("s3cret")] {
            let router = build_router(&config(secret));
            let token = mint_claims(secret.unwrap_or("unused"), &claims);
            let response = get(router.clone(), "/admin", Some(&token)).await;
            assert!(location(&response).is_none());
            assert!(response.headers().get(header::SET_COOKIE).is_none());

            let response = get(router, "/records", Some(&token)).await;
            assert_eq!(location(&response), Some("/admin"));
        }
    }
}
