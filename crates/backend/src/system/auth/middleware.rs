use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use contracts::system::auth::{cookie_value, GuardDecision, RouteTable};

use super::jwt::TokenVerifier;

/// Shared, read-only inputs of the route guard
pub struct GuardState {
    pub routes: RouteTable,
    pub cookie_name: String,
    pub verifier: TokenVerifier,
}

fn auth_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookies| cookie_value(cookies, name))
}

/// Redirects navigation the viewer may not see; everything else passes through.
pub async fn route_guard(
    State(guard): State<Arc<GuardState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let token = auth_cookie(req.headers(), &guard.cookie_name);
    let viewer = guard.verifier.viewer(token.as_deref());

    match guard.routes.evaluate(&path, &viewer) {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::Redirect { to, clear_session } => {
            tracing::debug!(path = %path, to = %to, "route guard redirect");
            let mut response = Redirect::temporary(&to).into_response();
            if clear_session {
                let expired = format!("{}=; Path=/; Max-Age=0", guard.cookie_name);
                match HeaderValue::from_str(&expired) {
                    Ok(value) => {
                        response.headers_mut().append(SET_COOKIE, value);
                    }
                    Err(e) => tracing::error!("route guard: cannot build Set-Cookie: {}", e),
                }
            }
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("authToken=a.b.c; lang=pt"));
        assert_eq!(auth_cookie(&headers, "authToken").as_deref(), Some("a.b.c"));
        assert_eq!(auth_cookie(&HeaderMap::new(), "authToken"), None);
    }
}
