//! Navigation guard: decides, from token presence and role, whether a path may
//! be shown or where to redirect. Runs on the server before the SPA is served
//! and again on every client-side navigation.

use serde::{Deserialize, Serialize};

use super::{decode_claims_unverified, Role};

/// Who is navigating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Authenticated(Role),
    /// A token is present but cannot be decoded
    Malformed,
}

impl Viewer {
    /// Classifies a raw cookie value without verifying the signature.
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            None => Viewer::Anonymous,
            Some(token) => match decode_claims_unverified(token) {
                Ok(claims) => Viewer::Authenticated(claims.role()),
                Err(e) => {
                    log::warn!("route guard: unreadable token: {}", e);
                    Viewer::Malformed
                }
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect {
        to: String,
        /// Drop the session cookie before redirecting
        clear_session: bool,
    },
}

impl GuardDecision {
    fn redirect(to: &str) -> Self {
        GuardDecision::Redirect {
            to: to.to_string(),
            clear_session: false,
        }
    }
}

fn default_login() -> String {
    "/login".to_string()
}

fn default_user_home() -> String {
    "/records".to_string()
}

fn default_admin_home() -> String {
    "/admin".to_string()
}

fn default_admin_prefixes() -> Vec<String> {
    vec!["/admin".to_string()]
}

fn default_public() -> Vec<String> {
    ["/", "/home", "/login", "/register"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_static_extensions() -> Vec<String> {
    ["svg", "png", "jpg", "pdf", "ico", "js", "wasm", "css"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Route classification used by the guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default = "default_login")]
    pub login: String,
    #[serde(default = "default_user_home")]
    pub user_home: String,
    #[serde(default = "default_admin_home")]
    pub admin_home: String,
    /// Each prefix covers the path itself and everything below it
    #[serde(default = "default_admin_prefixes")]
    pub admin: Vec<String>,
    #[serde(default = "default_public")]
    pub public: Vec<String>,
    #[serde(default = "default_static_extensions")]
    pub static_extensions: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            login: default_login(),
            user_home: default_user_home(),
            admin_home: default_admin_home(),
            admin: default_admin_prefixes(),
            public: default_public(),
            static_extensions: default_static_extensions(),
        }
    }
}

impl RouteTable {
    pub fn is_static_asset(&self, path: &str) -> bool {
        let last = path.rsplit('/').next().unwrap_or(path);
        match last.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => self
                .static_extensions
                .iter()
                .any(|e| e.eq_ignore_ascii_case(ext)),
            _ => false,
        }
    }

    pub fn is_public(&self, path: &str) -> bool {
        let path = normalize(path);
        self.public.iter().any(|p| p == path)
    }

    pub fn is_admin_only(&self, path: &str) -> bool {
        let path = normalize(path);
        self.admin.iter().any(|prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Landing page of a role
    pub fn home_for(&self, role: &Role) -> &str {
        if role.is_admin() {
            &self.admin_home
        } else {
            &self.user_home
        }
    }

    pub fn evaluate(&self, path: &str, viewer: &Viewer) -> GuardDecision {
        if self.is_static_asset(path) {
            return GuardDecision::Allow;
        }

        let role = match viewer {
            Viewer::Anonymous if self.is_public(path) => return GuardDecision::Allow,
            Viewer::Anonymous => return GuardDecision::redirect(&self.login),
            Viewer::Malformed => {
                return GuardDecision::Redirect {
                    to: self.login.clone(),
                    clear_session: true,
                }
            }
            Viewer::Authenticated(role) => role,
        };

        let admin_path = self.is_admin_only(path);
        if !role.is_admin() && admin_path {
            return GuardDecision::redirect(&self.user_home);
        }
        if role.is_admin() && !admin_path {
            return GuardDecision::redirect(&self.admin_home);
        }
        GuardDecision::Allow
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
