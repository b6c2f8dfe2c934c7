use contracts::shared::api_error::ApiError;
use contracts::shared::filters::UrlWriter;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::session::{use_session, Session};
use crate::shared::toast::{use_toasts, ToastService};
use crate::shared::url_filters::RouterUrlWriter;

pub const UNAUTHENTICATED: &str = "unauthenticated";

/// Query of `/login` when a page sends the user there
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRedirect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl LoginRedirect {
    pub fn unauthenticated(return_to: &str) -> Self {
        Self {
            message: Some(UNAUTHENTICATED.to_string()),
            redirect: Some(return_to.to_string()).filter(|r| r.starts_with('/')),
        }
    }

    /// Sign in first, then continue to `dest`
    pub fn then(dest: &str) -> Self {
        Self {
            message: None,
            redirect: Some(dest.to_string()).filter(|r| r.starts_with('/')),
        }
    }

    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn to_url(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(query) if !query.is_empty() => format!("/login?{}", query),
            _ => "/login".to_string(),
        }
    }

    /// Only same-site paths are followed after login
    pub fn safe_redirect(&self) -> Option<&str> {
        self.redirect
            .as_deref()
            .filter(|r| r.starts_with('/') && !r.starts_with("//"))
    }
}

fn current_path_and_query() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            format!(
                "{}{}",
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default()
            )
        })
        .unwrap_or_default()
}

/// Routes every `ApiError` of a page to the toast surface, or to the login
/// page when the session is missing.
#[derive(Clone, Copy)]
pub struct ErrorReporter {
    toasts: ToastService,
    session: StoredValue<Session>,
    router: StoredValue<RouterUrlWriter, LocalStorage>,
}

impl ErrorReporter {
    pub fn report(&self, err: &ApiError) {
        if !err.requires_login() {
            self.toasts.api_error(err);
            return;
        }
        log::info!("no valid session, sending the user to the login page");
        self.session.with_value(|s| s.sign_out());
        let url = LoginRedirect::unauthenticated(&current_path_and_query()).to_url();
        self.router.with_value(|r| r.navigate(&url));
    }
}

pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter {
        toasts: use_toasts(),
        session: StoredValue::new(use_session()),
        router: StoredValue::new_local(RouterUrlWriter::from_router()),
    }
}
