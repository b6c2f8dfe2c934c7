use std::sync::Arc;

use contracts::system::auth::{decode_claims_unverified, Role, Viewer};
use leptos::prelude::*;

use super::storage::{CookieTokenStore, TokenStore};

/// Access token holder shared through context.
///
/// The token is read from the injected store once and mirrored in a signal so
/// views react to login and logout.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    token: RwSignal<Option<String>>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let token = RwSignal::new(store.get());
        Self { store, token }
    }

    pub fn with_cookie_store() -> Self {
        Self::new(Arc::new(CookieTokenStore))
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn viewer(&self) -> Viewer {
        self.token.with(|t| Viewer::from_token(t.as_deref()))
    }

    pub fn role(&self) -> Option<Role> {
        self.token.with(|t| {
            t.as_deref()
                .and_then(|t| decode_claims_unverified(t).ok())
                .map(|claims| claims.role())
        })
    }

    pub fn sign_in(&self, token: &str) {
        self.store.set(token);
        self.token.set(Some(token.to_string()));
    }

    pub fn sign_out(&self) {
        self.store.clear();
        self.token.set(None);
    }
}

pub fn provide_session(session: Session) {
    provide_context(session);
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided in context")
}
