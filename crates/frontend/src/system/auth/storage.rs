use contracts::system::auth::{cookie_value, AUTH_COOKIE};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Where the access token lives between page loads
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// `authToken` cookie, readable by the server-side route guard
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieTokenStore;

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; path=/; SameSite=Lax",
        AUTH_COOKIE,
        urlencoding::encode(token)
    )
}

fn expired_cookie() -> String {
    format!("{}=; path=/; Max-Age=0", AUTH_COOKIE)
}

fn write_cookie(cookie: &str, action: &str) {
    if let Some(doc) = html_document() {
        if doc.set_cookie(cookie).is_err() {
            log::error!("session: could not {} the auth cookie", action);
        }
    }
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        cookie_value(&cookies, AUTH_COOKIE)
    }

    fn set(&self, token: &str) {
        write_cookie(&session_cookie(token), "write");
    }

    fn clear(&self) {
        write_cookie(&expired_cookie(), "clear");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_strings() {
        let cookie = session_cookie("a.b+c");
        assert_eq!(cookie, "authToken=a.b%2Bc; path=/; SameSite=Lax");
        let (pair, _) = cookie.split_once(';').unwrap();
        assert_eq!(cookie_value(pair, AUTH_COOKIE).as_deref(), Some("a.b+c"));

        let expired = expired_cookie();
        assert!(expired.starts_with("authToken=;"));
        assert!(expired.ends_with("Max-Age=0"));
    }
}
