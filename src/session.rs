//! Session
//!
//! Bearer token persistence and the guard every protected page passes
//! through before it may build an `ApiClient`.

use std::cell::RefCell;

use crate::api::{ApiClient, Transport};
use crate::config::AppConfig;
use crate::routes::Route;

/// Where the bearer token lives between page loads
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage`
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("could not persist auth token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// In-memory store for tests
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_string())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Client for a protected page, or the route to send the user to instead
pub fn authorize<S: TokenStore, T: Transport>(
    store: &S,
    config: &AppConfig,
    transport: T,
) -> Result<ApiClient<T>, Route> {
    match store.load().filter(|token| !token.trim().is_empty()) {
        Some(token) => Ok(ApiClient::new(config.api_base_url.clone(), token, transport)),
        None => {
            log::info!("no auth token stored, redirecting to login");
            Err(Route::Login)
        }
    }
}

/// Store a token entered on the login page. Returns false for blank input.
pub fn sign_in<S: TokenStore>(store: &S, token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }
    store.save(token);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::api::{self, Method};
    use futures::executor::block_on;

    #[test]
    fn test_missing_token_redirects_without_fetching() {
        let store = MemoryTokenStore::default();
        let transport = RecordingTransport::new();

        let result = authorize(&store, &AppConfig::default(), transport.clone());

        assert_eq!(result.err(), Some(Route::Login));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let store = MemoryTokenStore::with_token("  ");
        assert!(authorize(&store, &AppConfig::default(), RecordingTransport::new()).is_err());
    }

    #[test]
    fn test_stored_token_used_as_bearer() {
        let store = MemoryTokenStore::with_token("abc");
        let transport = RecordingTransport::new().respond(200, serde_json::json!([]));
        let client = authorize(&store, &AppConfig::default(), transport.clone()).unwrap();

        block_on(api::list_patients(&client)).unwrap();

        let request = transport.single();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "/api/patients");
        assert_eq!(request.header("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_sign_in_and_out() {
        let store = MemoryTokenStore::default();
        assert!(!sign_in(&store, "   "));
        assert_eq!(store.load(), None);

        assert!(sign_in(&store, " xyz "));
        assert_eq!(store.load().as_deref(), Some("xyz"));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
