//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiClient, HttpTransport};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::routes::Route;
use crate::session::{self, LocalTokenStore, TokenStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub route: ReadSignal<Route>,
    /// Page currently shown - write
    set_route: WriteSignal<Route>,
    /// Build-time settings
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), config: AppConfig) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    fn token_store(&self) -> LocalTokenStore {
        LocalTokenStore::new(self.config.with_value(|c| c.token_storage_key.clone()))
    }

    /// Show another page and record it in the location hash
    pub fn navigate(&self, route: Route) {
        let hash = route.to_hash();
        self.set_route.set(route);
        if let Some(window) = web_sys::window() {
            if window.location().set_hash(&hash).is_err() {
                log::warn!("could not update location hash to {}", hash);
            }
        }
    }

    /// Client for a protected page. Redirects to login and returns `None`
    /// when no token is stored, so callers never reach the network.
    pub fn authorize(&self) -> Option<ApiClient> {
        let config = self.config();
        match session::authorize(&self.token_store(), &config, HttpTransport::default()) {
            Ok(client) => Some(client),
            Err(route) => {
                self.navigate(route);
                None
            }
        }
    }

    /// Store a token typed on the login page
    pub fn sign_in(&self, token: &str) -> bool {
        session::sign_in(&self.token_store(), token)
    }

    pub fn sign_out(&self) {
        self.token_store().clear();
        log::info!("signed out");
        self.navigate(Route::Login);
    }

    /// A rejected token ends the session
    pub fn check_auth(&self, err: &ApiError) {
        if err.is_unauthorized() {
            log::warn!("token rejected by server");
            self.sign_out();
        }
    }
}

/// Current location hash, empty outside a browser
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
