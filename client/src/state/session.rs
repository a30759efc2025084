//! Authenticated session: token persistence, login/logout and the
//! request wrapper that turns auth failures into a forced logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` owns the authoritative [`AuthState`] and the persisted token.
//! Components never mutate auth state directly; they call into the session
//! and observe changes through [`Session::subscribe`], which `app.rs` wires
//! to an `RwSignal<AuthState>`.
//!
//! EXPIRY
//! ======
//! When several authenticated calls fail with 401/403 at once, only the call
//! whose token is still the persisted one ends the session. Every caller gets
//! [`ApiError::AuthExpired`], but observers see a single transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::auth::AuthState;
use crate::net::error::{ApiError, CONNECTION_ERROR_MESSAGE, LOGIN_FAILED_MESSAGE, is_auth_failure, server_message};
use crate::net::http::{ApiRequest, ApiResponse, BrowserClient, HttpClient};
use crate::net::types::{LoginResponse, User};

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persistent slot for the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory token slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Token slot backed by `window.localStorage`, with an in-memory copy.
///
/// The copy keeps a fresh login usable for the life of the page when the
/// browser refuses to persist it (private mode, quota, SSR). After a reload
/// only the persisted token survives.
#[derive(Clone, Debug, Default)]
pub struct BrowserTokenStore {
    cache: MemoryTokenStore,
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl BrowserTokenStore {
    #[cfg(feature = "hydrate")]
    fn load_persisted() -> Option<String> {
        local_storage()
            .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    #[cfg(not(feature = "hydrate"))]
    fn load_persisted() -> Option<String> {
        None
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        self.cache.load().or_else(Self::load_persisted)
    }

    fn save(&self, token: &str) {
        self.cache.save(token);
        #[cfg(feature = "hydrate")]
        {
            let persisted = local_storage().is_some_and(|storage| storage.set_item(TOKEN_STORAGE_KEY, token).is_ok());
            if !persisted {
                log::warn!("session token kept in memory only");
            }
        }
    }

    fn clear(&self) {
        self.cache.clear();
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

type Observer = Rc<dyn Fn(&AuthState)>;

/// Session shared by every page. Clones share state, store and observers.
pub struct Session<C, S> {
    client: C,
    store: S,
    state: Rc<RefCell<AuthState>>,
    observers: Rc<RefCell<Vec<Observer>>>,
}

impl<C: Clone, S: Clone> Clone for Session<C, S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            store: self.store.clone(),
            state: Rc::clone(&self.state),
            observers: Rc::clone(&self.observers),
        }
    }
}

impl<C: HttpClient, S: TokenStore> Session<C, S> {
    pub fn new(client: C, store: S) -> Self {
        Self {
            client,
            store,
            state: Rc::new(RefCell::new(AuthState::initializing())),
            observers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Register an observer called with the new state after every change.
    pub fn subscribe(&self, observer: impl Fn(&AuthState) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Validate the persisted token against `GET /api/me`.
    ///
    /// Any failure discards the token; the session then starts logged out.
    pub async fn initialize(&self) {
        self.update(|state| state.loading = true);

        if let Some(token) = self.store.load() {
            match self.fetch_current_user(&token).await {
                Ok(user) => {
                    log::info!("session restored for {}", user.username);
                    self.update(|state| {
                        state.token = Some(token);
                        state.user = Some(user);
                    });
                }
                Err(e) => {
                    log::warn!("stored token rejected: {e}");
                    if self.store.load().as_deref() == Some(token.as_str()) {
                        self.store.clear();
                    }
                }
            }
        }

        self.update(|state| state.loading = false);
    }

    async fn fetch_current_user(&self, token: &str) -> Result<User, ApiError> {
        let req = ApiRequest::get("/api/me").with_bearer(token);
        self.client.send(req).await?.ensure_success()?.json()
    }

    /// `POST /api/login`. On success the token is persisted and the user
    /// becomes current.
    ///
    /// # Errors
    ///
    /// A rejected login yields [`ApiError::Validation`] carrying the server
    /// message or [`LOGIN_FAILED_MESSAGE`]; an unreachable backend yields
    /// [`ApiError::Network`] with [`CONNECTION_ERROR_MESSAGE`].
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let req = ApiRequest::post("/api/login").json(serde_json::json!({
            "username": username,
            "password": password,
        }));

        let resp = self.client.send(req).await.map_err(|e| {
            log::warn!("login request failed: {e}");
            ApiError::Network(CONNECTION_ERROR_MESSAGE.to_owned())
        })?;

        if !resp.is_success() {
            let message = server_message(&resp.body).unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned());
            return Err(ApiError::Validation { status: resp.status, message });
        }

        let LoginResponse { access_token, user } = resp.json()?;
        self.store.save(&access_token);
        log::info!("logged in as {}", user.username);
        let current = user.clone();
        self.update(move |state| {
            state.token = Some(access_token);
            state.user = Some(current);
        });
        Ok(user)
    }

    /// Notify the backend (best effort) and clear local session state.
    pub async fn logout(&self) {
        let token = self.store.load().or_else(|| self.state.borrow().token.clone());
        if let Some(token) = token {
            self.notify_backend_logout(&token).await;
        }
        self.clear();
    }

    /// Send `request` with the persisted bearer token.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingCredential`] without a token (no request is sent),
    /// [`ApiError::AuthExpired`] on 401/403 after the session has been ended,
    /// and transport errors unchanged. Other statuses are returned as-is.
    pub async fn authenticated_request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let Some(token) = self.store.load() else {
            return Err(ApiError::MissingCredential);
        };

        let resp = self.client.send(request.with_bearer(token.as_str())).await?;
        if is_auth_failure(resp.status) {
            self.expire(&token).await;
            return Err(ApiError::AuthExpired);
        }
        Ok(resp)
    }

    /// [`Self::authenticated_request`] followed by status check and decode.
    ///
    /// # Errors
    ///
    /// As [`Self::authenticated_request`], plus validation and parse errors.
    pub async fn authenticated_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.authenticated_request(request).await?.ensure_success()?.json()
    }

    /// Same as [`Self::authenticated_request`] but discards a successful body.
    ///
    /// # Errors
    ///
    /// As [`Self::authenticated_request`], plus non-2xx statuses.
    pub async fn authenticated_send(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.authenticated_request(request).await?.ensure_success().map(drop)
    }

    async fn expire(&self, token: &str) {
        // A newer token (or none) means another caller already handled it.
        if self.store.load().as_deref() != Some(token) {
            return;
        }
        log::warn!("authentication rejected, ending session");
        self.clear();
        self.notify_backend_logout(token).await;
    }

    async fn notify_backend_logout(&self, token: &str) {
        let req = ApiRequest::post("/api/logout").with_bearer(token);
        match self.client.send(req).await {
            Ok(resp) if !resp.is_success() => log::debug!("logout answered with status {}", resp.status),
            Ok(_) => {}
            Err(e) => log::debug!("logout notification failed: {e}"),
        }
    }

    /// Drop token and user. Observers are notified only when something
    /// was actually cleared.
    fn clear(&self) -> bool {
        self.store.clear();
        let changed = {
            let mut state = self.state.borrow_mut();
            let changed = state.token.is_some() || state.user.is_some();
            state.token = None;
            state.user = None;
            changed
        };
        if changed {
            self.notify();
        }
        changed
    }

    fn update(&self, apply: impl FnOnce(&mut AuthState)) {
        apply(&mut self.state.borrow_mut());
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let observers: Vec<Observer> = self.observers.borrow().clone();
        for observer in observers {
            observer(&snapshot);
        }
    }
}

/// Session type used by the running application.
pub type AppSession = Session<BrowserClient, BrowserTokenStore>;

/// Session handle provided through context by `App`.
pub type SessionHandle = StoredValue<AppSession, LocalStorage>;

/// Fetch the application session from context.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_session() -> AppSession {
    expect_context::<SessionHandle>().get_value()
}

/// Transport of the application session, for public (unauthenticated) calls.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_client() -> BrowserClient {
    expect_context::<SessionHandle>().with_value(|session| session.client().clone())
}
