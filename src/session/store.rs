use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::api::AuthApi;
use crate::error::AuthError;
use crate::models::{RegistrationRequest, TokenResponse, UserProfile};
use crate::storage::TokenStorage;

const REGISTER_FALLBACK: &str = "Registration failed";
const LOGIN_FALLBACK: &str = "Login failed";
const FETCH_FALLBACK: &str = "Failed to fetch user data";

/// The in-memory authentication state. Cloned out as a snapshot so each
/// navigation attempt observes one consistent value.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Opaque bearer credential. Present iff a login succeeded and has not
    /// been followed by a logout or a 401.
    pub token: Option<String>,
    /// Profile fetched after login. May lag behind `token` in the window
    /// between login success and profile fetch completion.
    pub user: Option<UserProfile>,
    /// True while an authentication request is in flight.
    pub loading: bool,
    /// Message of the last failed attempt, for display by the view layer.
    pub error: Option<String>,
    /// When the current token was obtained or restored.
    pub established_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Owns the session state and the operations that mutate it.
///
/// All three network operations return a uniform `Result`; the failure
/// message is additionally recorded in `Session::error` so the view layer
/// can display it. An async gate serializes the operations, so at most one
/// authentication mutation is in flight at a time. The state lock is only
/// ever held for short synchronous sections, never across an await.
pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn TokenStorage>,
    state: RwLock<Session>,
    auth_gate: Mutex<()>,
}

impl SessionStore {
    /// Build the store, restoring any persisted token. A restored token makes
    /// the session authenticated immediately; the profile stays absent until
    /// the next `fetch_user_data`.
    pub fn new(api: Arc<dyn AuthApi>, storage: Arc<dyn TokenStorage>) -> Self {
        let mut session = Session::default();
        if let Some(token) = storage.load() {
            info!("Restored persisted session token");
            session.token = Some(token);
            session.established_at = Some(Utc::now());
        }
        Self {
            api,
            storage,
            state: RwLock::new(session),
            auth_gate: Mutex::new(()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// One consistent view of the session state.
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Mark the start of an authentication attempt: loading on, last error
    /// cleared.
    fn begin_attempt(&self) {
        let mut session = self.write();
        session.loading = true;
        session.error = None;
    }

    /// Send registration data to the authentication service.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<UserProfile, AuthError> {
        let _gate = self.auth_gate.lock().await;
        self.begin_attempt();

        match self.api.register(request).await {
            Ok(profile) => {
                self.write().loading = false;
                info!("Registered user '{}'", profile.username);
                Ok(profile)
            }
            Err(e) => {
                let mut session = self.write();
                session.loading = false;
                session.error = Some(e.detail().unwrap_or(REGISTER_FALLBACK).to_string());
                Err(e)
            }
        }
    }

    /// Exchange credentials for a token. On success the token is written to
    /// memory and durable storage before the profile fetch starts; a failed
    /// profile fetch is recorded in `error` (and a 401 forces logout) but
    /// does not roll back the token or fail the login.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let _gate = self.auth_gate.lock().await;
        self.begin_attempt();

        let response = match self.api.login(username, password).await {
            Ok(response) => response,
            Err(e) => {
                let mut session = self.write();
                session.loading = false;
                session.error = Some(e.detail().unwrap_or(LOGIN_FALLBACK).to_string());
                return Err(e);
            }
        };

        {
            let mut session = self.write();
            session.token = Some(response.access_token.clone());
            session.established_at = Some(Utc::now());
        }
        self.storage.store(&response.access_token);
        info!("User '{}' logged in", username);

        if let Err(e) = self.fetch_user_inner().await {
            warn!("Profile fetch after login failed: {}", e);
        }

        self.write().loading = false;
        Ok(response)
    }

    /// Fetch the current user's profile with the held token. A no-op when no
    /// token is held. A 401 response forces logout before the error is
    /// recorded.
    pub async fn fetch_user_data(&self) -> Result<Option<UserProfile>, AuthError> {
        let _gate = self.auth_gate.lock().await;
        let result = self.fetch_user_inner().await;
        self.write().loading = false;
        result
    }

    /// Profile fetch body, shared between `login` and `fetch_user_data`.
    /// Callers hold the auth gate and reset `loading` afterwards.
    async fn fetch_user_inner(&self) -> Result<Option<UserProfile>, AuthError> {
        let token = match self.read().token.clone() {
            Some(token) => token,
            None => return Ok(None),
        };
        self.write().loading = true;

        match self.api.fetch_current_user(&token).await {
            Ok(profile) => {
                debug!("Fetched profile for '{}'", profile.username);
                self.write().user = Some(profile.clone());
                Ok(Some(profile))
            }
            Err(e) => {
                if e.is_unauthorized() {
                    warn!("Token rejected by the service; logging out");
                    self.logout();
                }
                self.write().error = Some(e.detail().unwrap_or(FETCH_FALLBACK).to_string());
                Err(e)
            }
        }
    }

    /// Drop the session: token and profile cleared in memory and the token
    /// removed from durable storage. Synchronous, infallible, idempotent.
    pub fn logout(&self) {
        {
            let mut session = self.write();
            session.token = None;
            session.user = None;
            session.established_at = None;
        }
        self.storage.clear();
        info!("Session cleared");
    }
}
