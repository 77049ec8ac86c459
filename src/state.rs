//! Shared application context.
//!
//! The session store and route authorizer are owned by one explicit context
//! object, created at application start and handed to whatever needs
//! authentication state. There is no process-wide singleton.

use std::sync::Arc;

use tracing::info;

use crate::api::{AuthApi, HttpAuthApi};
use crate::config::ClientConfig;
use crate::routes::{NavDecision, RouteAuthorizer, RouteTable};
use crate::session::{Session, SessionStore};
use crate::storage::create_storage;

/// Application context shared by the view layer.
#[derive(Clone)]
pub struct AppContext {
    /// Client configuration loaded at startup.
    pub config: Arc<ClientConfig>,
    /// Session store owning the authentication state.
    pub session: Arc<SessionStore>,
    /// Navigation interceptor over the default route table.
    pub authorizer: Arc<RouteAuthorizer>,
}

impl AppContext {
    /// Wire up the HTTP client, token storage, session store (restoring any
    /// persisted token) and route authorizer from the config.
    pub fn new(config: ClientConfig) -> Self {
        let api: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(&config.service));
        let storage = create_storage(&config.storage);
        let session = Arc::new(SessionStore::new(api, storage));
        let authorizer = Arc::new(RouteAuthorizer::new(RouteTable::with_default_routes()));
        info!("Application context created");
        Self {
            config: Arc::new(config),
            session,
            authorizer,
        }
    }

    /// Decide a navigation attempt against one snapshot of the current
    /// session state.
    pub fn navigate(&self, path: &str) -> NavDecision {
        let snapshot: Session = self.session.snapshot();
        self.authorizer.authorize(path, &snapshot)
    }

    /// Tear the session down: logout and drop the persisted token. Used at
    /// shutdown and on an explicit session reset.
    pub fn reset(&self) {
        self.session.logout();
        info!("Application context reset");
    }
}
