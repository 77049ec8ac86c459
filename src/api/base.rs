use async_trait::async_trait;

use crate::error::AuthError;
use crate::models::{RegistrationRequest, TokenResponse, UserProfile};

/// The authentication service the session talks to. One method per endpoint.
///
/// Abstracted behind a trait so the session store can be exercised against a
/// canned implementation in tests.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /register`. Returns the created profile on success.
    async fn register(&self, request: &RegistrationRequest) -> Result<UserProfile, AuthError>;

    /// `POST /login`. Returns the access token on success.
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AuthError>;

    /// `GET /users/me` with the token as a bearer credential.
    async fn fetch_current_user(&self, token: &str) -> Result<UserProfile, AuthError>;
}
