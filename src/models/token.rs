use serde::{Deserialize, Serialize};

/// Response body of a successful `POST /login`.
///
/// The token itself is opaque to the client; it is stored verbatim and sent
/// back as a bearer credential on authenticated requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Credentials sent to `POST /login`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
