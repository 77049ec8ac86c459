use serde::{Deserialize, Serialize};

/// The profile of the authenticated user as returned by the authentication
/// service on `GET /users/me` and on registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
}

/// Registration payload sent to `POST /register`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegistrationRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}
