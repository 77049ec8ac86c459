pub mod token;
pub mod user;

// Re-export the wire types so code outside can do "use crate::models::*;"
pub use token::{LoginRequest, TokenResponse};
pub use user::{RegistrationRequest, UserProfile};
