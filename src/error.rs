use std::error::Error;
use std::fmt;

/// Error type shared by every authentication operation.
///
/// The three variants mirror what the authentication service can do to us:
/// reject the request with a readable message, reject it specifically with
/// 401 (which forces a logout when it happens on a profile fetch), or not
/// answer at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A non-401 error status from the service, carrying the human-readable
    /// `detail` field of its JSON error body (or the status reason when the
    /// body has none).
    Service { status: u16, detail: String },
    /// A 401 response. On a profile fetch this triggers forced logout.
    Unauthorized { detail: String },
    /// The request never produced a usable response (connect failure,
    /// timeout, unreadable body).
    Network(String),
}

impl AuthError {
    /// The service-provided message, if the service answered at all.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AuthError::Service { detail, .. } => Some(detail),
            AuthError::Unauthorized { detail } => Some(detail),
            AuthError::Network(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::Unauthorized { .. })
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Service { status, detail } => {
                write!(f, "service error {}: {}", status, detail)
            }
            AuthError::Unauthorized { detail } => write!(f, "unauthorized: {}", detail),
            AuthError::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

impl Error for AuthError {}
