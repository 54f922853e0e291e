use std::fmt;

// === ApiError ===

/// Errors surfaced by the backend transport layer.
#[derive(Debug)]
pub enum ApiError {
    /// The session token is missing, invalid, or expired.
    Authentication(String),
    /// The request never produced a usable response (DNS, connect, TLS,
    /// or mid-body transport failure).
    Network(String),
    /// The backend rejected the request or returned a malformed payload.
    Validation(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// True for token problems that should send the user back to login.
    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication(_))
    }
}
