use std::fmt;

/// Error type for platform queries
#[derive(Debug)]
pub enum BlError {
    /// Token missing, expired, or rejected by the platform
    Auth(String),
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl BlError {
    /// Machine-readable category, used when errors are emitted as JSON
    pub fn kind(&self) -> &'static str {
        match self {
            BlError::Auth(_) => "auth",
            BlError::Http(_) => "transport",
            BlError::Api { .. } => "api",
            BlError::Json(_) => "json",
            BlError::Config(_) => "config",
        }
    }

    /// Structured form of the error for raw/json mode
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
        })
    }
}

impl fmt::Display for BlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlError::Auth(msg) => write!(f, "{}", msg),
            BlError::Http(e) => write!(f, "HTTP request failed: {}", e),
            BlError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            BlError::Json(msg) => write!(f, "JSON error: {}", msg),
            BlError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for BlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BlError {
    fn from(err: reqwest::Error) -> Self {
        BlError::Http(err)
    }
}

impl From<serde_json::Error> for BlError {
    fn from(err: serde_json::Error) -> Self {
        BlError::Json(err.to_string())
    }
}

/// Result type alias for platform operations
pub type Result<T> = std::result::Result<T, BlError>;
