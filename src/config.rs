/// Configuration constants for the platform API
pub mod api {
    /// Dataset collection endpoint
    pub const DATASETS: &str = "warehouse/dataset";

    /// Project collection endpoint
    pub const PROJECTS: &str = "warehouse/project";

    /// Datatype collection endpoint
    pub const DATATYPES: &str = "warehouse/datatype";

    /// Profile collection endpoint
    pub const PROFILES: &str = "auth/profile/list";

    /// Limit sent with auxiliary lookups (0 = no limit on the platform)
    pub const UNLIMITED: u32 = 0;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// JWT file written by the platform login utility (relative to HOME)
    pub const JWT_FILE_PATH: &str = ".config/brainlife.io/.jwt";

    /// Environment variable holding a token
    pub const TOKEN_ENV_VAR: &str = "BL_TOKEN";
}

/// Configuration constants for API host resolution
pub mod host {
    /// Environment variable holding the API base URL
    pub const ENV_VAR: &str = "BL_API_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default platform API base URL
    pub const API_URL: &str = "https://brainlife.io/api";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Display strings substituted when a foreign key cannot be resolved
pub mod placeholders {
    /// Project or datatype that is not in the lookup table
    pub const UNKNOWN_NAME: &str = "Unknown";

    /// Profile id that is not in the lookup table
    pub const UNKNOWN_USER: &str = "unknown";

    /// Dataset without subject metadata
    pub const NOT_AVAILABLE: &str = "N/A";
}

/// Settings resolved once at startup and passed to every component
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the platform API, without trailing slash
    pub api_url: String,
    /// Bearer token
    pub token: String,
    /// Disable spinners and other interactive output
    pub batch: bool,
}

impl Settings {
    pub fn new(api_url: &str, token: String, batch: bool) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            batch,
        }
    }
}
