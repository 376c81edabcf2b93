//! Bearer token resolution from multiple sources

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{BlError, Result};

/// Claims we read from a JWT payload
#[derive(Deserialize, Debug)]
struct JwtClaims {
    exp: Option<i64>,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    jwt_path: Option<PathBuf>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a resolver reading the login utility's JWT file under HOME
    pub fn new() -> Self {
        Self {
            jwt_path: dirs::home_dir().map(|p| p.join(credentials::JWT_FILE_PATH)),
        }
    }

    /// Create a resolver with a custom JWT file path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            jwt_path: Some(path),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. BL_TOKEN environment variable
    /// 3. JWT file written by the login utility
    ///
    /// The resolved token is rejected if it is a JWT that has expired.
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        self.resolve_at(cli_token, Utc::now())
    }

    fn resolve_at(&self, cli_token: Option<&str>, now: DateTime<Utc>) -> Result<String> {
        let token = if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            token.to_string()
        } else if let Ok(token) = std::env::var(credentials::TOKEN_ENV_VAR) {
            debug!(
                "Using token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            token
        } else {
            debug!(
                "No token in CLI or {}, trying JWT file",
                credentials::TOKEN_ENV_VAR
            );
            self.read_jwt_file()?
        };

        check_expiry(&token, now)?;
        Ok(token)
    }

    /// Read token from the login utility's JWT file
    fn read_jwt_file(&self) -> Result<String> {
        let path = self
            .jwt_path
            .as_deref()
            .ok_or_else(|| BlError::Auth(Self::token_not_found_message(None)))?;

        debug!("Looking for JWT file at: {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|_| BlError::Auth(Self::token_not_found_message(Some(path))))?;

        let token = content.trim();
        if token.is_empty() {
            return Err(BlError::Auth(Self::token_not_found_message(Some(path))));
        }
        debug!("Using token from JWT file {}", path.display());
        Ok(token.to_string())
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(jwt_path: Option<&Path>) -> String {
        let file_info = jwt_path
            .map(|p| format!(" or in {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      bl --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. Platform login:    log in with the brainlife CLI (writes ~/{})\n\
             \n\
             Checked: env var [{}]{}",
            credentials::TOKEN_ENV_VAR,
            credentials::JWT_FILE_PATH,
            credentials::TOKEN_ENV_VAR,
            file_info
        )
    }
}

/// Decode the `exp` claim of a JWT, if the token is one
fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut parts = token.split('.');
    let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: JwtClaims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp?, 0)
}

fn check_expiry(token: &str, now: DateTime<Utc>) -> Result<()> {
    match jwt_expiry(token) {
        Some(exp) if exp <= now => Err(BlError::Auth(format!(
            "Token expired at {}. Please log in again.",
            exp.format("%Y-%m-%d %H:%M:%S UTC")
        ))),
        Some(exp) => {
            debug!("Token valid until {}", exp);
            Ok(())
        }
        None => {
            debug!("Token is not a JWT with an exp claim, sending as-is");
            Ok(())
        }
    }
}
