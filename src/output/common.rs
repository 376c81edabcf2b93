//! Raw output and error reporting

use crate::error::BlError;

/// Serialize fetched records exactly as the server returned them
pub fn raw_json(records: &[serde_json::Value]) -> String {
    serde_json::Value::Array(records.to_vec()).to_string()
}

/// Error text for stderr: JSON in raw mode, plain text otherwise
pub fn error_message(err: &BlError, raw: bool) -> String {
    if raw {
        err.to_json().to_string()
    } else {
        format!("Error: {}", err)
    }
}

/// Print an error to stderr in the form the caller asked for
pub fn output_error(err: &BlError, raw: bool) {
    eprintln!("{}", error_message(err, raw));
}
