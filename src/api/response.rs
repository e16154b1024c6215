//! API response types

use serde::{Deserialize, Serialize};

/// Error body returned by the Fastly API
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    pub msg: Option<String>,
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Human readable message for an error response, falling back to the raw body
    pub fn message(text: &str) -> String {
        let body: ErrorBody = serde_json::from_str(text).unwrap_or_default();

        match (body.msg, body.detail) {
            (Some(msg), Some(detail)) if !detail.is_empty() => format!("{}: {}", msg, detail),
            (Some(msg), _) => msg,
            (None, Some(detail)) => detail,
            (None, None) => text.trim().to_string(),
        }
    }
}

/// Body of a successful delete
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: String,
}
