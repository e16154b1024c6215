//! Typed errors surfaced by commands

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("error reading service: no service ID found. Provide one with --service-id or set service_id in fastly.toml")]
    NoServiceId,

    /// The API answered with a non-success status.
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected API response")]
    Decode(#[from] serde_json::Error),

    #[error("invalid API endpoint {endpoint}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    #[error("failed to read config file {path}: {reason}")]
    ConfigFile { path: String, reason: String },
}
