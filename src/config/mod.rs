//! Configuration management

pub mod manifest;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::CliError;

pub const DEFAULT_ENDPOINT: &str = "https://api.fastly.com";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// API token sent as `Fastly-Key`
    pub token: Option<String>,

    /// Where the token came from
    pub token_source: TokenSource,

    /// API base URL
    pub endpoint: String,

    /// Output format
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Environment,
    ConfigFile,
    Undefined,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Flag => write!(f, "--token"),
            TokenSource::Environment => write!(f, "FASTLY_API_TOKEN"),
            TokenSource::ConfigFile => write!(f, "config file"),
            TokenSource::Undefined => write!(f, "nowhere"),
        }
    }
}

/// Global values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub endpoint: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Contents of `<config dir>/fastly/config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub fastly: FastlySection,
    #[serde(default)]
    pub user: UserSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FastlySection {
    pub api_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSection {
    pub token: Option<String>,
    #[allow(dead_code)]
    pub email: Option<String>,
}

impl ConfigFile {
    /// Read the user config file; a missing file is an empty config
    pub fn load() -> Result<Self> {
        let Some(path) = Config::config_file_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| CliError::ConfigFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| {
            CliError::ConfigFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl Config {
    /// Load configuration from flags, environment variables and the config file
    pub fn load(overrides: Overrides) -> Result<Self> {
        let file = ConfigFile::load()?;
        let config = Self::resolve(overrides, |key| env::var(key).ok(), &file);

        if config.token.is_none() {
            warn!("No API token configured. Set FASTLY_API_TOKEN or pass --token");
        }

        Ok(config)
    }

    /// Pick each setting from the first source that has it
    pub fn resolve<F>(overrides: Overrides, env: F, file: &ConfigFile) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (token, token_source) = if let Some(token) = overrides.token {
            (Some(token), TokenSource::Flag)
        } else if let Some(token) = env("FASTLY_API_TOKEN").filter(|t| !t.is_empty()) {
            (Some(token), TokenSource::Environment)
        } else if let Some(token) = file.user.token.clone().filter(|t| !t.is_empty()) {
            (Some(token), TokenSource::ConfigFile)
        } else {
            (None, TokenSource::Undefined)
        };

        let endpoint = overrides
            .endpoint
            .or_else(|| env("FASTLY_API_ENDPOINT").filter(|e| !e.is_empty()))
            .or_else(|| file.fastly.api_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let output_format = overrides.format.unwrap_or_else(|| {
            match env("FASTLY_OUTPUT_FORMAT")
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Table,
            }
        });

        Self {
            token,
            token_source,
            endpoint,
            output_format,
        }
    }

    /// Lines printed ahead of command output in verbose mode
    pub fn describe(&self) -> String {
        let token = match self.token_source {
            TokenSource::Undefined => "Fastly API token not provided".to_string(),
            source => format!("Fastly API token provided via {}", source),
        };
        format!("{}\nFastly API endpoint: {}\n", token, self.endpoint)
    }

    /// Get config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("fastly"))
            .ok_or_else(|| anyhow!("Cannot determine config directory"))
    }

    /// Path of the user config file, if a config directory exists on this platform
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().ok().map(|dir| dir.join("config.toml"))
    }
}
