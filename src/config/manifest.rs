//! Project manifest (`fastly.toml`) and service ID resolution

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::CliError;

pub const FILENAME: &str = "fastly.toml";

/// Fields of the package manifest. Only `service_id` is used here.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)]
pub struct Manifest {
    #[serde(default)]
    pub manifest_version: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
}

/// Where a service ID was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Undefined,
    Flag,
    File,
}

impl Manifest {
    /// Read a manifest from disk. A missing or malformed file reads as empty.
    pub fn read(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No manifest at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("Ignoring malformed manifest {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read `fastly.toml` from the working directory
    pub fn read_local() -> Self {
        Self::read(Path::new(FILENAME))
    }

    /// Service ID with its source: the flag wins over the manifest
    pub fn service_id<'a>(&'a self, flag: Option<&'a str>) -> (Option<&'a str>, Source) {
        if let Some(id) = flag.filter(|id| !id.is_empty()) {
            return (Some(id), Source::Flag);
        }

        if let Some(id) = self.service_id.as_deref().filter(|id| !id.is_empty()) {
            return (Some(id), Source::File);
        }

        (None, Source::Undefined)
    }

    /// Service ID, or `NoServiceId` when neither flag nor manifest provides one
    pub fn require_service_id(&self, flag: Option<&str>) -> Result<String, CliError> {
        match self.service_id(flag) {
            (Some(id), source) => {
                debug!("Using service ID {} ({:?})", id, source);
                Ok(id.to_string())
            }
            (None, _) => Err(CliError::NoServiceId),
        }
    }
}
