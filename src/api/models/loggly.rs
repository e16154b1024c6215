//! Loggly logging endpoints

use serde::{Deserialize, Serialize};

use super::{null_as_default, LogFormat, LogFormatOptions, Timestamps};
use crate::api::resource::{Resource, ServiceVersion};
use crate::output::Render;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loggly {
    pub service_id: String,
    pub version: u32,
    pub name: String,
    /// Loggly customer token
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(flatten)]
    pub log_format: LogFormat,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateLoggly {
    pub name: String,
    pub token: String,
    #[serde(flatten)]
    pub log_format: LogFormatOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateLoggly {
    pub name: String,
    pub token: String,
    #[serde(flatten)]
    pub log_format: LogFormat,
}

impl From<&Loggly> for UpdateLoggly {
    fn from(l: &Loggly) -> Self {
        Self {
            name: l.name.clone(),
            token: l.token.clone(),
            log_format: l.log_format.clone(),
        }
    }
}

impl Resource for Loggly {
    type Scope = ServiceVersion;

    const NOUN: &'static str = "Loggly logging endpoint";
    const COLLECTION: &'static [&'static str] = &["logging", "loggly"];

    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> ServiceVersion {
        ServiceVersion {
            service_id: self.service_id.clone(),
            version: self.version,
        }
    }
}

impl Render for Loggly {
    const COLUMNS: &'static [&'static str] = &["SERVICE", "VERSION", "NAME"];
    const LABEL: &'static str = "Loggly";

    fn row(&self) -> Vec<String> {
        vec![
            self.service_id.clone(),
            self.version.to_string(),
            self.name.clone(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("Name", self.name.clone()), ("Token", self.token.clone())];
        fields.extend(self.log_format.fields());
        fields
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
