//! Edge dictionaries

use serde::{Deserialize, Serialize};

use super::Timestamps;
use crate::api::resource::{Resource, ServiceVersion};
use crate::output::Render;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    pub service_id: String,
    pub version: u32,
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub write_only: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDictionary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateDictionary {
    pub name: String,
    pub write_only: bool,
}

impl From<&Dictionary> for UpdateDictionary {
    fn from(d: &Dictionary) -> Self {
        Self {
            name: d.name.clone(),
            write_only: d.write_only,
        }
    }
}

impl Resource for Dictionary {
    type Scope = ServiceVersion;

    const NOUN: &'static str = "dictionary";
    const COLLECTION: &'static [&'static str] = &["dictionary"];

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

impl Render for Dictionary {
    const COLUMNS: &'static [&'static str] = &["SERVICE", "VERSION", "ID", "NAME", "WRITE ONLY"];
    const LABEL: &'static str = "Dictionary";

    fn row(&self) -> Vec<String> {
        vec![
            self.service_id.clone(),
            self.version.to_string(),
            self.id.clone(),
            self.name.clone(),
            self.write_only.to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.clone()),
            ("Name", self.name.clone()),
            ("Write only", self.write_only.to_string()),
        ]
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
