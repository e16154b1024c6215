//! BigQuery logging endpoints

use serde::{Deserialize, Serialize};

use super::{display_opt, null_as_default, LogFormat, LogFormatOptions, Timestamps};
use crate::api::resource::{Resource, ServiceVersion};
use crate::output::Render;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigQuery {
    pub service_id: String,
    pub version: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dataset: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub table: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secret_key: String,
    #[serde(default)]
    pub template_suffix: Option<String>,
    #[serde(flatten)]
    pub log_format: LogFormat,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateBigQuery {
    pub name: String,
    pub project_id: String,
    pub dataset: String,
    pub table: String,
    pub user: String,
    pub secret_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(flatten)]
    pub log_format: LogFormatOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateBigQuery {
    pub name: String,
    pub project_id: String,
    pub dataset: String,
    pub table: String,
    pub user: String,
    pub secret_key: String,
    pub template_suffix: Option<String>,
    #[serde(flatten)]
    pub log_format: LogFormat,
}

impl From<&BigQuery> for UpdateBigQuery {
    fn from(bq: &BigQuery) -> Self {
        Self {
            name: bq.name.clone(),
            project_id: bq.project_id.clone(),
            dataset: bq.dataset.clone(),
            table: bq.table.clone(),
            user: bq.user.clone(),
            secret_key: bq.secret_key.clone(),
            template_suffix: bq.template_suffix.clone(),
            log_format: bq.log_format.clone(),
        }
    }
}

impl Resource for BigQuery {
    type Scope = ServiceVersion;

    const NOUN: &'static str = "BigQuery logging endpoint";
    const COLLECTION: &'static [&'static str] = &["logging", "bigquery"];

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

impl Render for BigQuery {
    const COLUMNS: &'static [&'static str] = &["SERVICE", "VERSION", "NAME"];
    const LABEL: &'static str = "BigQuery";

    fn row(&self) -> Vec<String> {
        vec![
            self.service_id.clone(),
            self.version.to_string(),
            self.name.clone(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("User", self.user.clone()),
            ("Project ID", self.project_id.clone()),
            ("Dataset", self.dataset.clone()),
            ("Table", self.table.clone()),
            ("Template suffix", display_opt(&self.template_suffix)),
            ("Secret key", self.secret_key.clone()),
        ];
        fields.extend(self.log_format.fields());
        fields
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
