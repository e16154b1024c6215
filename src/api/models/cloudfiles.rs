//! Rackspace Cloudfiles logging endpoints

use serde::{Deserialize, Serialize};

use super::{
    display_opt, display_uint, flexible_uint, null_as_default, LogFormat, LogFormatOptions,
    Timestamps,
};
use crate::api::resource::{Resource, ServiceVersion};
use crate::output::Render;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloudfiles {
    pub service_id: String,
    pub version: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bucket_name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default, deserialize_with = "flexible_uint")]
    pub period: Option<u32>,
    #[serde(default, deserialize_with = "flexible_uint")]
    pub gzip_level: Option<u32>,
    #[serde(default)]
    pub message_type: Option<String>,
    #[serde(default)]
    pub timestamp_format: Option<String>,
    #[serde(flatten)]
    pub log_format: LogFormat,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCloudfiles {
    pub name: String,
    pub user: String,
    pub access_key: String,
    pub bucket_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gzip_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
    #[serde(flatten)]
    pub log_format: LogFormatOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCloudfiles {
    pub name: String,
    pub user: String,
    pub access_key: String,
    pub bucket_name: String,
    pub path: Option<String>,
    pub region: Option<String>,
    pub public_key: Option<String>,
    pub period: Option<u32>,
    pub gzip_level: Option<u32>,
    pub message_type: Option<String>,
    pub timestamp_format: Option<String>,
    #[serde(flatten)]
    pub log_format: LogFormat,
}

impl From<&Cloudfiles> for UpdateCloudfiles {
    fn from(cf: &Cloudfiles) -> Self {
        Self {
            name: cf.name.clone(),
            user: cf.user.clone(),
            access_key: cf.access_key.clone(),
            bucket_name: cf.bucket_name.clone(),
            path: cf.path.clone(),
            region: cf.region.clone(),
            public_key: cf.public_key.clone(),
            period: cf.period,
            gzip_level: cf.gzip_level,
            message_type: cf.message_type.clone(),
            timestamp_format: cf.timestamp_format.clone(),
            log_format: cf.log_format.clone(),
        }
    }
}

impl Resource for Cloudfiles {
    type Scope = ServiceVersion;

    const NOUN: &'static str = "Cloudfiles logging endpoint";
    const COLLECTION: &'static [&'static str] = &["logging", "cloudfiles"];

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

impl Render for Cloudfiles {
    const COLUMNS: &'static [&'static str] = &["SERVICE", "VERSION", "NAME"];
    const LABEL: &'static str = "Cloudfiles";

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
            ("Access key", self.access_key.clone()),
            ("Bucket", self.bucket_name.clone()),
            ("Path", display_opt(&self.path)),
            ("Region", display_opt(&self.region)),
            ("Period", display_uint(self.period)),
            ("GZip level", display_uint(self.gzip_level)),
            ("Message type", display_opt(&self.message_type)),
            ("Timestamp format", display_opt(&self.timestamp_format)),
            ("Public key", display_opt(&self.public_key)),
        ];
        fields.extend(self.log_format.fields());
        fields
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
