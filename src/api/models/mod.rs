//! Typed Fastly API objects

pub mod bigquery;
pub mod cloudfiles;
pub mod dictionary;
pub mod dictionary_item;
pub mod loggly;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Lifecycle timestamps carried by every API object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Formatting options shared by all logging endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogFormat {
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(default, deserialize_with = "flexible_uint")]
    pub format_version: Option<u32>,
    #[serde(default)]
    pub placement: Option<String>,
    #[serde(default)]
    pub response_condition: Option<String>,
}

/// Formatting options sent on create; unset options are left to the API defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
}

impl LogFormat {
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Format", self.format.clone()),
            ("Format version", display_uint(self.format_version)),
            ("Response condition", display_opt(&self.response_condition)),
            ("Placement", display_opt(&self.placement)),
        ]
    }
}

/// Treat a JSON null as the type's default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(|v| v.unwrap_or_default())
}

/// Accept an unsigned number sent either as a JSON number or as a numeric string.
pub fn flexible_uint<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

pub fn display_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn display_uint(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
