//! Resource addressing and the generic CRUD calls shared by every resource

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::api::client::FastlyClient;
use crate::api::response::StatusBody;
use crate::error::CliError;

/// The part of the API a resource lives under
pub trait Scope: fmt::Display {
    /// Path segments of the scope itself
    fn segments(&self) -> Vec<String>;

    /// Labelled values for describe and verbose output
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// A service version: scope of dictionaries and logging endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceVersion {
    pub service_id: String,
    pub version: u32,
}

impl fmt::Display for ServiceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service {} version {}", self.service_id, self.version)
    }
}

impl Scope for ServiceVersion {
    fn segments(&self) -> Vec<String> {
        vec![
            "service".to_string(),
            self.service_id.clone(),
            "version".to_string(),
            self.version.to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Service ID", self.service_id.clone()),
            ("Version", self.version.to_string()),
        ]
    }
}

/// A dictionary: scope of dictionary items, which are not versioned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryScope {
    pub service_id: String,
    pub dictionary_id: String,
}

impl fmt::Display for DictionaryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "service {} dictionary {}",
            self.service_id, self.dictionary_id
        )
    }
}

impl Scope for DictionaryScope {
    fn segments(&self) -> Vec<String> {
        vec![
            "service".to_string(),
            self.service_id.clone(),
            "dictionary".to_string(),
            self.dictionary_id.clone(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Service ID", self.service_id.clone()),
            ("Dictionary ID", self.dictionary_id.clone()),
        ]
    }
}

/// A named configuration object managed through create/get/list/update/delete
pub trait Resource: DeserializeOwned + Serialize {
    type Scope: Scope;

    /// Noun used in confirmation messages
    const NOUN: &'static str;

    /// Segments below the scope used to create and address the resource
    const COLLECTION: &'static [&'static str];

    /// Segments below the scope used to list resources
    const LISTING: &'static [&'static str] = Self::COLLECTION;

    const UPDATE_METHOD: Method = Method::PUT;

    /// Key the resource is addressed by
    fn name(&self) -> &str;

    /// Scope as reported by the API
    fn scope(&self) -> Self::Scope;
}

fn path<R: Resource>(scope: &R::Scope, tail: &[&str], name: Option<&str>) -> Vec<String> {
    let mut segments = scope.segments();
    segments.extend(tail.iter().map(|s| s.to_string()));
    segments.extend(name.map(str::to_string));
    segments
}

impl FastlyClient {
    pub async fn create_resource<R: Resource, B: Serialize>(
        &self,
        scope: &R::Scope,
        body: &B,
    ) -> Result<R, CliError> {
        self.post(&path::<R>(scope, R::COLLECTION, None), body)
            .await
    }

    pub async fn get_resource<R: Resource>(
        &self,
        scope: &R::Scope,
        name: &str,
    ) -> Result<R, CliError> {
        self.get(&path::<R>(scope, R::COLLECTION, Some(name))).await
    }

    pub async fn list_resources<R: Resource>(&self, scope: &R::Scope) -> Result<Vec<R>, CliError> {
        self.get(&path::<R>(scope, R::LISTING, None)).await
    }

    pub async fn update_resource<R: Resource, B: Serialize>(
        &self,
        scope: &R::Scope,
        name: &str,
        body: &B,
    ) -> Result<R, CliError> {
        let segments = path::<R>(scope, R::COLLECTION, Some(name));
        if R::UPDATE_METHOD == Method::PATCH {
            self.patch(&segments, body).await
        } else {
            self.put(&segments, body).await
        }
    }

    pub async fn delete_resource<R: Resource>(
        &self,
        scope: &R::Scope,
        name: &str,
    ) -> Result<(), CliError> {
        let body: StatusBody = self
            .delete(&path::<R>(scope, R::COLLECTION, Some(name)))
            .await?;
        debug!("Delete status: {}", body.status);
        Ok(())
    }
}
