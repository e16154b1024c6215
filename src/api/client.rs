//! HTTP client for the Fastly API

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::api::response::ErrorBody;
use crate::config::Config;
use crate::error::CliError;

/// Fastly API client
#[derive(Debug, Clone)]
pub struct FastlyClient {
    client: Client,
    base: Url,
    token: Option<String>,
}

impl FastlyClient {
    /// Create a client for `endpoint`, authenticating with `token` if present
    pub fn new(endpoint: &str, token: Option<String>) -> Result<Self, CliError> {
        let invalid = |source| CliError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        };

        let base = Url::parse(endpoint).map_err(invalid)?;
        if base.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        let client = Client::builder()
            .user_agent(concat!("edgecfg/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base,
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, CliError> {
        Self::new(&config.endpoint, config.token.clone())
    }

    /// Join percent-encoded path segments onto the base URL
    pub fn url<S: AsRef<str>>(&self, segments: &[S]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(segments.iter().map(AsRef::as_ref));
        }
        url
    }

    /// Build request with authentication headers
    fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header("Accept", "application/json");

        if let Some(ref token) = self.token {
            req = req.header("Fastly-Key", token);
        }

        req
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, CliError> {
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        trace!("Response: {}", text);

        if !status.is_success() {
            return Err(CliError::Api {
                status,
                message: ErrorBody::message(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Make a GET request to the API
    pub async fn get<T: DeserializeOwned, S: AsRef<str>>(
        &self,
        segments: &[S],
    ) -> Result<T, CliError> {
        let url = self.url(segments);
        debug!("GET {}", url);

        self.send(self.build_request(Method::GET, url)).await
    }

    /// Make a POST request to the API
    pub async fn post<T: DeserializeOwned, S: AsRef<str>, B: Serialize + ?Sized>(
        &self,
        segments: &[S],
        body: &B,
    ) -> Result<T, CliError> {
        self.write(Method::POST, segments, body).await
    }

    /// Make a PUT request to the API
    pub async fn put<T: DeserializeOwned, S: AsRef<str>, B: Serialize + ?Sized>(
        &self,
        segments: &[S],
        body: &B,
    ) -> Result<T, CliError> {
        self.write(Method::PUT, segments, body).await
    }

    /// Make a PATCH request to the API
    pub async fn patch<T: DeserializeOwned, S: AsRef<str>, B: Serialize + ?Sized>(
        &self,
        segments: &[S],
        body: &B,
    ) -> Result<T, CliError> {
        self.write(Method::PATCH, segments, body).await
    }

    /// Make a DELETE request to the API
    pub async fn delete<T: DeserializeOwned, S: AsRef<str>>(
        &self,
        segments: &[S],
    ) -> Result<T, CliError> {
        let url = self.url(segments);
        debug!("DELETE {}", url);

        self.send(self.build_request(Method::DELETE, url)).await
    }

    async fn write<T: DeserializeOwned, S: AsRef<str>, B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[S],
        body: &B,
    ) -> Result<T, CliError> {
        let url = self.url(segments);
        let body = serde_json::to_value(body)?;
        debug!("{} {} with body: {}", method, url, body);

        self.send(self.build_request(method, url).json(&body)).await
    }
}
