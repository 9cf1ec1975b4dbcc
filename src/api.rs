//! HTTP client for the website API
//!
//! Two endpoints are consumed:
//! - `GET {endpoint}/websites` returns a JSON array of website records
//! - `GET {endpoint}/logs/{namespace}/{name}` returns the build log as text

use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::FetchError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the website API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }

    /// Resolved API prefix
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn websites_url(&self) -> String {
        format!("{}/websites", self.endpoint)
    }

    /// Both segments are percent-encoded so that `/` or reserved
    /// characters cannot change the request path. Dot segments are
    /// rejected: URL parsing collapses `.`, `..` and their `%2E` forms.
    pub fn log_url(&self, namespace: &str, name: &str) -> Result<String, FetchError> {
        Ok(format!(
            "{}/logs/{}/{}",
            self.endpoint,
            encode_segment(namespace)?,
            encode_segment(name)?
        ))
    }

    /// Fetch the website list as opaque JSON records, order preserved
    pub async fn list_websites(&self) -> Result<Vec<Value>, FetchError> {
        let url = self.websites_url();
        let body = self.get_text(&url).await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }

    /// Fetch the raw build log for a website
    pub async fn fetch_log(&self, namespace: &str, name: &str) -> Result<String, FetchError> {
        let url = self.log_url(namespace, name)?;
        self.get_text(&url).await
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

fn encode_segment(segment: &str) -> Result<Cow<'_, str>, FetchError> {
    if matches!(segment, "" | "." | "..") {
        return Err(FetchError::InvalidSegment {
            segment: segment.to_string(),
        });
    }
    Ok(urlencoding::encode(segment))
}
