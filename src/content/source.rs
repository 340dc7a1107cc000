use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::content::error::SourceError;
use crate::content::parse::parse_collection_response;
use crate::content::types::ContentRecord;

/// HTTP client for the remote content API.
///
/// One instance serves all collections; each fetch is a plain GET against
/// `{base_url}{path}` bounded by a connect timeout and a total request
/// timeout.
pub struct HttpContentSource {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpContentSource {
    pub fn new(api: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .build()
            .expect("Failed to build content client");

        Self {
            client,
            base_url: api.base_url.clone(),
            request_timeout: Duration::from_secs(u64::from(api.timeout_seconds)),
        }
    }

    /// Fetch the raw JSON body for a collection resource.
    pub async fn fetch_collection(&self, path: &str) -> Result<Value, SourceError> {
        let result = timeout(self.request_timeout, self.do_fetch(path)).await;
        match result {
            Ok(body) => body,
            Err(_) => Err(SourceError::Timeout {
                path: path.to_string(),
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_fetch(&self, path: &str) -> Result<Value, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Connection {
                path: path.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| SourceError::Decode {
            path: path.to_string(),
            source: e,
        })
    }

    /// Fetch and decode a collection of records.
    pub async fn fetch_records<R>(&self, path: &str) -> Result<Vec<R>, SourceError>
    where
        R: ContentRecord + DeserializeOwned,
    {
        let raw = self.fetch_collection(path).await?;
        parse_collection_response(raw)
    }
}
