//! Remote catalog and playback-link lookups
//!
//! One catalog request per run, then one link request per stream. Remote
//! failures never propagate as errors: a failed catalog fetch yields an
//! empty catalog and a failed link fetch yields `None` for that stream.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::catalog::CatalogResponse;
use crate::error::Result;

/// Resolves a stream id to its playback URL, when one exists.
///
/// Every failure mode (network error, non-2xx status, malformed body,
/// missing link field) collapses to `None`. Each call is independent and
/// best-effort: no retry, no caching.
#[async_trait]
pub trait LinkResolver {
    async fn resolve(&self, stream_id: u64) -> Option<String>;
}

/// HTTP client for the catalog service.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch the full stream catalog.
    ///
    /// Any transport or decode failure yields an empty catalog; the run
    /// then ends with "nothing to publish" rather than an error.
    pub async fn fetch_catalog(&self) -> CatalogResponse {
        let url = format!("{}/api/streams", self.base_url);
        tracing::info!("Fetching stream catalog from {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Catalog fetch failed: {}", e);
                return CatalogResponse::default();
            }
        };
        if !response.status().is_success() {
            tracing::warn!("Catalog fetch returned {}", response.status());
            return CatalogResponse::default();
        }
        match response.json::<CatalogResponse>().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Malformed catalog response: {}", e);
                CatalogResponse::default()
            }
        }
    }
}

/// Response body of the per-stream link endpoint.
#[derive(Debug, Default, Deserialize)]
struct LinkResponse {
    #[serde(default)]
    data: LinkData,
}

#[derive(Debug, Default, Deserialize)]
struct LinkData {
    #[serde(default)]
    m3u8: Option<String>,
}

#[async_trait]
impl LinkResolver for ApiClient {
    async fn resolve(&self, stream_id: u64) -> Option<String> {
        let url = format!("{}/api/streams/{}", self.base_url, stream_id);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Link fetch failed for stream {}: {}", stream_id, e);
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!(
                "Link fetch for stream {} returned {}",
                stream_id,
                response.status()
            );
            return None;
        }

        let body = match response.json::<LinkResponse>().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!("Malformed link response for stream {}: {}", stream_id, e);
                return None;
            }
        };
        body.data.m3u8.filter(|link| !link.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_response_with_url() {
        let body: LinkResponse =
            serde_json::from_str(r#"{"data": {"m3u8": "http://x/playlist.m3u8"}}"#).unwrap();
        assert_eq!(body.data.m3u8.as_deref(), Some("http://x/playlist.m3u8"));
    }

    #[test]
    fn test_link_response_missing_field() {
        let body: LinkResponse = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert_eq!(body.data.m3u8, None);

        let body: LinkResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.data.m3u8, None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("https://example.test/", Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url, "https://example.test");
    }
}
