//! Serper search client
//!
//! Sends company names to a Serper-compatible search endpoint and decodes
//! the organic results.

use crate::config::{HttpConfig, SearchConfig};
use crate::search::types::{SearchQuery, SearchResponse};
use crate::search::{SearchOutcome, SearchProvider};
use crate::{ConfigError, SiteFinderError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the search API
#[derive(Debug, Clone)]
pub struct SerperClient {
    client: Client,
    endpoint: String,
}

impl SerperClient {
    /// Builds a client from configuration
    ///
    /// The API key is read from `search.api-key`, or from `SERPER_API_KEY`
    /// when the config file leaves it out.
    pub fn from_config(search: &SearchConfig, http: &HttpConfig) -> Result<Self, SiteFinderError> {
        let api_key = search.resolve_api_key()?;
        Self::new(&search.endpoint, &api_key, http)
    }

    /// Builds a client for an explicit endpoint and key
    pub fn new(endpoint: &str, api_key: &str, http: &HttpConfig) -> Result<Self, SiteFinderError> {
        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            ConfigError::Validation("search API key contains invalid header characters".into())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(http.timeout_secs))
            .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Runs a search and returns the decoded response or the failure
    pub async fn try_search(&self, query: &str) -> Result<SearchResponse, SiteFinderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SearchQuery { q: query })
            .send()
            .await
            .map_err(|source| SiteFinderError::Http {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteFinderError::HttpStatus {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SiteFinderError::InvalidResponse {
                url: self.endpoint.clone(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(&self, query: &str) -> SearchOutcome {
        match self.try_search(query).await {
            Ok(response) => {
                tracing::debug!(
                    "Search for '{}' returned {} results",
                    query,
                    response.organic.len()
                );
                SearchOutcome::Found(response)
            }
            Err(e) => {
                tracing::warn!("Error while querying search API for '{}': {}", query, e);
                SearchOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        let client = SerperClient::new(
            "https://search.example.com/search",
            "key",
            &HttpConfig::default(),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let client = SerperClient::new(
            "https://search.example.com/search",
            "bad\nkey",
            &HttpConfig::default(),
        );
        assert!(matches!(client, Err(SiteFinderError::Config(_))));
    }

    #[test]
    fn test_from_config_uses_file_key() {
        let search = SearchConfig {
            endpoint: "https://search.example.com/search".to_string(),
            api_key: Some("file-key".to_string()),
        };
        assert!(SerperClient::from_config(&search, &HttpConfig::default()).is_ok());
    }
}
