//! Profile page fetcher
//!
//! Fetches profile pages with a browser-like user agent and hands the HTML to
//! [`extract_declared_website`]. Every failure degrades to "no website".

use crate::config::{HttpConfig, ProfileConfig};
use crate::profile::extract::{extract_declared_website, ProfileSelectors};
use crate::profile::ProfileScraper;
use crate::SiteFinderError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP scraper for professional-network profile pages
#[derive(Debug, Clone)]
pub struct ProfilePageScraper {
    client: Client,
    selectors: ProfileSelectors,
}

/// Builds the HTTP client used for profile pages
pub fn build_http_client(user_agent: &str, http: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

impl ProfilePageScraper {
    /// Builds a scraper from configuration
    pub fn from_config(profile: &ProfileConfig, http: &HttpConfig) -> Result<Self, SiteFinderError> {
        let selectors = ProfileSelectors::from_config(profile)?;
        let client = build_http_client(&profile.user_agent, http)?;
        Ok(Self::new(client, selectors))
    }

    pub fn new(client: Client, selectors: ProfileSelectors) -> Self {
        Self { client, selectors }
    }

    /// Fetches a profile page body
    ///
    /// Non-2xx responses are errors: the error pages served to blocked
    /// clients would otherwise be parsed as empty profiles.
    pub async fn fetch_page(&self, url: &str) -> Result<String, SiteFinderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SiteFinderError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteFinderError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| SiteFinderError::Http {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ProfileScraper for ProfilePageScraper {
    async fn declared_website(&self, profile_url: &str) -> Option<String> {
        let body = match self.fetch_page(profile_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Error while scraping profile {}: {}", profile_url, e);
                return None;
            }
        };

        let website = extract_declared_website(&body, &self.selectors);
        match &website {
            Some(site) => tracing::debug!("Profile {} declares website {}", profile_url, site),
            None => tracing::debug!("Profile {} declares no website", profile_url),
        }
        website
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_default_config() {
        let scraper =
            ProfilePageScraper::from_config(&ProfileConfig::default(), &HttpConfig::default());
        assert!(scraper.is_ok());
    }

    #[test]
    fn test_invalid_selector_fails_construction() {
        let profile = ProfileConfig {
            link_selector: "a..b".to_string(),
            ..ProfileConfig::default()
        };
        let scraper = ProfilePageScraper::from_config(&profile, &HttpConfig::default());
        assert!(matches!(scraper, Err(SiteFinderError::Config(_))));
    }
}
