//! Professional-network profile scraping
//!
//! Search results often point at the company's profile page rather than its
//! own site. The profile usually declares the website, which this module
//! reads.

mod extract;
mod fetcher;

pub use self::extract::{extract_declared_website, ProfileSelectors};
pub use self::fetcher::{build_http_client, ProfilePageScraper};

use async_trait::async_trait;

/// Reads the website a profile page declares
///
/// Implementations swallow fetch and parse failures and return `None`.
#[async_trait]
pub trait ProfileScraper: Send + Sync {
    async fn declared_website(&self, profile_url: &str) -> Option<String>;
}
