//! Website resolution
//!
//! Decides, for one company name, which link is the company's own website.
//! The decision runs through a ranked list of [`Stage`]s over the same search
//! results; the first stage that accepts a URL wins.
//!
//! 1. [`Stage::ProfileWebsite`]: every profile link in the results, in rank
//!    order, is scraped for a declared website; the first declared website
//!    with a root-like path is accepted.
//! 2. [`Stage::RootLikeResult`]: the first result (of all results, profile
//!    links included) with a root-like path is accepted.
//!
//! The resolver never touches the record store.

mod resolution;

pub use resolution::{Resolution, ResolvedUrl, Stage, DEFAULT_STAGES};

use crate::config::Config;
use crate::profile::{ProfilePageScraper, ProfileScraper};
use crate::search::{SearchOutcome, SearchProvider, SearchResponse, SerperClient};
use crate::url::{is_profile_link, is_root_like_path};
use crate::SiteFinderError;
use std::sync::Arc;

/// Resolves company names to website URLs
pub struct UrlResolver {
    search: Arc<dyn SearchProvider>,
    profiles: Arc<dyn ProfileScraper>,
    profile_domain: String,
    stages: Vec<Stage>,
}

impl UrlResolver {
    /// Creates a resolver running the default stages
    ///
    /// # Arguments
    ///
    /// * `search` - Source of search results
    /// * `profiles` - Scraper for profile pages found in the results
    /// * `profile_domain` - Text identifying profile links (e.g. `linkedin.com`)
    pub fn new(
        search: Arc<dyn SearchProvider>,
        profiles: Arc<dyn ProfileScraper>,
        profile_domain: impl Into<String>,
    ) -> Self {
        Self::with_stages(search, profiles, profile_domain, DEFAULT_STAGES.to_vec())
    }

    /// Creates a resolver backed by the HTTP search client and profile scraper
    pub fn from_config(config: &Config) -> Result<Self, SiteFinderError> {
        let search = SerperClient::from_config(&config.search, &config.http)?;
        let profiles = ProfilePageScraper::from_config(&config.profile, &config.http)?;
        Ok(Self::new(
            Arc::new(search),
            Arc::new(profiles),
            config.profile.domain.clone(),
        ))
    }

    /// Creates a resolver running the given stages in order
    pub fn with_stages(
        search: Arc<dyn SearchProvider>,
        profiles: Arc<dyn ProfileScraper>,
        profile_domain: impl Into<String>,
        stages: Vec<Stage>,
    ) -> Self {
        Self {
            search,
            profiles,
            profile_domain: profile_domain.into(),
            stages,
        }
    }

    /// Resolves a company name
    ///
    /// Returns [`Resolution::Resolved`] or [`Resolution::NotFound`]; an
    /// unavailable search is treated as an empty result list.
    pub async fn resolve(&self, company_name: &str) -> Resolution {
        let results = match self.search.search(company_name).await {
            SearchOutcome::Found(response) => response,
            SearchOutcome::Unavailable => {
                tracing::debug!("Search unavailable for '{}'", company_name);
                SearchResponse::default()
            }
        };

        for &stage in &self.stages {
            if let Some(url) = self.run_stage(stage, &results).await {
                tracing::debug!("Stage '{}' resolved '{}' to {}", stage, company_name, url);
                return Resolution::Resolved(ResolvedUrl { url, stage });
            }
        }

        Resolution::NotFound
    }

    async fn run_stage(&self, stage: Stage, results: &SearchResponse) -> Option<String> {
        match stage {
            Stage::ProfileWebsite => self.declared_profile_website(results).await,
            Stage::RootLikeResult => first_root_like_link(results),
        }
    }

    async fn declared_profile_website(&self, results: &SearchResponse) -> Option<String> {
        let profile_links = results
            .links()
            .filter(|link| is_profile_link(link, &self.profile_domain));

        for link in profile_links {
            match self.profiles.declared_website(link).await {
                Some(website) if is_root_like_path(&website) => return Some(website),
                Some(website) => {
                    tracing::debug!("Profile {} declares non-root website {}", link, website)
                }
                None => {}
            }
        }

        None
    }
}

fn first_root_like_link(results: &SearchResponse) -> Option<String> {
    results
        .links()
        .find(|link| is_root_like_path(link))
        .map(str::to_string)
}
