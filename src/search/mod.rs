//! Web search module
//!
//! This module defines the search seam used by the resolver and the HTTP
//! client that talks to the search API.

mod client;
mod types;

pub use client::SerperClient;
pub use types::{OrganicResult, SearchQuery, SearchResponse};

use async_trait::async_trait;

/// Outcome of a search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The service answered; results may still be empty
    Found(SearchResponse),

    /// The service could not be reached or answered with an error
    Unavailable,
}

/// A source of ranked search results for a query
///
/// Implementations log their own failures and report them as
/// [`SearchOutcome::Unavailable`]; they never return an error.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> SearchOutcome;
}
