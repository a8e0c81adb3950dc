use serde::{Deserialize, Serialize};

/// Request body sent to the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchQuery<'a> {
    pub q: &'a str,
}

/// Decoded search response
///
/// Only the organic results are used; a response without an `organic` key is
/// treated as having no results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

/// One organic search result, in the order the service ranked it
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub position: Option<u32>,
}

impl SearchResponse {
    /// Builds a response from links, ranked in the given order
    pub fn from_links<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let organic = links
            .into_iter()
            .enumerate()
            .map(|(i, link)| OrganicResult {
                link: link.into(),
                title: None,
                position: Some(i as u32 + 1),
            })
            .collect();
        Self { organic }
    }

    /// Iterates the result links in rank order
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.organic.iter().map(|r| r.link.as_str())
    }
}
