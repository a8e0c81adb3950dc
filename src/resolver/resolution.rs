use std::fmt;

/// A ranked heuristic for picking a company's website
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Website declared on a profile page found in the results
    ProfileWebsite,
    /// First search result whose path is root-like
    RootLikeResult,
}

/// Stages in the order they are tried
pub const DEFAULT_STAGES: [Stage; 2] = [Stage::ProfileWebsite, Stage::RootLikeResult];

impl Stage {
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::ProfileWebsite => "profile",
            Self::RootLikeResult => "search",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_string())
    }
}

/// A URL accepted by one of the stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub url: String,
    pub stage: Stage,
}

/// Outcome of resolving one company name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedUrl),
    NotFound,
    /// The resolution pipeline broke down for this record
    Failed(String),
}

impl Resolution {
    /// The URL to persist, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Resolved(resolved) => Some(&resolved.url),
            Self::NotFound | Self::Failed(_) => None,
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Resolved(resolved) => Some(resolved.stage),
            Self::NotFound | Self::Failed(_) => None,
        }
    }
}
