//! Site-Finder: company website discovery
//!
//! This crate enriches stored company records with the company's website,
//! found through a web search API and, when the search surfaces a
//! professional-network profile, through the website declared on that profile.

pub mod config;
pub mod driver;
pub mod profile;
pub mod resolver;
pub mod search;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Finder operations
#[derive(Debug, Error)]
pub enum SiteFinderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid response body from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),

    #[error("No search API key: set search.api-key or the {0} environment variable")]
    MissingApiKey(&'static str),
}

/// Result type alias for Site-Finder operations
pub type Result<T> = std::result::Result<T, SiteFinderError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use driver::{BatchSummary, Driver};
pub use resolver::{Resolution, ResolvedUrl, Stage, UrlResolver};
pub use storage::{CompanyRecord, RecordStore, SqliteStorage};
pub use url::is_root_like_path;
