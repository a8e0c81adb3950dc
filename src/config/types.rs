use serde::Deserialize;

/// Default search endpoint (Serper's Google search API)
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://google.serper.dev/search";

/// Environment variable consulted when the config file carries no API key
pub const API_KEY_ENV: &str = "SERPER_API_KEY";

/// Desktop browser identification; profile pages reject non-browser clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_PROFILE_DOMAIN: &str = "linkedin.com";
pub const DEFAULT_CONTAINER_SELECTOR: &str = "div.core-section-container__content.break-words";
pub const DEFAULT_LINK_SELECTOR: &str = "a.link-no-visited-state";
pub const DEFAULT_PLACEHOLDER: &str = "Get directions";

pub const DEFAULT_MAX_WORKERS: usize = 50;

/// Main configuration structure for Site-Finder
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub driver: DriverConfig,
    pub store: StoreConfig,
}

/// Search API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint receiving `POST {"q": ...}`
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,

    /// Value sent as the `X-API-KEY` header
    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,
}

impl SearchConfig {
    /// Returns the configured API key, falling back to `SERPER_API_KEY`
    pub fn resolve_api_key(&self) -> Result<String, crate::ConfigError> {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.trim().to_string());
        }

        std::env::var(API_KEY_ENV)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(crate::ConfigError::MissingApiKey(API_KEY_ENV))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            api_key: None,
        }
    }
}

/// Professional-network profile scraping configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// User-Agent sent when fetching profile pages
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Search results whose link contains this text are treated as profiles
    #[serde(default = "default_profile_domain")]
    pub domain: String,

    /// Selector for the block holding the company details
    #[serde(rename = "container-selector", default = "default_container_selector")]
    pub container_selector: String,

    /// Selector for the website link inside the container
    #[serde(rename = "link-selector", default = "default_link_selector")]
    pub link_selector: String,

    /// Link text the page template emits for map links
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            domain: default_profile_domain(),
            container_selector: default_container_selector(),
            link_selector: default_link_selector(),
            placeholder: default_placeholder(),
        }
    }
}

/// HTTP client timeouts, shared by the search and profile clients
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Worker pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Number of records processed concurrently
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
        }
    }
}

/// Record store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_profile_domain() -> String {
    DEFAULT_PROFILE_DOMAIN.to_string()
}

fn default_container_selector() -> String {
    DEFAULT_CONTAINER_SELECTOR.to_string()
}

fn default_link_selector() -> String {
    DEFAULT_LINK_SELECTOR.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}
