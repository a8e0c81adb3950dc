use crate::config::types::{
    Config, DriverConfig, HttpConfig, ProfileConfig, SearchConfig, StoreConfig,
};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

const MAX_WORKERS_LIMIT: usize = 500;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_profile_config(&config.profile)?;
    validate_http_config(&config.http)?;
    validate_driver_config(&config.driver)?;
    validate_store_config(&config.store)?;
    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.endpoint).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid search endpoint '{}': {}", config.endpoint, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Search endpoint '{}' must use HTTP or HTTPS",
            config.endpoint
        )));
    }

    Ok(())
}

fn validate_profile_config(config: &ProfileConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "profile.user-agent cannot be empty".to_string(),
        ));
    }

    if config.domain.trim().is_empty() {
        return Err(ConfigError::Validation(
            "profile.domain cannot be empty".to_string(),
        ));
    }

    validate_selector("profile.container-selector", &config.container_selector)?;
    validate_selector("profile.link-selector", &config.link_selector)?;

    Ok(())
}

/// Checks that a selector string parses the way the scraper will parse it
fn validate_selector(field: &str, selector: &str) -> Result<(), ConfigError> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidSelector(format!("{} '{}': {:?}", field, selector, e)))
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "http.timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "http.connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_driver_config(config: &DriverConfig) -> Result<(), ConfigError> {
    if config.max_workers < 1 || config.max_workers > MAX_WORKERS_LIMIT {
        return Err(ConfigError::Validation(format!(
            "driver.max-workers must be between 1 and {}, got {}",
            MAX_WORKERS_LIMIT, config.max_workers
        )));
    }

    Ok(())
}

fn validate_store_config(config: &StoreConfig) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "store.database-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_selector() {
        assert!(validate_selector("f", "div.a.b").is_ok());
        assert!(validate_selector("f", "a.link-no-visited-state").is_ok());

        assert!(matches!(
            validate_selector("f", "div..a"),
            Err(ConfigError::InvalidSelector(_))
        ));
        assert!(validate_selector("f", "").is_err());
    }

    #[test]
    fn test_validate_search_endpoint() {
        let mut config = SearchConfig::default();
        assert!(validate_search_config(&config).is_ok());

        config.endpoint = "not a url".to_string();
        assert!(matches!(
            validate_search_config(&config),
            Err(ConfigError::InvalidUrl(_))
        ));

        config.endpoint = "ftp://search.example.com/".to_string();
        assert!(validate_search_config(&config).is_err());
    }

    #[test]
    fn test_validate_driver_bounds() {
        assert!(validate_driver_config(&DriverConfig { max_workers: 1 }).is_ok());
        assert!(validate_driver_config(&DriverConfig { max_workers: 500 }).is_ok());
        assert!(validate_driver_config(&DriverConfig { max_workers: 0 }).is_err());
        assert!(validate_driver_config(&DriverConfig { max_workers: 501 }).is_err());
    }

    #[test]
    fn test_validate_profile_config() {
        let mut config = ProfileConfig::default();
        assert!(validate_profile_config(&config).is_ok());

        config.domain = "  ".to_string();
        assert!(validate_profile_config(&config).is_err());
    }
}
