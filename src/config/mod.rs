//! Configuration module for Site-Finder
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use site_finder::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("site-finder.toml")).unwrap();
//! println!("Workers: {}", config.driver.max_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DriverConfig, HttpConfig, ProfileConfig, SearchConfig, StoreConfig, API_KEY_ENV,
    DEFAULT_MAX_WORKERS, DEFAULT_PLACEHOLDER, DEFAULT_PROFILE_DOMAIN, DEFAULT_SEARCH_ENDPOINT,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
