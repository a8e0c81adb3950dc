//! Declared-website extraction from profile page HTML
//!
//! Profile pages list the company's website inside an "about" block as a
//! plain external link. The block and link are located by two site-defined
//! CSS classes, both configurable.

use crate::config::ProfileConfig;
use crate::ConfigError;
use scraper::{Html, Selector};

/// Parsed selectors and placeholder used to read a profile page
#[derive(Debug, Clone)]
pub struct ProfileSelectors {
    container: Selector,
    link: Selector,
    placeholder: String,
}

impl ProfileSelectors {
    /// Parses the selectors from configuration
    pub fn from_config(config: &ProfileConfig) -> Result<Self, ConfigError> {
        Self::new(
            &config.container_selector,
            &config.link_selector,
            &config.placeholder,
        )
    }

    pub fn new(container: &str, link: &str, placeholder: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            container: parse_selector(container)?,
            link: parse_selector(link)?,
            placeholder: placeholder.to_string(),
        })
    }
}

impl Default for ProfileSelectors {
    fn default() -> Self {
        let config = ProfileConfig::default();
        Self {
            container: Selector::parse(&config.container_selector)
                .expect("default container selector is valid"),
            link: Selector::parse(&config.link_selector).expect("default link selector is valid"),
            placeholder: config.placeholder,
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e)))
}

/// Extracts the website a profile page declares
///
/// Finds the first container block, then the first website link inside it,
/// and returns the link's trimmed text.
///
/// # Returns
///
/// * `Some(String)` - The declared website text
/// * `None` - No container, no link, empty text, or the map-link placeholder
///
/// # Example
///
/// ```
/// use site_finder::profile::{extract_declared_website, ProfileSelectors};
///
/// let html = r#"<div class="core-section-container__content break-words">
///     <a class="link-no-visited-state" href="https://acme.com">https://acme.com</a>
/// </div>"#;
/// let website = extract_declared_website(html, &ProfileSelectors::default());
/// assert_eq!(website.as_deref(), Some("https://acme.com"));
/// ```
pub fn extract_declared_website(html: &str, selectors: &ProfileSelectors) -> Option<String> {
    let document = Html::parse_document(html);

    let Some(container) = document.select(&selectors.container).next() else {
        tracing::debug!("Profile page has no details block");
        return None;
    };

    let Some(link) = container.select(&selectors.link).next() else {
        tracing::debug!("Profile details block has no website link");
        return None;
    };

    let text = link.text().collect::<String>().trim().to_string();

    if text.is_empty() {
        return None;
    }

    if !selectors.placeholder.is_empty() && text.contains(&selectors.placeholder) {
        tracing::debug!("Ignoring placeholder link text '{}'", text);
        return None;
    }

    Some(text)
}
