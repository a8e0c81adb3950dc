//! URL heuristics for Site-Finder
//!
//! This module decides which links look like a company's home page and which
//! links point at a professional-network profile.

mod path;

pub use path::is_root_like_path;

/// Returns true if a search result link points at the profile site
///
/// The check is a plain substring match, so `https://www.linkedin.com/company/x`
/// and `https://uk.linkedin.com/company/x` both match `linkedin.com`.
pub fn is_profile_link(link: &str, profile_domain: &str) -> bool {
    !profile_domain.is_empty() && link.contains(profile_domain)
}
