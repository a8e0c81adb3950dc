use regex::Regex;
use std::sync::LazyLock;

/// Paths accepted verbatim besides the empty path
const ROOT_PATHS: &[&str] = &["/", "/en", "/en/", "/en.php", "/en.html"];

static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid scheme regex"));

/// `scheme://host[path][?query][#fragment]`, capturing host and path
static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?i:https?)://([^/?#\s]+)([^?#]*)(?:[?#].*)?$").expect("valid url regex")
});

/// Slash, two lowercase letters, optional trailing slash
static LOCALE_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[a-z]{2}/?$").expect("valid locale regex"));

/// Decides whether a URL points at a site's home page
///
/// A URL is root-like when its path is empty, `/`, one of the English
/// landing variants (`/en`, `/en/`, `/en.php`, `/en.html`), or a two-letter
/// locale root such as `/fr` or `/de/`. Query strings and fragments are
/// ignored. URLs without a scheme are read as `http://`.
///
/// Never fails: anything that does not look like `scheme://host[/path]`
/// is classified as not root-like.
///
/// # Examples
///
/// ```
/// use site_finder::url::is_root_like_path;
///
/// assert!(is_root_like_path("https://example.com"));
/// assert!(is_root_like_path("example.com/de/"));
/// assert!(!is_root_like_path("https://example.com/pricing"));
/// assert!(!is_root_like_path(""));
/// ```
pub fn is_root_like_path(url: &str) -> bool {
    let url = url.trim();

    let with_scheme;
    let url = if SCHEME_PREFIX.is_match(url) {
        url
    } else {
        with_scheme = format!("http://{}", url);
        &with_scheme
    };

    let Some(captures) = URL_SHAPE.captures(url) else {
        return false;
    };
    let path = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    path.is_empty() || ROOT_PATHS.contains(&path) || LOCALE_ROOT.is_match(path)
}
