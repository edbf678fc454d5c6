//! URL helper functions for FaselHD
//!
//! Provides URL normalization and builders for category and search pages.

use url::Url;

use crate::types::Category;

/// Site root used when no other base is configured
pub const MAIN_URL: &str = "https://www.faselhds.care";

/// Resolves a possibly-relative href against the site base
///
/// Handles absolute URLs, scheme-relative (`//host/path`), root-relative
/// (`/path`) and bare (`path`) references.
///
/// # Arguments
/// * `maybe_relative` - Raw attribute value from the page
/// * `base` - Absolute site base URL
///
/// # Returns
/// `Some(url)` with scheme and host, or `None` for empty input or
/// references that do not resolve to an http(s) address
///
/// # Example
/// ```
/// use faselhd_core::url::absolutize;
/// let url = absolutize("/movies/inception", "https://www.faselhds.care");
/// assert_eq!(url.as_deref(), Some("https://www.faselhds.care/movies/inception"));
/// ```
pub fn absolutize(maybe_relative: &str, base: &str) -> Option<String> {
    let trimmed = maybe_relative.trim();
    if trimmed.is_empty() {
        return None;
    }

    let base = Url::parse(base).ok()?;
    let resolved = base.join(trimmed).ok()?;

    if !matches!(resolved.scheme(), "http" | "https") || resolved.host_str().is_none() {
        return None;
    }

    Some(resolved.into())
}

/// Builds the paginated listing URL for a category
///
/// # Example
/// ```
/// use faselhd_core::Category;
/// use faselhd_core::url::build_category_url;
/// let url = build_category_url("https://www.faselhds.care", Category::Series, 2);
/// assert_eq!(url, "https://www.faselhds.care/series?page=2");
/// ```
pub fn build_category_url(base: &str, category: Category, page: u32) -> String {
    format!(
        "{}{}?page={}",
        base.trim_end_matches('/'),
        category.path(),
        page
    )
}

/// Builds the search URL for a given query
///
/// URL encodes the query and constructs the search URL.
///
/// # Example
/// ```
/// use faselhd_core::url::build_search_url;
/// let url = build_search_url("https://www.faselhds.care", "the office");
/// assert_eq!(url, "https://www.faselhds.care/search?q=the%20office");
/// ```
pub fn build_search_url(base: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("{}/search?q={}", base.trim_end_matches('/'), encoded)
}
