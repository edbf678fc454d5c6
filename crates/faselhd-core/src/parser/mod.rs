//! HTML parsers for FaselHD
//!
//! Contains modules for parsing different page types:
//! - `listing`: category and search result pages
//! - `detail`: title detail pages (movie or series)
//! - `servers`: server lists and embed pages used for link resolution

pub mod detail;
pub mod listing;
pub mod servers;

pub use detail::{parse_detail, parse_rating, parse_year};
pub use listing::parse_listing;
pub use servers::{
    ServerRow, SourceStrategy, build_stream_link, extract_stream_source, parse_server_rows,
};

use scraper::{ElementRef, Selector};

use crate::error::{FaselError, Result};

/// Compiles a CSS selector, mapping failures to `ParseError`
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| FaselError::ParseError(format!("Invalid selector {css:?}: {e:?}")))
}

/// Text content of an element with runs of whitespace collapsed
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized text of the first match, `None` when missing or blank
pub(crate) fn first_text(scope: &ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
}

/// Attribute value of the first match, `None` when missing or blank
pub(crate) fn first_attr<'a>(
    scope: &ElementRef<'a>,
    selector: &Selector,
    attr: &str,
) -> Option<&'a str> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
