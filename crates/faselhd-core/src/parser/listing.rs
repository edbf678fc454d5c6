//! Catalog listing parser for FaselHD
//!
//! Parses category pages and search result pages. Both use the same
//! `div.movie-item` card markup.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{first_attr, first_text, selector};
use crate::error::Result;
use crate::types::{CatalogEntry, MediaKind};
use crate::url::absolutize;

/// Parses a listing page and returns its entries in document order
///
/// Cards without a title or without a resolvable link are dropped.
/// A missing poster is not fatal.
///
/// # Arguments
/// * `html` - Raw HTML of a category or search page
/// * `base` - Site base used to absolutize links
/// * `media_kind` - Kind assigned to every entry
///
/// # Errors
/// Returns `ParseError` only if a selector fails to compile
pub fn parse_listing(html: &str, base: &str, media_kind: MediaKind) -> Result<Vec<CatalogEntry>> {
    let document = Html::parse_document(html);
    let card_selector = selector("div.movie-item")?;
    let link_selector = selector("h3 a")?;
    let image_selector = selector("img")?;

    let entries = document
        .select(&card_selector)
        .filter_map(|card| {
            let entry = parse_card(&card, &link_selector, &image_selector, base, media_kind);
            if entry.is_none() {
                debug!("Dropping catalog card without title or link");
            }
            entry
        })
        .collect();

    Ok(entries)
}

/// Parses a single `div.movie-item` card
fn parse_card(
    card: &ElementRef,
    link_selector: &Selector,
    image_selector: &Selector,
    base: &str,
    media_kind: MediaKind,
) -> Option<CatalogEntry> {
    let title = first_text(card, link_selector)?;
    let href = first_attr(card, link_selector, "href")?;
    let detail_url = absolutize(href, base)?;

    let poster_url = first_attr(card, image_selector, "src").and_then(|src| absolutize(src, base));

    Some(CatalogEntry {
        title,
        detail_url,
        poster_url,
        media_kind,
    })
}
