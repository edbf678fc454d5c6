//! Title detail parser for FaselHD
//!
//! Parses a detail page into a [`DetailRecord`]. The page is classified as a
//! series when it lists at least one `div.episode-item`, otherwise as a movie.

use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::{first_attr, first_text, selector};
use crate::error::Result;
use crate::types::{DetailKind, DetailRecord, EpisodeEntry};
use crate::url::absolutize;

/// Scale applied to the site's 0-10 rating before truncation
const RATING_SCALE: f64 = 1000.0;

/// Parses a detail page
///
/// # Arguments
/// * `html` - Raw HTML of the detail page
/// * `source_url` - Absolute URL the page was fetched from
/// * `base` - Site base used to absolutize links
///
/// # Returns
/// `Ok(None)` when the page has no title heading (the title does not exist)
///
/// # Errors
/// Returns `ParseError` only if a selector fails to compile
pub fn parse_detail(html: &str, source_url: &str, base: &str) -> Result<Option<DetailRecord>> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let Some(title) = first_text(&root, &selector("h1")?) else {
        debug!(url = source_url, "Detail page has no title heading");
        return Ok(None);
    };

    let poster_url =
        first_attr(&root, &selector("img.poster")?, "src").and_then(|src| absolutize(src, base));
    let plot = first_text(&root, &selector("div.description")?);
    let year = first_text(&root, &selector("span.year")?).and_then(|text| parse_year(&text));
    let rating = first_text(&root, &selector("span.rating")?).and_then(|text| parse_rating(&text));

    let episode_selector = selector("div.episode-item")?;
    let items: Vec<ElementRef> = root.select(&episode_selector).collect();

    let kind = if items.is_empty() {
        DetailKind::Movie {
            data_url: source_url.to_string(),
        }
    } else {
        DetailKind::Series {
            episodes: parse_episodes(&items, base)?,
        }
    };

    Ok(Some(DetailRecord {
        url: source_url.to_string(),
        title,
        poster_url,
        plot,
        year,
        rating,
        kind,
    }))
}

/// Builds the episode list, dropping items without a usable link
fn parse_episodes(items: &[ElementRef], base: &str) -> Result<Vec<EpisodeEntry>> {
    let title_selector = selector("span.episode-title")?;
    let number_selector = selector("span.episode-number")?;
    let link_selector = selector("a[href]")?;

    let mut episodes = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let Some(data_url) =
            first_attr(item, &link_selector, "href").and_then(|href| absolutize(href, base))
        else {
            debug!(position = index + 1, "Dropping episode item without link");
            continue;
        };

        let episode_number = first_text(item, &number_selector).and_then(|t| parse_episode_number(&t));
        let name = first_text(item, &title_selector).unwrap_or_else(|| {
            let n = episode_number.map_or(index + 1, |n| n as usize);
            format!("Episode {n}")
        });

        episodes.push(EpisodeEntry {
            name,
            episode_number,
            data_url,
        });
    }

    Ok(episodes)
}

/// Normalizes the site's decimal rating to the host's integer scale
///
/// `"8.5"` becomes `8500`. Unparsable or non-finite input yields `None`.
///
/// # Example
/// ```
/// use faselhd_core::parser::parse_rating;
/// assert_eq!(parse_rating("8.5"), Some(8500));
/// assert_eq!(parse_rating("N/A"), None);
/// ```
pub fn parse_rating(text: &str) -> Option<i32> {
    let value = text.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some((value * RATING_SCALE) as i32)
}

/// Parses a release year
///
/// Accepts a bare integer, otherwise takes the first four-digit year in the text.
pub fn parse_year(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }

    let re = Regex::new(r"\b(1[89]\d{2}|2\d{3})\b").ok()?;
    re.captures(trimmed)?.get(1)?.as_str().parse().ok()
}

/// Parses an episode number
///
/// A bare integer must be non-negative. Labels such as "S02E05" or
/// "الحلقة 7" yield their last run of digits.
fn parse_episode_number(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if let Ok(number) = trimmed.parse::<i64>() {
        return u32::try_from(number).ok();
    }

    let re = Regex::new(r"\d+").ok()?;
    re.find_iter(trimmed).last()?.as_str().parse().ok()
}
