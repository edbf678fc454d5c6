//! Server list and embed page parsers for FaselHD
//!
//! Link resolution is a two-hop walk: the detail or episode page lists
//! `div.server-item` rows, and each row's page embeds the actual stream.

use scraper::{Html, Selector};
use tracing::debug;

use super::{first_attr, first_text, selector};
use crate::error::Result;
use crate::types::{Quality, StreamLink};
use crate::url::absolutize;

/// Label used when a server row has no name
pub const UNKNOWN_SERVER: &str = "Unknown";

/// Marker that identifies an HLS manifest URL
const HLS_MARKER: &str = ".m3u8";

/// One hosting server listed on a detail or episode page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRow {
    pub label: String,
    /// Absolute URL of the server's page
    pub url: String,
}

/// Where a stream URL was found on a server page
///
/// Strategies are tried in the order of [`SourceStrategy::ORDERED`]; the
/// first one yielding a resolvable URL wins. An embedded frame therefore
/// takes precedence over a `<video>` source when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceStrategy {
    /// `<iframe src>` of an embedded player
    FrameSource,
    /// `<source src>` nested in a `<video>` element
    VideoSource,
    /// `src` set directly on the `<video>` element
    VideoElement,
}

impl SourceStrategy {
    pub const ORDERED: [SourceStrategy; 3] = [
        SourceStrategy::FrameSource,
        SourceStrategy::VideoSource,
        SourceStrategy::VideoElement,
    ];

    fn css(self) -> &'static str {
        match self {
            SourceStrategy::FrameSource => "iframe[src]",
            SourceStrategy::VideoSource => "video source[src]",
            SourceStrategy::VideoElement => "video[src]",
        }
    }
}

/// Parses the server rows of a detail or episode page
///
/// Rows without a resolvable link are skipped. A missing name falls back to
/// [`UNKNOWN_SERVER`].
///
/// # Errors
/// Returns `ParseError` only if a selector fails to compile
pub fn parse_server_rows(html: &str, base: &str) -> Result<Vec<ServerRow>> {
    let document = Html::parse_document(html);
    let row_selector = selector("div.server-item")?;
    let name_selector = selector("span.server-name")?;
    let link_selector = selector("a[href]")?;

    let mut rows = Vec::new();

    for row in document.select(&row_selector) {
        let label = first_text(&row, &name_selector).unwrap_or_else(|| UNKNOWN_SERVER.to_string());

        let Some(url) = first_attr(&row, &link_selector, "href").and_then(|href| absolutize(href, base))
        else {
            debug!(server = %label, "Skipping server row without link");
            continue;
        };

        rows.push(ServerRow { label, url });
    }

    Ok(rows)
}

/// Extracts the stream URL from a server page
///
/// A candidate only counts when it resolves to an http(s) URL against
/// `base`, so placeholder frames such as `about:blank` fall through to the
/// next strategy.
///
/// # Returns
/// The winning strategy and the raw (not yet absolutized) URL, or `None`
/// if no strategy matched
///
/// # Errors
/// Returns `ParseError` only if a selector fails to compile
pub fn extract_stream_source(html: &str, base: &str) -> Result<Option<(SourceStrategy, String)>> {
    let document = Html::parse_document(html);

    for strategy in SourceStrategy::ORDERED {
        let source_selector: Selector = selector(strategy.css())?;
        let usable = document
            .select(&source_selector)
            .filter_map(|el| el.value().attr("src"))
            .map(str::trim)
            .find(|src| absolutize(src, base).is_some());

        if let Some(src) = usable {
            return Ok(Some((strategy, src.to_string())));
        }
    }

    Ok(None)
}

/// Builds a stream link from a raw source URL
///
/// Returns `None` if the source does not resolve to an absolute URL.
pub fn build_stream_link(
    provider_label: &str,
    server_label: &str,
    raw_source: &str,
    referer_url: &str,
    base: &str,
) -> Option<StreamLink> {
    let url = absolutize(raw_source, base)?;

    Some(StreamLink {
        provider_label: provider_label.to_string(),
        server_label: server_label.to_string(),
        is_segmented_stream: is_segmented_stream(raw_source),
        url,
        referer_url: referer_url.to_string(),
        quality: Quality::Unknown,
    })
}

/// Checks whether a URL points to an HLS manifest
pub fn is_segmented_stream(url: &str) -> bool {
    url.contains(HLS_MARKER)
}
