//! FaselHD Content Provider Core Library
//!
//! Provides an async API for browsing, searching and resolving playable
//! streams from the FaselHD catalog.
//!
//! # Overview
//!
//! This crate is a scraping content provider for a streaming host with:
//! - An HTTP client that resolves site-relative links
//! - HTML parsers for listing, detail and server pages
//! - A provider facade exposing browse, search, load and link resolution
//!
//! # Example
//!
//! ```no_run
//! use faselhd_core::{Category, DetailKind, FaselProvider, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let provider = FaselProvider::new()?;
//!
//!     // Browse the first page of movies
//!     let movies = provider.browse_page(Category::Movies, 1).await?;
//!
//!     if let Some(entry) = movies.first() {
//!         // Load the detail page; None means the title does not exist
//!         if let Some(detail) = provider.load_detail(&entry.detail_url).await? {
//!             let data_url = match &detail.kind {
//!                 DetailKind::Movie { data_url } => Some(data_url.clone()),
//!                 DetailKind::Series { episodes } => episodes.first().map(|e| e.data_url.clone()),
//!             };
//!
//!             if let Some(data_url) = data_url {
//!                 for link in provider.resolve_links(&data_url).await? {
//!                     println!("{}: {}", link.server_label, link.url);
//!                 }
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Link resolution
//!
//! [`FaselProvider::resolve_links`] fetches the page of a movie or episode,
//! then fetches each listed server page in order. A server page yields at
//! most one link: an embedded `<iframe>` wins over a `<video>` source. Links
//! carry the originating page as referer and should not be cached.

mod client;
mod error;
pub mod parser;
mod provider;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, FaselClient};

// Re-export error types
pub use error::{FaselError, Result};

// Re-export parser functions
pub use parser::{parse_detail, parse_listing, parse_rating};

// Re-export main provider API
pub use provider::{FaselProvider, PROVIDER_LANGUAGE, PROVIDER_NAME};

// Re-export data types
pub use types::{
    CatalogEntry, Category, DetailKind, DetailRecord, EpisodeEntry, HomePageSection, MediaKind,
    ProviderInfo, Quality, StreamLink, SubtitleTrack,
};

// Re-export URL helper functions for convenience
pub use crate::url::{MAIN_URL, absolutize, build_category_url, build_search_url};
