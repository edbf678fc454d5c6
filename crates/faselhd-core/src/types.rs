//! Core data types for the FaselHD provider
//!
//! Contains the records handed back to the host application. All types
//! implement Serialize and Deserialize so they can cross the Tauri boundary.

use serde::{Deserialize, Serialize};

/// Kind of media a catalog entry or detail page describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
    Anime,
}

/// Browsable site section
///
/// Each category is bound to a fixed path under the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movies,
    Series,
    Anime,
}

impl Category {
    /// All categories in home page order
    pub const ALL: [Category; 3] = [Category::Movies, Category::Series, Category::Anime];

    /// Path of the category listing relative to the site root
    pub fn path(self) -> &'static str {
        match self {
            Category::Movies => "/movies",
            Category::Series => "/series",
            Category::Anime => "/anime",
        }
    }

    /// Section title as shown by the site
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Movies => "أفلام",
            Category::Series => "مسلسلات",
            Category::Anime => "أنمي",
        }
    }

    /// Media kind assigned to entries listed under this category
    pub fn media_kind(self) -> MediaKind {
        match self {
            Category::Movies => MediaKind::Movie,
            Category::Series => MediaKind::Series,
            Category::Anime => MediaKind::Anime,
        }
    }
}

/// A title listed on a catalog or search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Title text (never empty)
    pub title: String,

    /// Absolute URL of the title's detail page
    pub detail_url: String,

    /// Absolute poster image URL
    pub poster_url: Option<String>,

    pub media_kind: MediaKind,
}

/// One named section of the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePageSection {
    /// Section title (e.g., "أفلام")
    pub name: String,

    pub category: Category,

    /// Entries in page order
    pub entries: Vec<CatalogEntry>,
}

/// An episode listed on a series detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeEntry {
    pub name: String,

    pub episode_number: Option<u32>,

    /// Absolute URL passed to link resolution
    pub data_url: String,
}

/// Movie or series payload of a detail page
///
/// Decided once during extraction from the presence of episode items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DetailKind {
    /// Single playable item; `data_url` is the detail page itself
    Movie { data_url: String },

    /// Episode list in page order
    Series { episodes: Vec<EpisodeEntry> },
}

/// Full description of one title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Detail page URL the record was extracted from
    pub url: String,

    pub title: String,

    pub poster_url: Option<String>,

    pub plot: Option<String>,

    pub year: Option<i32>,

    /// Site rating (0-10 float) scaled by 1000, e.g. 8.5 becomes 8500
    pub rating: Option<i32>,

    pub kind: DetailKind,
}

impl DetailRecord {
    pub fn is_series(&self) -> bool {
        matches!(self.kind, DetailKind::Series { .. })
    }

    /// Episodes of a series, empty for movies
    pub fn episodes(&self) -> &[EpisodeEntry] {
        match &self.kind {
            DetailKind::Series { episodes } => episodes,
            DetailKind::Movie { .. } => &[],
        }
    }
}

/// Quality hint attached to a stream link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[default]
    Unknown,
}

impl Quality {
    /// Numeric value expected by the host's quality ladder
    pub fn value(self) -> i32 {
        match self {
            Quality::Unknown => 400,
        }
    }
}

/// A playable stream found on one server page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamLink {
    /// Name of this provider ("FaselHD")
    pub provider_label: String,

    /// Server name from the server list (defaults to "Unknown")
    pub server_label: String,

    /// Absolute stream or embed URL
    pub url: String,

    /// Page the link was resolved from, sent as Referer on playback
    pub referer_url: String,

    pub quality: Quality,

    /// True when the URL points to an HLS manifest
    pub is_segmented_stream: bool,
}

/// Subtitle track reported alongside stream links
///
/// The site exposes no subtitle list, so none are ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleTrack {
    pub language: String,
    pub url: String,
}

/// Static provider metadata advertised to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub main_url: String,
    /// ISO 639-1 language code of the catalog
    pub language: String,
    pub has_main_page: bool,
    pub has_download_support: bool,
    pub supported_kinds: Vec<MediaKind>,
}
