//! Provider facade for FaselHD
//!
//! Combines the HTTP client with the page parsers and exposes the
//! operations a streaming host calls: browse, search, load and links.

use tracing::{debug, info, warn};

use crate::client::{ClientConfig, FaselClient};
use crate::error::{FaselError, Result};
use crate::parser::servers::{build_stream_link, extract_stream_source, parse_server_rows};
use crate::parser::{parse_detail, parse_listing};
use crate::types::{
    CatalogEntry, Category, DetailRecord, HomePageSection, MediaKind, ProviderInfo, StreamLink,
    SubtitleTrack,
};
use crate::url::{MAIN_URL, absolutize, build_category_url, build_search_url};

/// Name reported to the host and stamped on every stream link
pub const PROVIDER_NAME: &str = "FaselHD";

/// Catalog language (ISO 639-1)
pub const PROVIDER_LANGUAGE: &str = "ar";

/// Content provider for FaselHD
///
/// Holds no state besides the HTTP client; every call is independent.
pub struct FaselProvider {
    client: FaselClient,
}

impl FaselProvider {
    /// Create a new provider with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = FaselClient::new()?;
        Ok(Self { client })
    }

    /// Create a new provider with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = FaselClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Static metadata describing this provider
    pub fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: PROVIDER_NAME.to_string(),
            main_url: MAIN_URL.to_string(),
            language: PROVIDER_LANGUAGE.to_string(),
            has_main_page: true,
            has_download_support: true,
            supported_kinds: vec![MediaKind::Movie, MediaKind::Series, MediaKind::Anime],
        }
    }

    fn base(&self) -> &str {
        self.client.base_url()
    }

    /// Browse one page of a category listing
    ///
    /// # Arguments
    /// * `category` - Site section to list
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// Entries in page order, empty if the page lists nothing
    ///
    /// # Errors
    /// - `HttpStatus` / `HttpError` if the listing page cannot be fetched
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> faselhd_core::Result<()> {
    /// use faselhd_core::{Category, FaselProvider};
    /// let provider = FaselProvider::new()?;
    /// for entry in provider.browse_page(Category::Movies, 1).await? {
    ///     println!("{}: {}", entry.title, entry.detail_url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn browse_page(&self, category: Category, page: u32) -> Result<Vec<CatalogEntry>> {
        let url = build_category_url(self.base(), category, page);
        let html = self.client.fetch(&url).await?;
        let entries = parse_listing(&html, self.base(), category.media_kind())?;

        info!(?category, page, count = entries.len(), "Browsed category page");
        Ok(entries)
    }

    /// Browse the same page of every category, in home page order
    ///
    /// # Errors
    /// Fails on the first category page that cannot be fetched
    pub async fn home_page(&self, page: u32) -> Result<Vec<HomePageSection>> {
        let mut sections = Vec::with_capacity(Category::ALL.len());

        for category in Category::ALL {
            let entries = self.browse_page(category, page).await?;
            sections.push(HomePageSection {
                name: category.display_name().to_string(),
                category,
                entries,
            });
        }

        Ok(sections)
    }

    /// Search the catalog by free text
    ///
    /// # Arguments
    /// * `query` - Search query string
    ///
    /// # Returns
    /// Matching entries, empty if nothing matched
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty or whitespace only
    /// - `HttpStatus` / `HttpError` if the search page cannot be fetched
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> faselhd_core::Result<()> {
    /// use faselhd_core::FaselProvider;
    /// let provider = FaselProvider::new()?;
    /// let results = provider.search("breaking bad").await?;
    /// println!("{} matches", results.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(FaselError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = build_search_url(self.base(), trimmed);
        let html = self.client.fetch(&url).await?;
        // Search cards carry no kind marker, so every match is reported as a movie
        let entries = parse_listing(&html, self.base(), MediaKind::Movie)?;

        info!(query = trimmed, count = entries.len(), "Search completed");
        Ok(entries)
    }

    /// Load a title's detail page
    ///
    /// # Arguments
    /// * `url` - Detail page URL (absolute or site-relative)
    ///
    /// # Returns
    /// `None` when the page has no title heading
    ///
    /// # Errors
    /// - `InvalidUrl` if `url` does not resolve
    /// - `HttpStatus` / `HttpError` if the page cannot be fetched
    pub async fn load_detail(&self, url: &str) -> Result<Option<DetailRecord>> {
        let url =
            absolutize(url, self.base()).ok_or_else(|| FaselError::InvalidUrl(url.to_string()))?;
        let html = self.client.fetch(&url).await?;
        let detail = parse_detail(&html, &url, self.base())?;

        match &detail {
            Some(record) => info!(
                %url,
                series = record.is_series(),
                episodes = record.episodes().len(),
                "Loaded detail page"
            ),
            None => info!(%url, "Detail page has no title"),
        }

        Ok(detail)
    }

    /// Resolve playable links, reporting each one as soon as it is found
    ///
    /// Fetches the page at `data_url`, then fetches every listed server page
    /// one after another in page order. Servers whose page fails to load or
    /// embeds no stream are skipped. `on_subtitle` is never called because
    /// the site exposes no subtitle tracks.
    ///
    /// # Returns
    /// `true` once every server has been tried, even if no link was found
    ///
    /// # Errors
    /// - `InvalidUrl` if `data_url` does not resolve
    /// - `HttpStatus` / `HttpError` if the page at `data_url` cannot be fetched
    pub async fn load_links<L, S>(
        &self,
        data_url: &str,
        mut on_link: L,
        _on_subtitle: S,
    ) -> Result<bool>
    where
        L: FnMut(StreamLink),
        S: FnMut(SubtitleTrack),
    {
        let data_url = absolutize(data_url, self.base())
            .ok_or_else(|| FaselError::InvalidUrl(data_url.to_string()))?;
        let html = self.client.fetch(&data_url).await?;
        let rows = parse_server_rows(&html, self.base())?;

        let mut emitted = 0usize;

        for row in &rows {
            let page = match self.client.fetch(&row.url).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(server = %row.label, url = %row.url, "Server page unavailable: {e}");
                    continue;
                }
            };

            let Some((strategy, source)) = extract_stream_source(&page, self.base())? else {
                debug!(server = %row.label, "Server page embeds no stream");
                continue;
            };

            match build_stream_link(PROVIDER_NAME, &row.label, &source, &data_url, self.base()) {
                Some(link) => {
                    debug!(server = %row.label, ?strategy, url = %link.url, "Resolved stream");
                    emitted += 1;
                    on_link(link);
                }
                None => debug!(server = %row.label, %source, "Stream source does not resolve"),
            }
        }

        info!(%data_url, servers = rows.len(), links = emitted, "Resolved links");
        Ok(true)
    }

    /// Resolve playable links and return them in discovery order
    ///
    /// Same walk as [`FaselProvider::load_links`], collected into a vector.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> faselhd_core::Result<()> {
    /// use faselhd_core::FaselProvider;
    /// let provider = FaselProvider::new()?;
    /// let links = provider
    ///     .resolve_links("https://www.faselhds.care/movies/dune-2021")
    ///     .await?;
    /// for link in links {
    ///     println!("[{}] {} (hls: {})", link.server_label, link.url, link.is_segmented_stream);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_links(&self, data_url: &str) -> Result<Vec<StreamLink>> {
        let mut links = Vec::new();
        self.load_links(data_url, |link| links.push(link), |_| {})
            .await?;
        Ok(links)
    }
}
