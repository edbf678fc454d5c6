//! Tauri commands for the FaselHD provider
//!
//! This module contains all Tauri command implementations.

use faselhd_core::{
    CatalogEntry, Category, DetailRecord, HomePageSection, ProviderInfo, StreamLink,
};
use tauri::State;

use crate::ProviderState;

/// Browse one page of a category listing
///
/// # Arguments
/// * `state` - Managed ProviderState from Tauri
/// * `category` - "movies", "series" or "anime"
/// * `page` - 1-based page number
///
/// # Errors
/// Returns error message as String if the page cannot be fetched
#[tauri::command]
pub async fn browse_page(
    state: State<'_, ProviderState>,
    category: Category,
    page: u32,
) -> Result<Vec<CatalogEntry>, String> {
    state
        .provider
        .browse_page(category, page)
        .await
        .map_err(|e| e.to_string())
}

/// Browse the same page of every category
#[tauri::command]
pub async fn home_page(
    state: State<'_, ProviderState>,
    page: u32,
) -> Result<Vec<HomePageSection>, String> {
    state
        .provider
        .home_page(page)
        .await
        .map_err(|e| e.to_string())
}

/// Search the catalog
///
/// # Errors
/// Returns error message as String if the query is empty or the search fails
#[tauri::command]
pub async fn search(
    state: State<'_, ProviderState>,
    query: String,
) -> Result<Vec<CatalogEntry>, String> {
    state
        .provider
        .search(&query)
        .await
        .map_err(|e| e.to_string())
}

/// Load a title's detail page
///
/// # Returns
/// The detail record, or null if the title does not exist
#[tauri::command]
pub async fn load_detail(
    state: State<'_, ProviderState>,
    url: String,
) -> Result<Option<DetailRecord>, String> {
    state
        .provider
        .load_detail(&url)
        .await
        .map_err(|e| e.to_string())
}

/// Resolve playable links for a movie or episode
///
/// # Arguments
/// * `state` - Managed ProviderState from Tauri
/// * `data_url` - Movie detail URL or episode URL
///
/// # Returns
/// Links in discovery order, possibly empty
#[tauri::command]
pub async fn resolve_links(
    state: State<'_, ProviderState>,
    data_url: String,
) -> Result<Vec<StreamLink>, String> {
    state
        .provider
        .resolve_links(&data_url)
        .await
        .map_err(|e| e.to_string())
}

/// Static provider metadata
#[tauri::command]
pub fn provider_info(state: State<'_, ProviderState>) -> ProviderInfo {
    state.provider.info()
}
