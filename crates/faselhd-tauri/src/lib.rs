//! FaselHD Tauri Integration
//!
//! Provides a Tauri plugin exposing the FaselHD content provider to a
//! streaming frontend.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(faselhd_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const movies = await invoke('plugin:faselhd|browse_page', { category: 'movies', page: 1 });
//! const detail = await invoke('plugin:faselhd|load_detail', { url: movies[0].detail_url });
//! const links = await invoke('plugin:faselhd|resolve_links', { dataUrl: detail.kind.data_url });
//! ```

use std::sync::Arc;

use faselhd_core::FaselProvider;
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;

/// Shared handle to the provider
///
/// The provider keeps no mutable state between calls, so commands share it
/// through an `Arc` without locking.
pub struct ProviderState {
    pub(crate) provider: Arc<FaselProvider>,
}

impl ProviderState {
    /// Create a new ProviderState with default configuration
    ///
    /// # Errors
    /// Returns error string if provider initialization fails
    pub fn new() -> Result<Self, String> {
        let provider = FaselProvider::new().map_err(|e| e.to_string())?;
        Ok(Self::from_provider(provider))
    }

    /// Wrap an already configured provider
    pub fn from_provider(provider: FaselProvider) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

/// Initialize the faselhd plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("faselhd")
        .invoke_handler(tauri::generate_handler![
            commands::browse_page,
            commands::home_page,
            commands::search,
            commands::load_detail,
            commands::resolve_links,
            commands::provider_info
        ])
        .setup(|app, _api| {
            let state = ProviderState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use faselhd_core::{CatalogEntry, DetailRecord, StreamLink};
