//! Error types for the FaselHD provider
//!
//! Provides a comprehensive error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all FaselHD provider operations
///
/// Only top-level page fetches surface as errors. Rows that cannot be
/// extracted are dropped by the parsers instead of failing the call.
#[derive(Error, Debug)]
pub enum FaselError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to parse HTML content or build a selector
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// URL could not be resolved to an absolute address
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Search query rejected before any request was made
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

impl FaselError {
    /// Returns true for errors caused by the remote side (transport or status)
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::HttpStatus { .. })
    }
}

impl Serialize for FaselError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for FaselHD operations
pub type Result<T> = std::result::Result<T, FaselError>;
