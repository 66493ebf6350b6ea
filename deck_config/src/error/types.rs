//! Error enum for manifest loading and the header validation error.

use figment::Error as FigmentError;
use thiserror::Error;

use super::AggregatedErrors;

/// A header was marked as shown but has no title.
///
/// Returned by [`crate::HeaderConfiguration::new`]. This is an authoring
/// mistake: the caller must fix the values it passes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("header is shown but has an empty title")]
pub struct InvalidHeaderConfiguration;

/// Errors that can occur while loading a deck manifest.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckConfigError {
    /// A header failed its construction-time check.
    #[error(transparent)]
    InvalidHeader(#[from] InvalidHeaderConfiguration),

    /// Error originating from a manifest file.
    #[error("Manifest file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported while reading or parsing the file.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while gathering a layer from its provider.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// The merged layers could not be turned into a manifest.
    #[error("Failed to merge configuration layers: {source}")]
    Merge {
        /// Underlying error describing the merge failure.
        #[source]
        source: Box<FigmentError>,
    },

    /// A manifest value breaks a deck-level rule.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Manifest key that failed validation.
        key: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// Multiple errors occurred while loading a manifest.
    #[error("deck manifest has {count} problems:\n{0}", count = .0.len())]
    Aggregate(Box<AggregatedErrors>),
}
