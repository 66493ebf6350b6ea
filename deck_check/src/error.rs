//! Error types for `deck-check`.

use std::sync::Arc;

use deck_config::DeckConfigError;
use thiserror::Error;

/// Errors surfaced by the `deck-check` pipeline.
#[derive(Debug, Error)]
pub enum DeckCheckError {
    /// The manifest could not be loaded or validated.
    #[error("failed to load manifest: {0}")]
    Manifest(#[from] Arc<DeckConfigError>),

    /// `--route` named a slide the manifest does not contain.
    #[error("no slide with route '{0}' in manifest")]
    UnknownRoute(String),

    /// Serialising the report failed.
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
