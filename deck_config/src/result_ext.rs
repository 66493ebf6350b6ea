//! Extensions for mapping errors to `DeckResult` concisely.
//!
//! These helpers replace repetitive `.map_err(|e| Arc::new(e.into()))`
//! chains when converting external error types into [`DeckResult`].
//!
//! # Examples
//!
//! ```
//! use deck_config::{DeckResult, DeckResultExt};
//!
//! fn parse() -> DeckResult<serde_json::Value> {
//!     serde_json::from_str("{\"slides\": []}").into_deck()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{DeckConfigError, DeckResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<DeckConfigError>` into a [`DeckResult`].
pub trait DeckResultExt<T, E> {
    /// Convert `Result<T, E>` into `DeckResult<T>` using `Into<DeckConfigError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<DeckConfigError>`.
    fn into_deck(self) -> DeckResult<T>;
}

impl<T, E> DeckResultExt<T, E> for Result<T, E>
where
    E: Into<DeckConfigError>,
{
    fn into_deck(self) -> DeckResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Maps JSON deserialisation failures into [`DeckConfigError::Merge`].
pub(crate) trait DeckMergeExt<T> {
    /// Convert a `serde_json` result into a merge-phase [`DeckResult`].
    fn into_deck_merge(self) -> DeckResult<T>;
}

impl<T> DeckMergeExt<T> for Result<T, serde_json::Error> {
    fn into_deck_merge(self) -> DeckResult<T> {
        self.map_err(|e| {
            Arc::new(DeckConfigError::merge(figment::Error::from(e.to_string())))
        })
    }
}
