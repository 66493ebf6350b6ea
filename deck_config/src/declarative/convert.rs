//! JSON conversion helpers used by declarative merging.

use serde_json::Value;

use crate::{DeckResult, result_ext::DeckMergeExt};

/// Deserialise a merged JSON [`Value`] into `T`.
///
/// Failures are attributed to the merge phase: the individual layers were
/// read successfully but their combination does not form a valid `T`.
///
/// # Errors
///
/// Returns a [`crate::DeckConfigError::Merge`] when deserialisation fails.
pub fn from_value<T: serde::de::DeserializeOwned>(value: Value) -> DeckResult<T> {
    serde_json::from_value(value).into_deck_merge()
}
