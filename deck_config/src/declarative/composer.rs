//! Layer composition helpers for declarative merging.

use std::sync::Arc;

use camino::Utf8PathBuf;
use serde_json::Value;

use crate::{DeckConfigError, DeckResult};

use super::MergeLayer;

/// Builder that accumulates [`MergeLayer`] instances in precedence order.
#[derive(Debug, Default)]
pub struct MergeComposer {
    layers: Vec<MergeLayer>,
}

impl MergeComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Push a defaults layer.
    pub fn push_defaults(&mut self, value: Value) {
        self.push_layer(MergeLayer::defaults(value));
    }

    /// Push a manifest file layer.
    pub fn push_file(&mut self, value: Value, path: Option<Utf8PathBuf>) {
        self.push_layer(MergeLayer::file(value, path));
    }

    /// Push an environment layer.
    pub fn push_environment(&mut self, value: Value) {
        self.push_layer(MergeLayer::environment(value));
    }

    fn push_layer(&mut self, layer: MergeLayer) {
        tracing::debug!(provenance = ?layer.provenance(), path = ?layer.path(), "composing layer");
        self.layers.push(layer);
    }

    /// Consume the composer and return the accumulated layers.
    #[must_use]
    pub fn layers(self) -> Vec<MergeLayer> {
        self.layers
    }
}

impl IntoIterator for MergeComposer {
    type Item = MergeLayer;
    type IntoIter = std::vec::IntoIter<MergeLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

/// Result of composing layers alongside any errors collected on the way.
#[derive(Debug)]
pub struct LayerComposition {
    layers: Vec<MergeLayer>,
    errors: Vec<Arc<DeckConfigError>>,
}

impl LayerComposition {
    /// Create a new composition from `layers` and `errors`.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "Constructing Vec-based compositions requires allocation"
    )]
    pub fn new(layers: Vec<MergeLayer>, errors: Vec<Arc<DeckConfigError>>) -> Self {
        Self { layers, errors }
    }

    /// Decompose the composition into its constituent parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<MergeLayer>, Vec<Arc<DeckConfigError>>) {
        (self.layers, self.errors)
    }

    fn errors_to_result<T>(mut errors: Vec<Arc<DeckConfigError>>) -> DeckResult<T> {
        if errors.len() == 1 {
            Err(errors.remove(0))
        } else {
            Err(Arc::new(DeckConfigError::aggregate(errors)))
        }
    }

    /// Consume the composition and merge layers using `merge`.
    ///
    /// Composition errors are reported together with any merge failure, so
    /// a broken file and a bad environment value surface in one go.
    ///
    /// # Errors
    ///
    /// Returns an aggregated [`DeckConfigError`] when either composition or
    /// merge steps fail.
    pub fn into_merge_result<T, F>(self, merge: F) -> DeckResult<T>
    where
        F: FnOnce(Vec<MergeLayer>) -> DeckResult<T>,
    {
        let (layers, mut errors) = self.into_parts();
        match merge(layers) {
            Ok(cfg) if errors.is_empty() => Ok(cfg),
            Ok(_) => Self::errors_to_result(errors),
            Err(err) => {
                errors.push(err);
                Self::errors_to_result(errors)
            }
        }
    }
}
