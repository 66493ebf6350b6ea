//! Builder that layers defaults, manifest files and the environment.

use std::sync::Arc;

use camino::Utf8PathBuf;
use figment::{Figment, providers::Env};
use serde_json::Value;

use crate::declarative::{LayerComposition, MergeComposer, from_value, merge_layers};
use crate::{DeckConfigError, DeckResult, DeckResultExt};

use super::DeckManifest;
use super::parser::parse_manifest_file;

/// Prefix for environment variables read by default.
///
/// Nested keys are separated with `__`, so
/// `DECK_GLOBAL__FOOTER__SHOW_SLIDE_NUMBERS=true` sets
/// `global.footer.show_slide_numbers`.
pub const DEFAULT_ENV_PREFIX: &str = "DECK_";

/// Loads a [`DeckManifest`] from layered sources.
///
/// Precedence, lowest first: built-in defaults, files in the order they were
/// added, environment variables. Objects merge key by key; arrays such as
/// `slides` are replaced by the last layer that sets them.
///
/// # Examples
///
/// ```rust,no_run
/// use deck_config::ManifestLoader;
///
/// let manifest = ManifestLoader::new()
///     .with_file("deck.toml")
///     .with_file("deck.local.toml")
///     .without_env()
///     .load()?;
/// println!("{} slides", manifest.slides().len());
/// # Ok::<_, std::sync::Arc<deck_config::DeckConfigError>>(())
/// ```
#[derive(Clone, Debug)]
pub struct ManifestLoader {
    files: Vec<Utf8PathBuf>,
    env_prefix: Option<String>,
}

impl Default for ManifestLoader {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_owned()),
        }
    }
}

impl ManifestLoader {
    /// Creates a loader with no files and the default environment prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a manifest file layer.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Reads environment variables with `prefix` instead of
    /// [`DEFAULT_ENV_PREFIX`].
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Skips the environment layer entirely.
    #[must_use]
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Gathers every layer without merging them.
    ///
    /// Layers that fail to load are recorded as errors and left out; the
    /// remaining layers are still returned.
    #[must_use]
    pub fn compose(&self) -> LayerComposition {
        let mut composer = MergeComposer::new();
        let mut errors: Vec<Arc<DeckConfigError>> = Vec::new();

        match serde_json::to_value(DeckManifest::default()).into_deck() {
            Ok(value) => composer.push_defaults(value),
            Err(err) => errors.push(err),
        }

        for path in &self.files {
            match parse_manifest_file(path) {
                Ok(value) => composer.push_file(value, Some(path.clone())),
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "skipping unreadable manifest file");
                    errors.push(err);
                }
            }
        }

        if let Some(prefix) = self.env_prefix.as_deref() {
            match environment_layer(prefix) {
                Ok(value) => composer.push_environment(value),
                Err(err) => errors.push(err),
            }
        }

        LayerComposition::new(composer.layers(), errors)
    }

    /// Loads, merges and validates the manifest.
    ///
    /// # Errors
    ///
    /// Returns every layer error together with any merge or validation
    /// failure, aggregated when there is more than one.
    pub fn load(&self) -> DeckResult<DeckManifest> {
        self.compose().into_merge_result(|layers| {
            let manifest: DeckManifest = from_value(merge_layers(layers))?;
            manifest.validate()?;
            tracing::debug!(slides = manifest.slides().len(), "loaded deck manifest");
            Ok(manifest)
        })
    }
}

fn environment_layer(prefix: &str) -> DeckResult<Value> {
    Figment::from(Env::prefixed(prefix).split("__"))
        .extract::<Value>()
        .into_deck()
}
