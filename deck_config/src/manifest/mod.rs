//! Whole-deck manifests: one document holding the deck defaults and every
//! slide draft.
//!
//! Manifests are read by [`ManifestLoader`], which layers built-in defaults,
//! one or more files and `DECK_`-prefixed environment variables before
//! deserialising and validating the result.

mod loader;
mod parser;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::{
    DeckConfigError, DeckResult, GlobalConfiguration, ResolvedSlideConfig, SlideConfigDraft,
};

pub use loader::{DEFAULT_ENV_PREFIX, ManifestLoader};

/// Deck defaults plus the ordered list of slide drafts.
///
/// # Examples
///
/// ```rust
/// use deck_config::{DeckManifest, GlobalConfiguration, SlideConfigDraft, SlideSettings};
///
/// let manifest = DeckManifest::new(
///     GlobalConfiguration::default(),
///     vec![SlideConfigDraft::new("/intro"), SlideConfigDraft::new("/outro")],
/// );
/// manifest.validate()?;
///
/// let resolved = manifest.resolve_slides();
/// assert_eq!(resolved.len(), 2);
/// assert!(!resolved.iter().any(|slide| slide.footer().show_footer()));
/// # Ok::<_, std::sync::Arc<deck_config::DeckConfigError>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckManifest {
    global: GlobalConfiguration,
    slides: Vec<SlideConfigDraft>,
}

impl DeckManifest {
    /// Creates a manifest from deck defaults and slide drafts.
    #[must_use]
    pub const fn new(global: GlobalConfiguration, slides: Vec<SlideConfigDraft>) -> Self {
        Self { global, slides }
    }

    /// Deck-wide defaults.
    #[must_use]
    pub const fn global(&self) -> &GlobalConfiguration {
        &self.global
    }

    /// Slide drafts in presentation order.
    #[must_use]
    pub fn slides(&self) -> &[SlideConfigDraft] {
        &self.slides
    }

    /// Looks up a slide draft by route.
    #[must_use]
    pub fn slide(&self, route: &str) -> Option<&SlideConfigDraft> {
        self.slides.iter().find(|slide| slide.route() == route)
    }

    /// Resolves the slide at `route`, if present.
    #[must_use]
    pub fn resolve(&self, route: &str) -> Option<ResolvedSlideConfig> {
        self.slide(route)
            .map(|slide| slide.merge_with_global(&self.global))
    }

    /// Resolves every slide, in order, against the deck defaults.
    #[must_use]
    pub fn resolve_slides(&self) -> Vec<ResolvedSlideConfig> {
        self.slides
            .iter()
            .map(|slide| slide.merge_with_global(&self.global))
            .collect()
    }

    /// Checks deck-level rules: every route is non-empty and unique.
    ///
    /// All violations are reported together.
    ///
    /// # Errors
    ///
    /// Returns [`DeckConfigError::Validation`] for a single violation and
    /// [`DeckConfigError::Aggregate`] for several.
    pub fn validate(&self) -> DeckResult<()> {
        let mut errors = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, slide) in self.slides.iter().enumerate() {
            let key = format!("slides[{index}].route");
            if slide.route().is_empty() {
                errors.push(DeckConfigError::validation(key, "must not be empty"));
                continue;
            }
            match seen.entry(slide.route()) {
                Entry::Occupied(first) => errors.push(DeckConfigError::validation(
                    key,
                    format!("duplicates the route of slides[{}]", first.get()),
                )),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }
        DeckConfigError::try_aggregate(errors).map_or(Ok(()), |err| Err(Arc::new(err)))
    }
}

/// Loads a manifest from `path`, layered over the built-in defaults and
/// `DECK_`-prefixed environment variables.
///
/// # Errors
///
/// Returns a [`DeckConfigError`] when the file cannot be read or parsed, the
/// merged document is not a valid manifest, or validation fails.
pub fn load_manifest(path: impl Into<Utf8PathBuf>) -> DeckResult<DeckManifest> {
    ManifestLoader::new().with_file(path).load()
}
