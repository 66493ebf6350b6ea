//! Immutable configuration for slide decks.
//!
//! A deck has one [`GlobalConfiguration`] holding its background, keyboard
//! controls, footer, header and transition. Each slide is authored as a
//! [`SlideConfigDraft`] that may override the footer, header or transition;
//! [`SlideConfigDraft::merge_with_global`] turns it into a
//! [`ResolvedSlideConfig`] ready for rendering.
//!
//! ```rust
//! use deck_config::{
//!     GlobalConfiguration, HeaderConfiguration, SlideConfigDraft, SlideSettings, TransitionSpec,
//! };
//!
//! let global = GlobalConfiguration::default();
//! let draft = SlideConfigDraft::new("/intro").with_header(HeaderConfiguration::titled("Intro")?);
//! let slide = draft.merge_with_global(&global);
//!
//! assert_eq!(slide.header().title(), "Intro");
//! assert_eq!(slide.transition(), &TransitionSpec::None);
//! # Ok::<_, deck_config::InvalidHeaderConfiguration>(())
//! ```
//!
//! Whole decks can also be described in a TOML or JSON manifest and loaded
//! with [`ManifestLoader`], layered with environment variables.

mod background;
mod controls;
pub mod declarative;
mod error;
mod footer;
mod global;
mod header;
mod manifest;
mod result_ext;
mod scalar_text;
mod settings;
mod slide;
mod transition;

use std::sync::Arc;

pub use background::{BackgroundConfiguration, BackgroundSpec};
pub use controls::{ControlsConfiguration, KeyIdentifier};
pub use error::{AggregatedErrors, DeckConfigError, InvalidHeaderConfiguration};
pub use footer::FooterConfiguration;
pub use global::GlobalConfiguration;
pub use header::HeaderConfiguration;
pub use manifest::{DEFAULT_ENV_PREFIX, DeckManifest, ManifestLoader, load_manifest};
pub use result_ext::DeckResultExt;
pub use settings::SlideSettings;
pub use slide::{ResolvedSlideConfig, SlideConfigDraft, SlideOverrides, resolve};
pub use transition::{SlideDirection, TransitionSpec};

/// Result type for manifest loading; errors are shared so they can be
/// aggregated.
pub type DeckResult<T> = Result<T, Arc<DeckConfigError>>;
