//! Slide identity plus pending overrides.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{FooterConfiguration, GlobalConfiguration, HeaderConfiguration, TransitionSpec};

use super::{ResolvedSlideConfig, resolve};

/// Optional per-slide replacements for the overridable deck settings.
///
/// Background and controls are deck-global and have no override slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideOverrides {
    /// Footer to use instead of the deck footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfiguration>,
    /// Header to use instead of the deck header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderConfiguration>,
    /// Transition to use instead of the deck transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionSpec>,
}

impl SlideOverrides {
    /// Returns `true` when the slide inherits everything from the deck.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.footer.is_none() && self.header.is_none() && self.transition.is_none()
    }
}

const fn single_step() -> NonZeroU32 {
    NonZeroU32::MIN
}

/// A slide as authored, before deck defaults are applied.
///
/// # Examples
///
/// ```rust
/// use deck_config::{GlobalConfiguration, HeaderConfiguration, SlideConfigDraft, SlideSettings};
///
/// let draft = SlideConfigDraft::new("/intro").with_header(HeaderConfiguration::titled("Intro")?);
/// let resolved = draft.merge_with_global(&GlobalConfiguration::default());
///
/// assert_eq!(resolved.route(), "/intro");
/// assert_eq!(resolved.steps().get(), 1);
/// assert_eq!(resolved.header().title(), "Intro");
/// assert!(!resolved.footer().show_footer());
/// # Ok::<_, deck_config::InvalidHeaderConfiguration>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfigDraft {
    #[serde(deserialize_with = "crate::scalar_text::deserialize")]
    route: String,
    #[serde(default = "single_step")]
    steps: NonZeroU32,
    #[serde(default, skip_serializing_if = "SlideOverrides::is_empty")]
    overrides: SlideOverrides,
}

impl SlideConfigDraft {
    /// Creates a single-step slide that inherits every deck setting.
    #[must_use]
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            steps: single_step(),
            overrides: SlideOverrides::default(),
        }
    }

    /// Returns a copy with the number of advance steps replaced.
    #[must_use]
    pub fn with_steps(self, steps: NonZeroU32) -> Self {
        Self { steps, ..self }
    }

    /// Returns a copy with all overrides replaced.
    #[must_use]
    pub fn with_overrides(self, overrides: SlideOverrides) -> Self {
        Self { overrides, ..self }
    }

    /// Returns a copy that overrides the deck footer.
    #[must_use]
    pub const fn with_footer(mut self, footer: FooterConfiguration) -> Self {
        self.overrides.footer = Some(footer);
        self
    }

    /// Returns a copy that overrides the deck header.
    #[must_use]
    pub fn with_header(mut self, header: HeaderConfiguration) -> Self {
        self.overrides.header = Some(header);
        self
    }

    /// Returns a copy that overrides the deck transition.
    #[must_use]
    pub const fn with_transition(mut self, transition: TransitionSpec) -> Self {
        self.overrides.transition = Some(transition);
        self
    }

    /// Identifier the host navigates to.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Number of advance steps within the slide.
    #[must_use]
    pub const fn steps(&self) -> NonZeroU32 {
        self.steps
    }

    /// Overrides waiting to be applied.
    #[must_use]
    pub const fn overrides(&self) -> &SlideOverrides {
        &self.overrides
    }

    /// Applies the deck defaults to this slide.
    ///
    /// Equivalent to [`resolve`]`(self, global)`.
    #[must_use]
    pub fn merge_with_global(&self, global: &GlobalConfiguration) -> ResolvedSlideConfig {
        resolve(self, global)
    }
}
