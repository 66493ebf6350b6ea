//! Fully resolved slide configuration.

use std::num::NonZeroU32;

use serde::Serialize;

use crate::{
    FooterConfiguration, GlobalConfiguration, HeaderConfiguration, SlideSettings, TransitionSpec,
};

use super::SlideConfigDraft;

/// A slide with every overridable setting filled in.
///
/// Only [`resolve`] produces values of this type. Background and controls are
/// not carried; read them from the [`GlobalConfiguration`] the slide was
/// resolved against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedSlideConfig {
    route: String,
    steps: NonZeroU32,
    footer: FooterConfiguration,
    header: HeaderConfiguration,
    transition: TransitionSpec,
}

impl ResolvedSlideConfig {
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
}

impl SlideSettings for ResolvedSlideConfig {
    fn footer(&self) -> &FooterConfiguration {
        &self.footer
    }

    fn header(&self) -> &HeaderConfiguration {
        &self.header
    }

    fn transition(&self) -> &TransitionSpec {
        &self.transition
    }
}

fn coalesce<T: Clone>(slide_value: Option<&T>, deck_value: &T) -> T {
    slide_value.unwrap_or(deck_value).clone()
}

/// Resolves `draft` against `global`.
///
/// Each of footer, header and transition comes from the draft's override when
/// present and from `global` otherwise. Route and steps are copied unchanged.
/// Neither input is modified.
#[must_use]
pub fn resolve(draft: &SlideConfigDraft, global: &GlobalConfiguration) -> ResolvedSlideConfig {
    let overrides = draft.overrides();
    tracing::trace!(
        route = draft.route(),
        footer_overridden = overrides.footer.is_some(),
        header_overridden = overrides.header.is_some(),
        transition_overridden = overrides.transition.is_some(),
        "resolving slide configuration"
    );
    ResolvedSlideConfig {
        route: draft.route().to_owned(),
        steps: draft.steps(),
        footer: coalesce(overrides.footer.as_ref(), global.footer()),
        header: coalesce(overrides.header.as_ref(), global.header()),
        transition: coalesce(overrides.transition.as_ref(), global.transition()),
    }
}
