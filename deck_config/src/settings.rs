//! Accessors shared by deck-wide and resolved per-slide configuration.

use crate::{FooterConfiguration, HeaderConfiguration, TransitionSpec};

/// The settings a slide may override, as seen by a renderer.
///
/// Implemented by [`crate::GlobalConfiguration`] and
/// [`crate::ResolvedSlideConfig`] so either can be handed to code that only
/// needs the footer, header and transition.
///
/// # Examples
///
/// ```rust
/// use deck_config::{GlobalConfiguration, SlideConfigDraft, SlideSettings};
///
/// fn footer_visible(settings: &impl SlideSettings) -> bool {
///     settings.footer().show_footer()
/// }
///
/// let global = GlobalConfiguration::default();
/// let slide = SlideConfigDraft::new("/intro").merge_with_global(&global);
/// assert_eq!(footer_visible(&global), footer_visible(&slide));
/// ```
pub trait SlideSettings {
    /// Footer flags in effect.
    fn footer(&self) -> &FooterConfiguration;

    /// Header in effect.
    fn header(&self) -> &HeaderConfiguration;

    /// Transition used when entering the slide.
    fn transition(&self) -> &TransitionSpec;
}
