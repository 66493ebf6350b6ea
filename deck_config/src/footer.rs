//! Footer visibility flags.

use serde::{Deserialize, Serialize};

/// Which footer elements are drawn on a slide.
///
/// The type's own default shows the footer. [`crate::GlobalConfiguration`]
/// starts from [`FooterConfiguration::hidden`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfiguration {
    show_footer: bool,
    show_slide_numbers: bool,
    show_social_handle: bool,
}

impl Default for FooterConfiguration {
    fn default() -> Self {
        Self::new(true, false, false)
    }
}

impl FooterConfiguration {
    /// Creates a footer configuration from explicit flags.
    #[must_use]
    pub const fn new(show_footer: bool, show_slide_numbers: bool, show_social_handle: bool) -> Self {
        Self {
            show_footer,
            show_slide_numbers,
            show_social_handle,
        }
    }

    /// A footer that is not drawn at all.
    #[must_use]
    pub const fn hidden() -> Self {
        Self::new(false, false, false)
    }

    /// Returns a copy with slide numbers switched on or off.
    #[must_use]
    pub const fn with_slide_numbers(self, show_slide_numbers: bool) -> Self {
        Self {
            show_slide_numbers,
            ..self
        }
    }

    /// Returns a copy with the social handle switched on or off.
    #[must_use]
    pub const fn with_social_handle(self, show_social_handle: bool) -> Self {
        Self {
            show_social_handle,
            ..self
        }
    }

    /// Whether the footer is drawn.
    #[must_use]
    pub const fn show_footer(&self) -> bool {
        self.show_footer
    }

    /// Whether the footer carries the slide number.
    #[must_use]
    pub const fn show_slide_numbers(&self) -> bool {
        self.show_slide_numbers
    }

    /// Whether the footer carries the presenter's social handle.
    #[must_use]
    pub const fn show_social_handle(&self) -> bool {
        self.show_social_handle
    }
}
