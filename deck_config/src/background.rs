//! Light and dark backgrounds applied behind every slide.

use serde::{Deserialize, Serialize};

/// A single background fill.
///
/// Colour literals and image sources are passed through to the host
/// framework unexamined.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum BackgroundSpec {
    /// No fill; whatever sits behind the deck shows through.
    #[default]
    Transparent,
    /// A solid colour literal such as `#1e1e2e`.
    Color {
        /// Colour literal understood by the host framework.
        value: String,
    },
    /// An image stretched behind the slide.
    Image {
        /// Path or URL of the image asset.
        source: String,
    },
}

impl BackgroundSpec {
    /// Builds a solid colour background.
    #[must_use]
    pub fn color(value: impl Into<String>) -> Self {
        Self::Color {
            value: value.into(),
        }
    }

    /// Builds an image background.
    #[must_use]
    pub fn image(source: impl Into<String>) -> Self {
        Self::Image {
            source: source.into(),
        }
    }

    /// Returns `true` when nothing is drawn.
    #[must_use]
    pub const fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }
}

/// Backgrounds for the light and dark appearance of the deck.
///
/// Both variants are always present and default to
/// [`BackgroundSpec::Transparent`].
///
/// # Examples
///
/// ```rust
/// use deck_config::{BackgroundConfiguration, BackgroundSpec};
///
/// let background = BackgroundConfiguration::default()
///     .with_dark(BackgroundSpec::color("#000000"));
/// assert!(background.light().is_transparent());
/// assert_eq!(background.dark(), &BackgroundSpec::color("#000000"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfiguration {
    light: BackgroundSpec,
    dark: BackgroundSpec,
}

impl BackgroundConfiguration {
    /// Creates a configuration from explicit light and dark backgrounds.
    #[must_use]
    pub const fn new(light: BackgroundSpec, dark: BackgroundSpec) -> Self {
        Self { light, dark }
    }

    /// Returns a copy with the light background replaced.
    #[must_use]
    pub fn with_light(self, light: BackgroundSpec) -> Self {
        Self { light, ..self }
    }

    /// Returns a copy with the dark background replaced.
    #[must_use]
    pub fn with_dark(self, dark: BackgroundSpec) -> Self {
        Self { dark, ..self }
    }

    /// Background used in light mode.
    #[must_use]
    pub const fn light(&self) -> &BackgroundSpec {
        &self.light
    }

    /// Background used in dark mode.
    #[must_use]
    pub const fn dark(&self) -> &BackgroundSpec {
        &self.dark
    }
}
