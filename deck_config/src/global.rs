//! Deck-wide defaults.

use serde::{Deserialize, Serialize};

use crate::{
    BackgroundConfiguration, ControlsConfiguration, FooterConfiguration, HeaderConfiguration,
    SlideSettings, TransitionSpec,
};

/// Settings shared by every slide in a deck.
///
/// Built once when the deck starts and never mutated afterwards; the
/// `with_*` methods return new values. Slides inherit `footer`, `header` and
/// `transition` unless they override them. `background` and `controls` are
/// deck-global only.
///
/// # Examples
///
/// ```rust
/// use deck_config::{GlobalConfiguration, SlideSettings, TransitionSpec};
///
/// let global = GlobalConfiguration::default();
/// assert!(!global.footer().show_footer());
/// assert!(!global.header().show_header());
/// assert!(global.controls().enabled());
/// assert_eq!(global.transition(), &TransitionSpec::None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfiguration {
    background: BackgroundConfiguration,
    controls: ControlsConfiguration,
    footer: FooterConfiguration,
    header: HeaderConfiguration,
    transition: TransitionSpec,
}

impl Default for GlobalConfiguration {
    fn default() -> Self {
        Self {
            background: BackgroundConfiguration::default(),
            controls: ControlsConfiguration::default(),
            footer: FooterConfiguration::hidden(),
            header: HeaderConfiguration::default(),
            transition: TransitionSpec::default(),
        }
    }
}

impl GlobalConfiguration {
    /// Returns a copy with the background replaced.
    #[must_use]
    pub fn with_background(self, background: BackgroundConfiguration) -> Self {
        Self { background, ..self }
    }

    /// Returns a copy with the controls replaced.
    #[must_use]
    pub fn with_controls(self, controls: ControlsConfiguration) -> Self {
        Self { controls, ..self }
    }

    /// Returns a copy with the footer replaced.
    #[must_use]
    pub fn with_footer(self, footer: FooterConfiguration) -> Self {
        Self { footer, ..self }
    }

    /// Returns a copy with the header replaced.
    #[must_use]
    pub fn with_header(self, header: HeaderConfiguration) -> Self {
        Self { header, ..self }
    }

    /// Returns a copy with the transition replaced.
    #[must_use]
    pub fn with_transition(self, transition: TransitionSpec) -> Self {
        Self { transition, ..self }
    }

    /// Light and dark backgrounds for the deck.
    #[must_use]
    pub const fn background(&self) -> &BackgroundConfiguration {
        &self.background
    }

    /// Keyboard controls for the deck.
    #[must_use]
    pub const fn controls(&self) -> &ControlsConfiguration {
        &self.controls
    }
}

impl SlideSettings for GlobalConfiguration {
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

#[cfg(test)]
mod tests {
    use super::GlobalConfiguration;
    use crate::{
        BackgroundConfiguration, BackgroundSpec, FooterConfiguration, HeaderConfiguration,
        SlideSettings, TransitionSpec,
    };
    use anyhow::{Result, ensure};
    use serde_json::json;

    #[test]
    fn default_hides_footer_and_header() {
        let global = GlobalConfiguration::default();
        assert!(!global.footer().show_footer());
        assert!(!global.header().show_header());
        assert!(global.controls().enabled());
        assert_eq!(global.transition(), &TransitionSpec::None);
        assert!(global.background().light().is_transparent());
    }

    #[test]
    fn builders_return_new_values() -> Result<()> {
        let original = GlobalConfiguration::default();
        let updated = original
            .clone()
            .with_footer(FooterConfiguration::default())
            .with_header(HeaderConfiguration::titled("Deck")?)
            .with_background(
                BackgroundConfiguration::default().with_light(BackgroundSpec::color("white")),
            );
        ensure!(!original.footer().show_footer(), "original must be unchanged");
        ensure!(updated.footer().show_footer());
        ensure!(updated.header().title() == "Deck");
        ensure!(updated.background().light() == &BackgroundSpec::color("white"));
        Ok(())
    }

    #[test]
    fn empty_document_deserialises_to_defaults() -> Result<()> {
        let global: GlobalConfiguration = serde_json::from_value(json!({}))?;
        ensure!(global == GlobalConfiguration::default());
        Ok(())
    }

    #[test]
    fn partial_footer_keeps_type_defaults_for_missing_flags() -> Result<()> {
        let global: GlobalConfiguration =
            serde_json::from_value(json!({ "footer": { "show_slide_numbers": true } }))?;
        ensure!(global.footer() == &FooterConfiguration::default().with_slide_numbers(true));
        Ok(())
    }
}
