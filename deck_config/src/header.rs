//! Slide header with its single validation rule.

use serde::{Deserialize, Serialize};

use crate::error::InvalidHeaderConfiguration;

/// Header drawn above slide content.
///
/// A shown header must carry a non-empty title. The rule is checked when the
/// value is built, including when it is deserialised, so an invalid header
/// can never be observed.
///
/// # Examples
///
/// ```rust
/// use deck_config::HeaderConfiguration;
///
/// let header = HeaderConfiguration::new(true, "Intro")?;
/// assert_eq!(header.title(), "Intro");
///
/// assert!(HeaderConfiguration::new(true, "").is_err());
/// assert!(HeaderConfiguration::new(false, "").is_ok());
/// # Ok::<_, deck_config::InvalidHeaderConfiguration>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HeaderFields")]
pub struct HeaderConfiguration {
    show_header: bool,
    title: String,
}

impl HeaderConfiguration {
    /// Builds a header, rejecting a shown header without a title.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderConfiguration`] when `show_header` is `true`
    /// and `title` is empty.
    pub fn new(
        show_header: bool,
        title: impl Into<String>,
    ) -> Result<Self, InvalidHeaderConfiguration> {
        let text: String = title.into();
        if show_header && text.is_empty() {
            return Err(InvalidHeaderConfiguration);
        }
        Ok(Self {
            show_header,
            title: text,
        })
    }

    /// Builds a shown header with the given title.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderConfiguration`] when `title` is empty.
    pub fn titled(title: impl Into<String>) -> Result<Self, InvalidHeaderConfiguration> {
        Self::new(true, title)
    }

    /// Whether the header is drawn.
    #[must_use]
    pub const fn show_header(&self) -> bool {
        self.show_header
    }

    /// Header text; empty when no title was given.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct HeaderFields {
    show_header: bool,
    #[serde(deserialize_with = "crate::scalar_text::deserialize")]
    title: String,
}

impl TryFrom<HeaderFields> for HeaderConfiguration {
    type Error = InvalidHeaderConfiguration;

    fn try_from(fields: HeaderFields) -> Result<Self, Self::Error> {
        Self::new(fields.show_header, fields.title)
    }
}
