//! Conversions from external error types into `DeckConfigError`.

use figment::Error as FigmentError;

use super::DeckConfigError;

/// JSON decoding failures become [`DeckConfigError::Gathering`].
impl From<serde_json::Error> for DeckConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Gathering(Box::new(FigmentError::from(format!(
            "JSON error: {} at line {}, column {}",
            e,
            e.line(),
            e.column()
        ))))
    }
}

impl From<FigmentError> for DeckConfigError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(e.into())
    }
}
