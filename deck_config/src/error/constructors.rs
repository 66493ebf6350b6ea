//! Constructors and aggregation helpers for `DeckConfigError`.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use figment::Error as FigmentError;

use super::{AggregatedErrors, DeckConfigError};

impl DeckConfigError {
    /// Tries to build a [`DeckConfigError`] from an iterator of errors.
    ///
    /// Returns `None` when no errors are supplied, the inner error when a
    /// single [`Arc`] is uniquely owned, and [`Self::Aggregate`] otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.is_empty() {
            return None;
        }
        Some(if arcs.len() == 1 {
            let last = arcs.pop()?;
            match Arc::try_unwrap(last) {
                Ok(err) => err,
                Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
            }
        } else {
            Self::Aggregate(Box::new(AggregatedErrors::new(arcs)))
        })
    }

    /// Build a [`DeckConfigError`] from at least one error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`DeckConfigError::try_aggregate`]
    /// when the list may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        Self::try_aggregate(errors)
            .unwrap_or_else(|| panic!("aggregate requires at least one error"))
    }

    /// Construct a validation error for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deck_config::DeckConfigError;
    /// let e = DeckConfigError::validation("slides[0].route", "must not be empty");
    /// assert_eq!(
    ///     e.to_string(),
    ///     "Validation failed for 'slides[0].route': must not be empty"
    /// );
    /// ```
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Construct a merge error from a [`figment::Error`].
    #[must_use]
    pub fn merge(source: FigmentError) -> Self {
        Self::Merge {
            source: Box::new(source),
        }
    }

    /// Construct a file error for `path`, shared behind an [`Arc`].
    #[must_use]
    pub fn file(path: &Path, source: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }
}
