//! Several manifest problems reported as one error.

use std::borrow::Cow;
use std::{error::Error, fmt, sync::Arc};

use super::DeckConfigError;

/// Every problem found while loading one manifest.
///
/// Displayed as one line per problem, each led by the manifest key or file
/// it concerns.
///
/// # Examples
///
/// ```
/// use deck_config::DeckConfigError;
/// let e = DeckConfigError::aggregate(vec![
///     DeckConfigError::validation("slides[0].route", "must not be empty"),
///     DeckConfigError::validation("slides[2].route", "duplicates the route of slides[1]"),
/// ]);
/// if let DeckConfigError::Aggregate(problems) = e {
///     assert_eq!(problems.len(), 2);
///     assert_eq!(
///         problems.to_string(),
///         "  - slides[0].route: must not be empty\n  - slides[2].route: duplicates the route of slides[1]"
///     );
/// }
/// ```
#[derive(Debug)]
pub struct AggregatedErrors(Vec<Arc<DeckConfigError>>);

impl AggregatedErrors {
    pub(crate) const fn new(errors: Vec<Arc<DeckConfigError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the problems in the order they were found.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &DeckConfigError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of problems.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no problems.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Where in the manifest, or which file, a problem points at.
fn location(err: &DeckConfigError) -> Cow<'_, str> {
    match err {
        DeckConfigError::Validation { key, .. } => Cow::Borrowed(key),
        DeckConfigError::File { path, .. } => path.to_string_lossy(),
        DeckConfigError::InvalidHeader(_) => Cow::Borrowed("header"),
        _ => Cow::Borrowed("manifest"),
    }
}

fn detail(err: &DeckConfigError) -> Cow<'_, str> {
    match err {
        DeckConfigError::Validation { message, .. } => Cow::Borrowed(message),
        DeckConfigError::File { source, .. } => Cow::Owned(source.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, err) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}: {}", location(err), detail(err))?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}
