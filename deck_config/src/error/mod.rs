//! Error types produced while building and loading deck configuration.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::{DeckConfigError, InvalidHeaderConfiguration};
