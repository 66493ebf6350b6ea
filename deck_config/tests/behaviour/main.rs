//! `rstest-bdd` behavioural suite for slide resolution.
//!
//! Feature files live under `tests/features`; the modules below register the
//! shared fixtures and step implementations they bind to.

mod fixtures;
mod scenarios;
mod steps;
