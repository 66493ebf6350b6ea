//! Test helpers shared across crates.
//!
//! This crate provides `figment::Jail` wrappers and text helpers for the
//! behavioural suites.

pub mod figment;
pub mod text;
