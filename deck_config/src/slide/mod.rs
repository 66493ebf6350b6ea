//! Per-slide configuration and its resolution against deck-wide defaults.
//!
//! A slide starts life as a [`SlideConfigDraft`]: an identity (`route`,
//! `steps`) plus optional overrides for the footer, header and transition.
//! [`resolve`] coalesces each override with the matching
//! [`crate::GlobalConfiguration`] field and yields a [`ResolvedSlideConfig`],
//! which has no override storage and cannot be resolved again.

mod draft;
mod resolved;

pub use draft::{SlideConfigDraft, SlideOverrides};
pub use resolved::{ResolvedSlideConfig, resolve};
