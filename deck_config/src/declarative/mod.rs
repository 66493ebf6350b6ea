//! Layered merging of manifest documents.
//!
//! Each source (built-in defaults, manifest files, environment variables) is
//! captured as a [`MergeLayer`] holding a [`serde_json::Value`]. Layers are
//! overlaid in order with [`merge_value`] and the result is deserialised once,
//! so later layers only need to mention the keys they change.
//!
//! # Example
//!
//! ```rust
//! use deck_config::declarative::{MergeComposer, from_value, merge_value};
//! use deck_config::GlobalConfiguration;
//! use serde_json::json;
//!
//! let mut composer = MergeComposer::new();
//! composer.push_defaults(json!({"footer": {"show_footer": false}}));
//! composer.push_environment(json!({"footer": {"show_slide_numbers": true}}));
//!
//! let mut merged = serde_json::Value::Null;
//! for layer in composer.layers() {
//!     merge_value(&mut merged, layer.into_value());
//! }
//! let global: GlobalConfiguration = from_value(merged)?;
//! # use deck_config::SlideSettings;
//! assert!(!global.footer().show_footer());
//! assert!(global.footer().show_slide_numbers());
//! # Ok::<_, std::sync::Arc<deck_config::DeckConfigError>>(())
//! ```

mod composer;
mod convert;
mod layer;
mod merge;

pub use composer::{LayerComposition, MergeComposer};
pub use convert::from_value;
pub use layer::{MergeLayer, MergeProvenance};
pub use merge::{merge_layers, merge_value};
