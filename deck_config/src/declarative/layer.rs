//! Layer metadata and transport values for declarative merges.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;

/// Provenance of a merge layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MergeProvenance {
    /// Built-in defaults of the manifest types.
    Defaults,
    /// Values loaded from a manifest file.
    File,
    /// Values collected from environment variables.
    Environment,
}

/// Representation of a configuration layer.
#[derive(Clone, Debug)]
pub struct MergeLayer {
    provenance: MergeProvenance,
    value: Value,
    path: Option<Utf8PathBuf>,
}

impl MergeLayer {
    /// Construct a layer originating from default values.
    #[must_use]
    pub const fn defaults(value: Value) -> Self {
        Self {
            provenance: MergeProvenance::Defaults,
            value,
            path: None,
        }
    }

    /// Construct a layer originating from a manifest file.
    #[must_use]
    pub const fn file(value: Value, path: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: MergeProvenance::File,
            value,
            path,
        }
    }

    /// Construct a layer originating from environment variables.
    #[must_use]
    pub const fn environment(value: Value) -> Self {
        Self {
            provenance: MergeProvenance::Environment,
            value,
            path: None,
        }
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn provenance(&self) -> MergeProvenance {
        self.provenance
    }

    /// Returns the associated path if this layer was sourced from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Consumes the layer, returning its JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}
