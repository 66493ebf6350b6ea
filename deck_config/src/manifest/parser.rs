//! Format-specific parsing of manifest files.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Format, Json, Toml},
};
use serde_json::Value;

use crate::{DeckConfigError, DeckResult, DeckResultExt};

/// Reads `path` and returns its contents as a JSON value.
///
/// `.json` files use the JSON provider; every other extension is parsed as
/// TOML.
///
/// # Errors
///
/// Returns [`DeckConfigError::File`] when the file is missing, unreadable or
/// syntactically invalid.
pub(super) fn parse_manifest_file(path: &Utf8Path) -> DeckResult<Value> {
    let std_path = path.as_std_path();
    if !std_path.is_file() {
        return Err(DeckConfigError::file(
            std_path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "manifest file not found"),
        ));
    }
    let data =
        std::fs::read_to_string(std_path).map_err(|e| DeckConfigError::file(std_path, e))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    // Validate here so syntax errors carry the file path.
    let figment = if is_json {
        serde_json::from_str::<Value>(&data).map_err(|e| DeckConfigError::file(std_path, e))?;
        Figment::from(Json::string(&data))
    } else {
        toml::from_str::<toml::Value>(&data).map_err(|e| DeckConfigError::file(std_path, e))?;
        Figment::from(Toml::string(&data))
    };
    tracing::debug!(path = %path, "parsed manifest file");
    figment.extract::<Value>().into_deck()
}
