//! Library interface for the `deck-check` manifest inspector.
//!
//! The binary is a thin wrapper around [`run`], which loads a manifest,
//! resolves its slides and writes them to any [`std::io::Write`] sink.

pub mod cli;
pub mod error;
pub mod output;

use std::io::Write;

use deck_config::{ManifestLoader, ResolvedSlideConfig};

use crate::cli::{Args, OutputFormat};
use crate::error::DeckCheckError;

/// Loads the manifest named by `args` and writes the resolved slides to `out`.
///
/// # Errors
///
/// Returns [`DeckCheckError`] when the manifest fails to load, the requested
/// route does not exist, or writing the report fails.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), DeckCheckError> {
    let manifest = build_loader(args).load()?;
    let slides: Vec<ResolvedSlideConfig> = match args.route.as_deref() {
        Some(route) => vec![
            manifest
                .resolve(route)
                .ok_or_else(|| DeckCheckError::UnknownRoute(route.to_owned()))?,
        ],
        None => manifest.resolve_slides(),
    };
    tracing::debug!(count = slides.len(), "resolved slides");

    match args.format {
        OutputFormat::Json => output::write_json(out, &slides),
        OutputFormat::Summary => output::write_summary(out, &slides),
    }
}

/// Writes `err` to `sink` the way the binary reports failures.
///
/// # Errors
///
/// Returns any I/O error raised while writing to `sink`.
pub fn report_failure(err: &DeckCheckError, sink: &mut impl Write) -> std::io::Result<()> {
    writeln!(sink, "deck-check: {err}")
}

fn build_loader(args: &Args) -> ManifestLoader {
    let loader = ManifestLoader::new().with_file(args.manifest.clone());
    match (args.no_env, args.env_prefix.as_deref()) {
        (true, _) => loader.without_env(),
        (false, Some(prefix)) => loader.with_env_prefix(prefix),
        (false, None) => loader,
    }
}
