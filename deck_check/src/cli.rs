//! Command-line interface definitions for `deck-check`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Report formats supported by `deck-check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of resolved slides.
    #[default]
    Json,
    /// One line per slide.
    Summary,
}

/// Parsed CLI arguments for `deck-check`.
#[derive(Debug, Parser)]
#[command(name = "deck-check")]
#[command(about = "Load a deck manifest and print its resolved slides")]
#[command(version)]
pub struct Args {
    /// Manifest file (TOML, or JSON with a `.json` extension).
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,
    /// Only report the slide with this route.
    #[arg(long, value_name = "ROUTE")]
    pub route: Option<String>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Ignore environment variable overrides.
    #[arg(long = "no-env", conflicts_with = "env_prefix")]
    pub no_env: bool,
    /// Prefix for environment variable overrides (default `DECK_`).
    #[arg(long, value_name = "PREFIX")]
    pub env_prefix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Args, OutputFormat};
    use anyhow::{Result, ensure};
    use clap::Parser;
    use rstest::rstest;

    #[test]
    fn defaults_to_json_with_environment() -> Result<()> {
        let args = Args::try_parse_from(["deck-check", "deck.toml"])?;
        ensure!(args.manifest.as_str() == "deck.toml");
        ensure!(args.format == OutputFormat::Json);
        ensure!(!args.no_env);
        ensure!(args.route.is_none());
        Ok(())
    }

    #[rstest]
    #[case::summary(&["deck-check", "deck.toml", "--format", "summary"], OutputFormat::Summary)]
    #[case::json(&["deck-check", "deck.toml", "--format", "json"], OutputFormat::Json)]
    fn parses_format(#[case] argv: &[&str], #[case] expected: OutputFormat) -> Result<()> {
        let args = Args::try_parse_from(argv)?;
        ensure!(args.format == expected, "unexpected format {:?}", args.format);
        Ok(())
    }

    #[test]
    fn no_env_conflicts_with_prefix() {
        let parsed =
            Args::try_parse_from(["deck-check", "deck.toml", "--no-env", "--env-prefix", "X_"]);
        assert!(parsed.is_err());
    }
}
