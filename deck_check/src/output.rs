//! Report writers for `deck-check`.

use std::io::Write;

use deck_config::{ResolvedSlideConfig, SlideSettings};

use crate::error::DeckCheckError;

/// Writes `slides` as a pretty-printed JSON array followed by a newline.
///
/// # Errors
///
/// Returns [`DeckCheckError`] when encoding or writing fails.
pub fn write_json(
    out: &mut impl Write,
    slides: &[ResolvedSlideConfig],
) -> Result<(), DeckCheckError> {
    serde_json::to_writer_pretty(&mut *out, slides)?;
    writeln!(out)?;
    Ok(())
}

/// Writes one summary line per slide.
///
/// # Errors
///
/// Returns [`DeckCheckError`] when writing fails.
pub fn write_summary(
    out: &mut impl Write,
    slides: &[ResolvedSlideConfig],
) -> Result<(), DeckCheckError> {
    for slide in slides {
        writeln!(out, "{}", summary_line(slide))?;
    }
    Ok(())
}

/// Formats `slide` as `route steps=N header=TITLE footer=on|off transition=KIND`.
///
/// A hidden header is shown as `-`.
#[must_use]
pub fn summary_line(slide: &ResolvedSlideConfig) -> String {
    let header = if slide.header().show_header() {
        slide.header().title()
    } else {
        "-"
    };
    let footer = if slide.footer().show_footer() { "on" } else { "off" };
    format!(
        "{} steps={} header={header} footer={footer} transition={}",
        slide.route(),
        slide.steps(),
        slide.transition().kind()
    )
}
