//! Text normalisation helpers for behavioural step placeholders.

/// Strips one layer of matching single or double quotes from a value.
///
/// Feature files quote routes and titles (`"/intro"`); step functions receive
/// the placeholder text verbatim.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}
