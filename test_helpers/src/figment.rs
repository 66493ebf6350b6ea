//! Shared helpers for working with `figment::Jail` in tests.
//!
//! Manifest loading reads files relative to the working directory and
//! `DECK_`-prefixed environment variables; the jail isolates both. These
//! helpers run a closure inside a jail and surface its return value as an
//! `anyhow::Result`.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down automatically once the closure completes, even when
/// the closure returns an error.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
///
/// # Examples
///
/// ```
/// use test_helpers::figment::with_jail;
///
/// let contents = with_jail(|j| {
///     j.create_file("deck.toml", "[[slides]]\nroute = \"/intro\"\n")?;
///     Ok(std::fs::read_to_string("deck.toml").map_err(|e| e.to_string())?)
/// })?;
/// assert!(contents.contains("/intro"));
/// # Ok::<_, anyhow::Error>(())
/// ```
#[expect(
    clippy::result_large_err,
    reason = "figment::Jail fixes the closure's error type to figment::Error"
)]
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
///
/// Lets jailed closures propagate library errors with `?`-style mapping.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers often own the error and passing by value avoids extra clones"
)]
#[must_use]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
