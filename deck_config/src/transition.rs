//! Transition effects played when advancing between slides.
//!
//! This layer never interprets a transition; it only stores and hands it on.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Edge a sliding transition enters from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Enters from the left edge.
    Left,
    /// Enters from the right edge.
    #[default]
    Right,
    /// Enters from the top edge.
    Up,
    /// Enters from the bottom edge.
    Down,
}

/// Visual effect used when moving to a slide.
///
/// # Examples
///
/// ```rust
/// use deck_config::TransitionSpec;
/// use std::time::Duration;
///
/// let fade = TransitionSpec::Fade { duration_ms: 250 };
/// assert_eq!(fade.kind(), "fade");
/// assert_eq!(fade.duration(), Some(Duration::from_millis(250)));
/// assert_eq!(TransitionSpec::default().duration(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum TransitionSpec {
    /// Cut straight to the next slide.
    #[default]
    None,
    /// Cross-fade between slides.
    Fade {
        /// Length of the effect in milliseconds.
        duration_ms: u32,
    },
    /// Push the next slide in from one edge.
    SlideIn {
        /// Edge the incoming slide enters from.
        #[serde(default)]
        direction: SlideDirection,
        /// Length of the effect in milliseconds.
        duration_ms: u32,
    },
    /// Grow the next slide from the centre.
    Scale {
        /// Length of the effect in milliseconds.
        duration_ms: u32,
    },
}

impl TransitionSpec {
    /// Stable, lowercase name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fade { .. } => "fade",
            Self::SlideIn { .. } => "slide_in",
            Self::Scale { .. } => "scale",
        }
    }

    /// How long the effect runs, or `None` for an instant cut.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match *self {
            Self::None => None,
            Self::Fade { duration_ms }
            | Self::SlideIn { duration_ms, .. }
            | Self::Scale { duration_ms } => Some(Duration::from_millis(u64::from(duration_ms))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SlideDirection, TransitionSpec};
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::none(json!({ "kind": "none" }), TransitionSpec::None)]
    #[case::fade(json!({ "kind": "fade", "duration_ms": 300 }), TransitionSpec::Fade { duration_ms: 300 })]
    #[case::slide_in_default_direction(
        json!({ "kind": "slide_in", "duration_ms": 200 }),
        TransitionSpec::SlideIn { direction: SlideDirection::Right, duration_ms: 200 }
    )]
    #[case::scale(json!({ "kind": "scale", "duration_ms": 150 }), TransitionSpec::Scale { duration_ms: 150 })]
    fn deserialises_tagged_transitions(
        #[case] input: serde_json::Value,
        #[case] expected: TransitionSpec,
    ) -> Result<()> {
        let transition: TransitionSpec = serde_json::from_value(input)?;
        ensure!(transition == expected, "unexpected transition {transition:?}");
        Ok(())
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let parsed = serde_json::from_value::<TransitionSpec>(json!({ "kind": "spin" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn default_is_an_instant_cut() {
        let transition = TransitionSpec::default();
        assert_eq!(transition, TransitionSpec::None);
        assert_eq!(transition.kind(), "none");
        assert!(transition.duration().is_none());
    }
}
