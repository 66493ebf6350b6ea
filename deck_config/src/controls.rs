//! Keyboard controls for moving through the deck.
//!
//! Controls are deck-global: slides cannot override them.

use serde::{Deserialize, Serialize};

/// Symbolic key codes understood by the host input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum KeyIdentifier {
    /// The right arrow key.
    ArrowRight,
    /// The left arrow key.
    ArrowLeft,
    /// The up arrow key.
    ArrowUp,
    /// The down arrow key.
    ArrowDown,
    /// The `.` key.
    Period,
    /// The space bar.
    Space,
    /// The return key.
    Enter,
    /// The escape key.
    Escape,
    /// The page up key.
    PageUp,
    /// The page down key.
    PageDown,
    /// The home key.
    Home,
    /// The end key.
    End,
}

/// Key bindings and the master switch for keyboard navigation.
///
/// # Examples
///
/// ```rust
/// use deck_config::{ControlsConfiguration, KeyIdentifier};
///
/// let controls = ControlsConfiguration::default();
/// assert!(controls.enabled());
/// assert_eq!(controls.next_key(), KeyIdentifier::ArrowRight);
/// assert_eq!(controls.open_drawer_key(), KeyIdentifier::Period);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfiguration {
    enabled: bool,
    next_key: KeyIdentifier,
    previous_key: KeyIdentifier,
    open_drawer_key: KeyIdentifier,
}

impl Default for ControlsConfiguration {
    fn default() -> Self {
        Self::new(
            true,
            KeyIdentifier::ArrowRight,
            KeyIdentifier::ArrowLeft,
            KeyIdentifier::Period,
        )
    }
}

impl ControlsConfiguration {
    /// Creates a configuration with explicit bindings.
    #[must_use]
    pub const fn new(
        enabled: bool,
        next_key: KeyIdentifier,
        previous_key: KeyIdentifier,
        open_drawer_key: KeyIdentifier,
    ) -> Self {
        Self {
            enabled,
            next_key,
            previous_key,
            open_drawer_key,
        }
    }

    /// Returns a copy with keyboard navigation switched on or off.
    #[must_use]
    pub const fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    /// Whether keyboard navigation is active.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Key that advances to the next step or slide.
    #[must_use]
    pub const fn next_key(&self) -> KeyIdentifier {
        self.next_key
    }

    /// Key that goes back one step or slide.
    #[must_use]
    pub const fn previous_key(&self) -> KeyIdentifier {
        self.previous_key
    }

    /// Key that toggles the navigation drawer.
    #[must_use]
    pub const fn open_drawer_key(&self) -> KeyIdentifier {
        self.open_drawer_key
    }
}
