//! Software run state carried by each equipment model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Run state of a model's onboard software.
///
/// Freshly built models start in [`RunState::Setup`]. The state is part of
/// snapshot value-equality: undoing past a state change restores the old one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Configuration may still change.
    #[default]
    Setup,
    /// Ready to start a workout.
    Idle,
    /// A workout is running.
    Training,
    /// Inaccessible, typically for lack of a license.
    Locked,
}

impl RunState {
    /// Display name for UI and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Setup => "SETUP",
            Self::Idle => "IDLE",
            Self::Training => "TRAINING",
            Self::Locked => "LOCKED",
        }
    }

    /// Whether the software refuses to operate in this state.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matches_variant() {
        assert_eq!(RunState::Setup.name(), "SETUP");
        assert_eq!(RunState::Idle.name(), "IDLE");
        assert_eq!(RunState::Training.name(), "TRAINING");
        assert_eq!(RunState::Locked.name(), "LOCKED");
    }

    #[test]
    fn default_is_setup() {
        assert_eq!(RunState::default(), RunState::Setup);
    }

    #[test]
    fn only_locked_is_locked() {
        assert!(RunState::Locked.is_locked());
        assert!(!RunState::Setup.is_locked());
        assert!(!RunState::Idle.is_locked());
        assert!(!RunState::Training.is_locked());
    }
}
