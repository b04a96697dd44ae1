//! The edit/view mode gate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-state policy consulted before any mutating command runs.
///
/// Only the caller flips the mode via [`crate::session::Session::set_mode`];
/// no engine component changes it on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Mutating commands permitted.
    #[default]
    Edit,
    /// Read-only: mutating commands are rejected, navigation and
    /// capture-only commands still work.
    View,
}

impl SessionMode {
    /// Display name for UI and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edit => "EDIT",
            Self::View => "VIEW",
        }
    }

    pub fn allows_mutation(&self) -> bool {
        matches!(self, Self::Edit)
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
