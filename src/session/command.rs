//! The command vocabulary of the session.

use crate::model::{ModelId, RunState};
use crate::snapshot::RestoreWarning;

/// One named operation against catalog + selection.
///
/// Commands are plain data; the session's dispatcher interprets them and
/// owns the mode gate, the selection gate, and the snapshot push.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Build the registered blueprint for `type_key`, add it, select it.
    CreateFromType { type_key: String },
    /// Duplicate a model into its own bucket and select the duplicate.
    CloneModel { id: ModelId },
    /// Set the online/analytics flags on the selected model.
    ApplyFlags { online: bool, analytics: bool },
    /// Set the proxy flag and license key on the selected model.
    ApplyProxy { enabled: bool, license_key: String },
    /// Set the selected model's software run state.
    SetRunState { state: RunState },
    /// Capture the current state without mutating anything.
    SaveSnapshot,
    /// Step the history cursor back and restore that snapshot.
    Undo,
    /// Step the history cursor forward and restore that snapshot.
    Redo,
}

impl Command {
    /// Stable name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateFromType { .. } => "create_from_type",
            Self::CloneModel { .. } => "clone_model",
            Self::ApplyFlags { .. } => "apply_flags",
            Self::ApplyProxy { .. } => "apply_proxy",
            Self::SetRunState { .. } => "set_run_state",
            Self::SaveSnapshot => "save_snapshot",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }

    /// Whether the command changes catalog, selection, or history position.
    /// Undo and redo replace the live catalog, so they count.
    pub(crate) fn is_mutating(&self) -> bool {
        !matches!(self, Self::SaveSnapshot)
    }

    /// Whether the command operates on the selected model.
    pub(crate) fn requires_selection(&self) -> bool {
        matches!(
            self,
            Self::ApplyFlags { .. } | Self::ApplyProxy { .. } | Self::SetRunState { .. }
        )
    }
}

/// What a successfully dispatched command did.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandEffect {
    Created { id: ModelId },
    Cloned { id: ModelId },
    Updated,
    Snapshotted,
    /// `applied` is false at the history boundary (nothing to undo/redo);
    /// a warning means the restored selection had to be dropped.
    Restored {
        applied: bool,
        warning: Option<RestoreWarning>,
    },
}
