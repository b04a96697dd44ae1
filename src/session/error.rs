//! Session-level error type.

use crate::catalog::CatalogError;
use crate::factory::BuildError;
use thiserror::Error;

/// Errors surfaced by the session's command surface.
///
/// Module-local errors compose in via `#[from]`. License denial is *not*
/// here: the proxy turning a request away is a normal operation outcome,
/// not a failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("No model is currently selected. Create or select one first")]
    NoCurrentModel,

    #[error("Command '{command}' is not allowed in view mode")]
    ModeViolation { command: &'static str },

    #[error("No model at position {index} under type '{type_key}'")]
    SelectionOutOfRange { type_key: String, index: usize },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
