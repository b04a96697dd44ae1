//! Build errors for the equipment builder.

use thiserror::Error;

/// Errors that can occur when assembling an equipment model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Type key not specified. Call .type_key(key) before .build()")]
    MissingTypeKey,

    #[error("Display name not specified. Call .display_name(name) before .build()")]
    MissingDisplayName,
}
