//! Catalog error types.

use crate::model::ModelId;
use thiserror::Error;

/// Errors that can occur when mutating the catalog.
///
/// Every failing operation leaves the catalog unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown equipment type key '{key}'. Register it before adding models")]
    UnknownTypeKey { key: String },

    #[error("Equipment type key must not be empty")]
    EmptyTypeKey,

    #[error("No model with id {id} exists in the catalog")]
    ModelNotFound { id: ModelId },
}
