//! The equipment catalog: type-keyed, ordered buckets of models.
//!
//! The catalog owns plain model values and nothing derived: capability
//! chains are rebuilt elsewhere from each model's stored inputs. Keys
//! iterate lexicographically for deterministic display; models keep their
//! insertion order within a bucket.

mod error;

pub use error::CatalogError;

use crate::model::{EquipmentModel, ModelId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Position of one model inside the catalog: bucket key + index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRef {
    pub type_key: String,
    pub index: usize,
}

impl SelectionRef {
    pub fn new(type_key: impl Into<String>, index: usize) -> Self {
        Self {
            type_key: type_key.into(),
            index,
        }
    }
}

/// Catalog of configured equipment, bucketed by type key.
///
/// A model lives in exactly one bucket (its own `type_key`); the set of
/// acceptable keys is fixed at construction from the factory registry.
///
/// # Example
///
/// ```rust
/// use trainset::catalog::EquipmentCatalog;
/// use trainset::factory;
///
/// let mut catalog = EquipmentCatalog::new(["bike".to_string()]);
/// let bike = factory::exercise_bike().unwrap();
/// let id = bike.id();
/// catalog.add(bike).unwrap();
///
/// assert!(catalog.find_by_id(id).is_some());
/// assert_eq!(catalog.models_of("bike").len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    registered: BTreeSet<String>,
    buckets: BTreeMap<String, Vec<EquipmentModel>>,
}

impl EquipmentCatalog {
    /// Create an empty catalog accepting the given type keys.
    pub fn new(registered: impl IntoIterator<Item = String>) -> Self {
        Self {
            registered: registered.into_iter().collect(),
            buckets: BTreeMap::new(),
        }
    }

    /// Append a model to its type bucket, creating the bucket if absent.
    ///
    /// Idempotent per identity: adding a model whose id is already present
    /// in that bucket is a no-op. Unknown or empty type keys are rejected
    /// and leave the catalog unchanged.
    pub fn add(&mut self, model: EquipmentModel) -> Result<(), CatalogError> {
        if model.type_key.is_empty() {
            return Err(CatalogError::EmptyTypeKey);
        }
        if !self.registered.contains(&model.type_key) {
            return Err(CatalogError::UnknownTypeKey {
                key: model.type_key.clone(),
            });
        }

        let bucket = self.buckets.entry(model.type_key.clone()).or_default();
        if bucket.iter().any(|existing| existing.id() == model.id()) {
            return Ok(());
        }
        bucket.push(model);
        Ok(())
    }

    /// Duplicate a model into its own bucket under a fresh identity.
    ///
    /// Specs, functions, flags, run state, and build log are deep-copied;
    /// `type_key` and `display_name` are kept (the caller may relabel).
    pub fn clone_model(&mut self, id: ModelId) -> Result<ModelId, CatalogError> {
        let source = self
            .find_by_id(id)
            .ok_or(CatalogError::ModelNotFound { id })?;
        let duplicate = source.duplicate();
        let new_id = duplicate.id();
        self.add(duplicate)?;
        Ok(new_id)
    }

    /// Type keys with at least one model, lexicographic.
    pub fn type_keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Type keys this catalog accepts, lexicographic.
    pub fn registered_keys(&self) -> impl Iterator<Item = &str> {
        self.registered.iter().map(String::as_str)
    }

    /// Read-only view of one bucket; empty slice for absent buckets.
    pub fn models_of(&self, type_key: &str) -> &[EquipmentModel] {
        self.buckets
            .get(type_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look a model up by identity across all buckets.
    pub fn find_by_id(&self, id: ModelId) -> Option<&EquipmentModel> {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.iter())
            .find(|model| model.id() == id)
    }

    /// Bucket position of a model, if it is in the catalog.
    pub fn position_of(&self, id: ModelId) -> Option<SelectionRef> {
        self.buckets.iter().find_map(|(key, bucket)| {
            bucket
                .iter()
                .position(|model| model.id() == id)
                .map(|index| SelectionRef::new(key.clone(), index))
        })
    }

    /// Resolve a position back to its model.
    pub fn model_at(&self, selection: &SelectionRef) -> Option<&EquipmentModel> {
        self.buckets
            .get(&selection.type_key)
            .and_then(|bucket| bucket.get(selection.index))
    }

    pub(crate) fn model_at_mut(&mut self, selection: &SelectionRef) -> Option<&mut EquipmentModel> {
        self.buckets
            .get_mut(&selection.type_key)
            .and_then(|bucket| bucket.get_mut(selection.index))
    }

    /// Total model count across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
