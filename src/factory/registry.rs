//! Registry mapping type keys to blueprints.

use super::blueprints;
use super::error::BuildError;
use crate::model::EquipmentModel;
use std::collections::BTreeMap;

/// A blueprint produces one freshly identified, unconfigured model.
pub type Blueprint = fn() -> Result<EquipmentModel, BuildError>;

/// Key → blueprint lookup. Callers work with keys and never construct
/// models directly; the registry's keys also seed the catalog's accepted
/// type-key set.
#[derive(Clone, Debug, Default)]
pub struct FactoryRegistry {
    blueprints: BTreeMap<String, Blueprint>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the three stock configurations.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("bike", blueprints::exercise_bike);
        registry.register("treadmill", blueprints::treadmill);
        registry.register("rowing", blueprints::rowing_machine);
        registry
    }

    pub fn register(&mut self, key: impl Into<String>, blueprint: Blueprint) {
        self.blueprints.insert(key.into(), blueprint);
    }

    /// Registered keys, lexicographic for stable display.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.blueprints.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<Blueprint> {
        self.blueprints.get(key).copied()
    }
}
