//! The equipment model record and its identity.

use super::{FeatureFlags, RunState};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A spec table value: numbers, booleans, or strings all occur in practice.
pub type SpecValue = serde_json::Value;

/// Opaque, stable identity of one equipment model instance.
///
/// Two models are the same entity iff their ids match. Cloning a model
/// always mints a fresh id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(Uuid);

impl ModelId {
    pub(crate) fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One configured piece of equipment.
///
/// Everything here is a plain value; the capability chain implied by
/// `base_software_title` + `flags` is derived on demand and never stored.
/// Specs keep their insertion order (the builder's step order) for stable
/// display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquipmentModel {
    id: ModelId,
    /// Human-facing label, e.g. "Exercise Bike".
    pub display_name: String,
    /// Catalog bucket this model belongs to, e.g. "bike".
    pub type_key: String,
    /// Ordered spec table.
    pub specs: Vec<(String, SpecValue)>,
    /// Supported workout functions.
    pub functions: Vec<String>,
    /// Title of the base software the capability chain is built from.
    pub base_software_title: String,
    /// Configuration flags; all false on a freshly built model.
    pub flags: FeatureFlags,
    /// Onboard software run state.
    pub run_state: RunState,
    /// Step log left behind by the builder that assembled this model.
    pub build_log: Vec<String>,
}

impl EquipmentModel {
    pub(crate) fn new(display_name: String, type_key: String, base_software_title: String) -> Self {
        Self {
            id: ModelId::mint(),
            display_name,
            type_key,
            specs: Vec::new(),
            functions: Vec::new(),
            base_software_title,
            flags: FeatureFlags::default(),
            run_state: RunState::Setup,
            build_log: Vec::new(),
        }
    }

    /// Stable identity of this instance.
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Value of one spec entry, if present.
    pub fn spec(&self, key: &str) -> Option<&SpecValue> {
        self.specs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Deep copy with a fresh identity.
    ///
    /// Specs, functions, flags, run state, and the build log are all copied;
    /// only the id differs, so the duplicate is a distinct entity that shares
    /// no mutable storage with the original.
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            id: ModelId::mint(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> EquipmentModel {
        let mut model = EquipmentModel::new(
            "Exercise Bike".to_string(),
            "bike".to_string(),
            "Bike Software".to_string(),
        );
        model.specs.push(("max_resistance".to_string(), json!(20)));
        model.functions.push("Intervals".to_string());
        model
    }

    #[test]
    fn new_model_starts_unconfigured() {
        let model = sample();
        assert_eq!(model.flags, FeatureFlags::default());
        assert_eq!(model.run_state, RunState::Setup);
    }

    #[test]
    fn spec_lookup_finds_entries() {
        let model = sample();
        assert_eq!(model.spec("max_resistance"), Some(&json!(20)));
        assert_eq!(model.spec("missing"), None);
    }

    #[test]
    fn duplicate_mints_a_fresh_id() {
        let model = sample();
        let copy = model.duplicate();

        assert_ne!(model.id(), copy.id());
        assert_eq!(model.specs, copy.specs);
        assert_eq!(model.functions, copy.functions);
        assert_eq!(model.flags, copy.flags);
    }

    #[test]
    fn duplicate_shares_no_storage() {
        let model = sample();
        let mut copy = model.duplicate();

        copy.flags.use_online = true;
        copy.specs.push(("extra".to_string(), json!(true)));

        assert!(!model.flags.use_online);
        assert_eq!(model.specs.len(), 1);
    }

    #[test]
    fn model_roundtrip_serialization() {
        let model = sample();
        let json = serde_json::to_string(&model).unwrap();
        let back: EquipmentModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, back);
    }
}
