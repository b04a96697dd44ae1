//! Equipment data model.
//!
//! Models are plain values: identity, display data, configuration flags,
//! and the run state. The capability chain a model's flags imply is derived
//! elsewhere (see [`crate::capability`]) and never stored on the model, so
//! snapshots only ever carry reconstructible inputs.

mod equipment;
mod flags;
mod run_state;

pub use equipment::{EquipmentModel, ModelId, SpecValue};
pub use flags::FeatureFlags;
pub use run_state::RunState;
