//! Model construction: fluent builder, stock blueprints, and the registry.
//!
//! The builder assembles one model step by step and leaves a step log on the
//! result; blueprints encode the stock configurations; the registry maps type
//! keys to blueprints and is the source of truth for which keys exist.

mod blueprints;
mod builder;
mod error;
mod registry;

pub use blueprints::{exercise_bike, rowing_machine, treadmill};
pub use builder::EquipmentBuilder;
pub use error::BuildError;
pub use registry::{Blueprint, FactoryRegistry};
