//! Trainset: an in-memory session engine for fitness equipment catalogs.
//!
//! The engine manages a catalog of configured equipment models, derives a
//! "capability chain" for each model from its feature flags, and keeps a
//! linear, branch-truncating undo/redo history over the whole catalog.
//! Everything is single-session, in-memory, and synchronous; the UI layer
//! is an external caller working through [`session::Session`].
//!
//! # Core Concepts
//!
//! - **Catalog**: type-keyed, ordered buckets of [`model::EquipmentModel`]
//! - **Capability chain**: derived software behavior rebuilt from a model's
//!   flags, never stored
//! - **Snapshots**: immutable deep copies of catalog + selection, walked by
//!   a single undo/redo cursor
//! - **Commands**: every mutation is a named, transactional, mode-gated
//!   operation
//!
//! # Example
//!
//! ```rust
//! use trainset::capability::REQUIRED_LICENSE;
//! use trainset::session::Session;
//!
//! let mut session = Session::new();
//!
//! session.create_from_type("bike").unwrap();
//! session.apply_flags(true, true).unwrap();
//! session.apply_proxy(true, REQUIRED_LICENSE).unwrap();
//!
//! let outcome = session.run_operation().unwrap();
//! assert!(!outcome.denied);
//!
//! // walk the whole configuration back
//! assert!(session.undo().unwrap());
//! assert!(session.undo().unwrap());
//! let model = session.current_model().unwrap();
//! assert!(!model.flags.use_online);
//! ```

pub mod capability;
pub mod catalog;
pub mod display;
pub mod factory;
pub mod model;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use capability::{Capability, OperationOutcome};
pub use catalog::{CatalogError, EquipmentCatalog, SelectionRef};
pub use display::CatalogNode;
pub use factory::{BuildError, EquipmentBuilder, FactoryRegistry};
pub use model::{EquipmentModel, FeatureFlags, ModelId, RunState};
pub use session::{Command, CommandEffect, EngineError, Session, SessionMode};
pub use snapshot::{RestoreWarning, Snapshot, SnapshotStore};
