//! The session: sole owner of catalog, selection, history, and mode.
//!
//! All mutation funnels through [`Session::dispatch`], which enforces the
//! mode gate, the selection gate, and all-or-nothing command application:
//! a failing command rolls the live state back and pushes nothing to
//! history. Successful mutating commands always leave one new snapshot
//! behind.

mod command;
mod error;
mod mode;

pub use command::{Command, CommandEffect};
pub use error::EngineError;
pub use mode::SessionMode;

use crate::capability::{self, Capability, OperationOutcome};
use crate::catalog::{CatalogError, EquipmentCatalog, SelectionRef};
use crate::display::{self, CatalogNode};
use crate::factory::FactoryRegistry;
use crate::model::{EquipmentModel, ModelId, RunState};
use crate::snapshot::{Snapshot, SnapshotStore};
use std::collections::HashMap;
use tracing::debug;

/// One user-facing working session.
///
/// The session owns every piece of mutable state and is the sole writer:
/// single-threaded, synchronous, no ambient globals. Capability chains are
/// cached per model id and invalidated whenever their inputs change, so a
/// chain instance (with its lazy cache and action log) survives exactly as
/// long as its flags do.
///
/// # Example
///
/// ```rust
/// use trainset::session::Session;
///
/// let mut session = Session::new();
/// session.create_from_type("bike").unwrap();
/// session.apply_flags(true, false).unwrap();
///
/// let model = session.current_model().unwrap();
/// assert!(model.flags.use_online);
///
/// session.undo().unwrap();
/// let model = session.current_model().unwrap();
/// assert!(!model.flags.use_online);
/// ```
pub struct Session {
    registry: FactoryRegistry,
    catalog: EquipmentCatalog,
    selection: Option<SelectionRef>,
    store: SnapshotStore,
    mode: SessionMode,
    chains: HashMap<ModelId, Box<dyn Capability>>,
}

impl Session {
    /// Session over the standard blueprint registry.
    pub fn new() -> Self {
        Self::with_registry(FactoryRegistry::standard())
    }

    /// Session over a custom registry; the registry's keys become the
    /// catalog's accepted type keys.
    pub fn with_registry(registry: FactoryRegistry) -> Self {
        let catalog = EquipmentCatalog::new(registry.keys().map(String::from));
        Self {
            registry,
            catalog,
            selection: None,
            store: SnapshotStore::new(),
            mode: SessionMode::Edit,
            chains: HashMap::new(),
        }
    }

    /// Execute one command under the session's gates.
    ///
    /// Mutating commands in view mode fail with `ModeViolation`; model-scoped
    /// commands without a selection fail with `NoCurrentModel`. A command
    /// that fails mid-application leaves no trace: live state is rolled back
    /// and history is untouched.
    pub fn dispatch(&mut self, command: Command) -> Result<CommandEffect, EngineError> {
        debug!(command = command.name(), mode = %self.mode, "dispatching");

        if command.is_mutating() && !self.mode.allows_mutation() {
            return Err(EngineError::ModeViolation {
                command: command.name(),
            });
        }
        if command.requires_selection() && self.current_model().is_none() {
            return Err(EngineError::NoCurrentModel);
        }

        match command {
            Command::SaveSnapshot => {
                self.save_snapshot();
                Ok(CommandEffect::Snapshotted)
            }
            Command::Undo => Ok(self.step_history(false)),
            Command::Redo => Ok(self.step_history(true)),
            Command::CreateFromType { type_key } => self.commit(move |session| {
                let blueprint =
                    session
                        .registry
                        .get(&type_key)
                        .ok_or(CatalogError::UnknownTypeKey {
                            key: type_key.clone(),
                        })?;
                let model = blueprint()?;
                let id = model.id();
                session.catalog.add(model)?;
                session.selection = session.catalog.position_of(id);
                Ok(CommandEffect::Created { id })
            }),
            Command::CloneModel { id } => self.commit(move |session| {
                let clone_id = session.catalog.clone_model(id)?;
                session.selection = session.catalog.position_of(clone_id);
                Ok(CommandEffect::Cloned { id: clone_id })
            }),
            Command::ApplyFlags { online, analytics } => self.commit(move |session| {
                let model = session.selected_model_mut()?;
                model.flags.use_online = online;
                model.flags.use_analytics = analytics;
                let id = model.id();
                session.invalidate_chain(id);
                Ok(CommandEffect::Updated)
            }),
            Command::ApplyProxy {
                enabled,
                license_key,
            } => self.commit(move |session| {
                let model = session.selected_model_mut()?;
                model.flags.use_proxy = enabled;
                model.flags.license_key = license_key;
                let id = model.id();
                session.invalidate_chain(id);
                Ok(CommandEffect::Updated)
            }),
            Command::SetRunState { state } => self.commit(move |session| {
                let model = session.selected_model_mut()?;
                model.run_state = state;
                Ok(CommandEffect::Updated)
            }),
        }
    }

    // ---- command surface ---------------------------------------------------

    /// Build the blueprint registered for `type_key`, add and select it.
    pub fn create_from_type(&mut self, type_key: &str) -> Result<ModelId, EngineError> {
        match self.dispatch(Command::CreateFromType {
            type_key: type_key.to_string(),
        })? {
            CommandEffect::Created { id } => Ok(id),
            _ => unreachable!("CreateFromType dispatches to Created"),
        }
    }

    /// Duplicate the given model under a fresh identity and select the copy.
    pub fn clone_model(&mut self, id: ModelId) -> Result<ModelId, EngineError> {
        match self.dispatch(Command::CloneModel { id })? {
            CommandEffect::Cloned { id } => Ok(id),
            _ => unreachable!("CloneModel dispatches to Cloned"),
        }
    }

    /// Duplicate the selected model.
    pub fn clone_current(&mut self) -> Result<ModelId, EngineError> {
        let id = self
            .current_model()
            .map(EquipmentModel::id)
            .ok_or(EngineError::NoCurrentModel)?;
        self.clone_model(id)
    }

    /// Point the selection at a bucket position. Navigation only: allowed in
    /// view mode, never pushes a snapshot.
    pub fn select_model(&mut self, type_key: &str, index: usize) -> Result<(), EngineError> {
        let selection = SelectionRef::new(type_key, index);
        if self.catalog.model_at(&selection).is_none() {
            return Err(EngineError::SelectionOutOfRange {
                type_key: type_key.to_string(),
                index,
            });
        }
        self.selection = Some(selection);
        Ok(())
    }

    /// Set the online/analytics flags on the selected model.
    pub fn apply_flags(&mut self, online: bool, analytics: bool) -> Result<(), EngineError> {
        self.dispatch(Command::ApplyFlags { online, analytics })
            .map(|_| ())
    }

    /// Set the proxy flag and license key on the selected model.
    pub fn apply_proxy(&mut self, enabled: bool, license_key: &str) -> Result<(), EngineError> {
        self.dispatch(Command::ApplyProxy {
            enabled,
            license_key: license_key.to_string(),
        })
        .map(|_| ())
    }

    /// Set the selected model's software run state.
    pub fn set_run_state(&mut self, state: RunState) -> Result<(), EngineError> {
        self.dispatch(Command::SetRunState { state }).map(|_| ())
    }

    /// Run the selected model's capability chain.
    ///
    /// The chain is built on first use from the model's stored inputs and
    /// cached until a flag change or a restore invalidates it. Touches
    /// nothing but the chain itself, so view mode allows it; license denial
    /// comes back as a normal outcome with `denied` set.
    pub fn run_operation(&mut self) -> Result<OperationOutcome, EngineError> {
        let model = self.current_model().ok_or(EngineError::NoCurrentModel)?;
        let id = model.id();
        let title = model.base_software_title.clone();
        let flags = model.flags.clone();

        let chain = self
            .chains
            .entry(id)
            .or_insert_with(|| capability::build(&title, &flags));
        Ok(chain.operate())
    }

    /// Capture the current state without mutating anything.
    pub fn save_snapshot(&mut self) {
        self.store
            .push(Snapshot::capture(&self.catalog, self.selection.as_ref()));
    }

    /// Step back one snapshot. `Ok(false)` at the history boundary.
    pub fn undo(&mut self) -> Result<bool, EngineError> {
        match self.dispatch(Command::Undo)? {
            CommandEffect::Restored { applied, .. } => Ok(applied),
            _ => unreachable!("Undo dispatches to Restored"),
        }
    }

    /// Step forward one snapshot. `Ok(false)` at the history boundary.
    pub fn redo(&mut self) -> Result<bool, EngineError> {
        match self.dispatch(Command::Redo)? {
            CommandEffect::Restored { applied, .. } => Ok(applied),
            _ => unreachable!("Redo dispatches to Restored"),
        }
    }

    /// Flip the mode gate. Only the caller ever does this.
    pub fn set_mode(&mut self, mode: SessionMode) {
        debug!(mode = %mode, "mode changed");
        self.mode = mode;
    }

    // ---- read surface ------------------------------------------------------

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> Option<&SelectionRef> {
        self.selection.as_ref()
    }

    pub fn current_model(&self) -> Option<&EquipmentModel> {
        self.selection
            .as_ref()
            .and_then(|selection| self.catalog.model_at(selection))
    }

    /// Display tree of the whole catalog.
    pub fn catalog_tree(&self) -> Vec<CatalogNode> {
        display::catalog_tree(&self.catalog)
    }

    /// Snapshot entries plus cursor position, for display.
    pub fn history(&self) -> (&[Snapshot], Option<usize>) {
        self.store.history()
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    // ---- internals ---------------------------------------------------------

    /// Run one mutating command transactionally: pre-state is captured for
    /// rollback (never pushed), and only a successful application pushes the
    /// post-state snapshot.
    fn commit(
        &mut self,
        apply: impl FnOnce(&mut Self) -> Result<CommandEffect, EngineError>,
    ) -> Result<CommandEffect, EngineError> {
        let catalog_before = self.catalog.clone();
        let selection_before = self.selection.clone();

        match apply(self) {
            Ok(effect) => {
                self.save_snapshot();
                Ok(effect)
            }
            Err(error) => {
                self.catalog = catalog_before;
                self.selection = selection_before;
                debug!(%error, "command failed, state rolled back");
                Err(error)
            }
        }
    }

    fn step_history(&mut self, forward: bool) -> CommandEffect {
        let snapshot = if forward {
            self.store.redo().cloned()
        } else {
            self.store.undo().cloned()
        };

        let Some(snapshot) = snapshot else {
            return CommandEffect::Restored {
                applied: false,
                warning: None,
            };
        };

        let restored = snapshot.restore();
        self.catalog = restored.catalog;
        self.selection = restored.current;
        // every chain was derived from pre-restore inputs
        self.chains.clear();

        CommandEffect::Restored {
            applied: true,
            warning: restored.warning,
        }
    }

    fn selected_model_mut(&mut self) -> Result<&mut EquipmentModel, EngineError> {
        let selection = self.selection.clone().ok_or(EngineError::NoCurrentModel)?;
        self.catalog
            .model_at_mut(&selection)
            .ok_or(EngineError::NoCurrentModel)
    }

    fn invalidate_chain(&mut self, id: ModelId) {
        self.chains.remove(&id);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
