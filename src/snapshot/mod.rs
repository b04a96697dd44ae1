//! Point-in-time catalog copies and the linear undo/redo caretaker.
//!
//! A snapshot is an immutable deep value copy of catalog + selection. It
//! never shares mutable storage with live state or with other snapshots —
//! the invariant that makes undo/redo correct without copy-on-write
//! bookkeeping. Capability chains are never captured, only their inputs;
//! the session re-derives them after a restore.

use crate::catalog::{EquipmentCatalog, SelectionRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Immutable copy of the whole catalog plus the selection at capture time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    taken_at: DateTime<Utc>,
    catalog: EquipmentCatalog,
    current: Option<SelectionRef>,
}

impl Snapshot {
    /// Deep-copy the live catalog and selection. The capture holds values
    /// only, never references into live state.
    pub fn capture(catalog: &EquipmentCatalog, current: Option<&SelectionRef>) -> Self {
        Self {
            taken_at: Utc::now(),
            catalog: catalog.clone(),
            current: current.cloned(),
        }
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    pub fn current(&self) -> Option<&SelectionRef> {
        self.current.as_ref()
    }

    /// Rebuild live state from this snapshot.
    ///
    /// The returned catalog is a brand-new value sharing no storage with the
    /// snapshot. A stored selection that no longer resolves degrades to
    /// `None` with a warning instead of failing — the restore itself always
    /// succeeds.
    pub fn restore(&self) -> RestoreOutcome {
        let catalog = self.catalog.clone();
        let (current, warning) = match &self.current {
            Some(selection) if catalog.model_at(selection).is_some() => {
                (Some(selection.clone()), None)
            }
            Some(selection) => {
                warn!(
                    type_key = %selection.type_key,
                    index = selection.index,
                    "restored selection no longer resolves, dropping it"
                );
                (
                    None,
                    Some(RestoreWarning::SelectionOutOfRange {
                        type_key: selection.type_key.clone(),
                        index: selection.index,
                    }),
                )
            }
            None => (None, None),
        };

        RestoreOutcome {
            catalog,
            current,
            warning,
        }
    }
}

/// What a restore produced.
#[derive(Clone, Debug)]
pub struct RestoreOutcome {
    pub catalog: EquipmentCatalog,
    pub current: Option<SelectionRef>,
    pub warning: Option<RestoreWarning>,
}

/// Warning-level degradation during a restore; never fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreWarning {
    /// The stored selection points past the rebuilt catalog.
    SelectionOutOfRange { type_key: String, index: usize },
}

impl fmt::Display for RestoreWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectionOutOfRange { type_key, index } => write!(
                f,
                "stored selection ({type_key}, {index}) no longer resolves"
            ),
        }
    }
}

/// Linear history of snapshots with a single undo/redo cursor.
///
/// `entries[..=cursor]` is past and present; everything after the cursor is
/// the redo future. Pushing while the cursor sits behind the last entry
/// truncates that future first — new edits destroy the redo branch.
///
/// # Example
///
/// ```rust
/// use trainset::catalog::EquipmentCatalog;
/// use trainset::snapshot::{Snapshot, SnapshotStore};
///
/// let catalog = EquipmentCatalog::new(["bike".to_string()]);
/// let mut store = SnapshotStore::new();
///
/// store.push(Snapshot::capture(&catalog, None));
/// store.push(Snapshot::capture(&catalog, None));
///
/// assert!(store.can_undo());
/// assert!(store.undo().is_some());
/// assert!(store.can_redo());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SnapshotStore {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot, discarding any redo future beyond the cursor.
    pub fn push(&mut self, snapshot: Snapshot) {
        if let Some(cursor) = self.cursor {
            if cursor + 1 < self.entries.len() {
                debug!(
                    discarded = self.entries.len() - cursor - 1,
                    "truncating redo branch"
                );
                self.entries.truncate(cursor + 1);
            }
        }
        self.entries.push(snapshot);
        self.cursor = Some(self.entries.len() - 1);
        debug!(entries = self.entries.len(), "snapshot pushed");
    }

    /// Step the cursor back and return the snapshot it now points at.
    ///
    /// The first entry is the floor: `None` at the boundary, never an error.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.entries.get(cursor - 1)
            }
            _ => None,
        }
    }

    /// Step the cursor forward and return the snapshot it now points at.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                self.entries.get(cursor + 1)
            }
            _ => None,
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(cursor) => cursor + 1 < self.entries.len(),
            None => false,
        }
    }

    /// All entries plus the cursor position, for display.
    pub fn history(&self) -> (&[Snapshot], Option<usize>) {
        (&self.entries, self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{self, FactoryRegistry};
    use crate::model::ModelId;

    fn seeded_catalog() -> (EquipmentCatalog, ModelId) {
        let registry = FactoryRegistry::standard();
        let mut catalog = EquipmentCatalog::new(registry.keys().map(String::from));
        let bike = factory::exercise_bike().unwrap();
        let id = bike.id();
        catalog.add(bike).unwrap();
        (catalog, id)
    }

    #[test]
    fn empty_store_has_nothing_to_move_to() {
        let mut store = SnapshotStore::new();
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert!(store.undo().is_none());
        assert!(store.redo().is_none());
    }

    #[test]
    fn first_snapshot_is_the_undo_floor() {
        let (catalog, _) = seeded_catalog();
        let mut store = SnapshotStore::new();
        store.push(Snapshot::capture(&catalog, None));

        assert!(!store.can_undo());
        assert!(store.undo().is_none());
        let (_, cursor) = store.history();
        assert_eq!(cursor, Some(0));
    }

    #[test]
    fn undo_and_redo_walk_the_cursor() {
        let (catalog, _) = seeded_catalog();
        let mut store = SnapshotStore::new();
        store.push(Snapshot::capture(&catalog, None));
        store.push(Snapshot::capture(&catalog, None));
        store.push(Snapshot::capture(&catalog, None));

        assert!(store.undo().is_some());
        assert!(store.undo().is_some());
        assert!(store.undo().is_none());

        assert!(store.redo().is_some());
        assert!(store.redo().is_some());
        assert!(store.redo().is_none());
    }

    #[test]
    fn push_truncates_the_redo_branch() {
        let (catalog, _) = seeded_catalog();
        let mut store = SnapshotStore::new();
        store.push(Snapshot::capture(&catalog, None));
        store.push(Snapshot::capture(&catalog, None));
        store.push(Snapshot::capture(&catalog, None));

        store.undo();
        store.undo();
        store.push(Snapshot::capture(&catalog, None));

        assert_eq!(store.len(), 2);
        assert!(!store.can_redo());
        let (_, cursor) = store.history();
        assert_eq!(cursor, Some(1));
    }

    #[test]
    fn capture_is_isolated_from_later_mutation() {
        let (mut catalog, id) = seeded_catalog();
        let snapshot = Snapshot::capture(&catalog, None);

        let position = catalog.position_of(id).unwrap();
        catalog.model_at_mut(&position).unwrap().flags.use_online = true;

        let captured = snapshot.catalog().find_by_id(id).unwrap();
        assert!(!captured.flags.use_online);
    }

    #[test]
    fn restore_rebuilds_an_independent_catalog() {
        let (catalog, id) = seeded_catalog();
        let selection = catalog.position_of(id);
        let snapshot = Snapshot::capture(&catalog, selection.as_ref());

        let mut restored = snapshot.restore();
        assert!(restored.warning.is_none());
        assert_eq!(restored.current, selection);
        assert_eq!(&restored.catalog, snapshot.catalog());

        let position = restored.catalog.position_of(id).unwrap();
        restored.catalog.model_at_mut(&position).unwrap().flags.use_proxy = true;
        assert!(!snapshot.catalog().find_by_id(id).unwrap().flags.use_proxy);
    }

    #[test]
    fn restore_degrades_a_stale_selection_to_none() {
        let (catalog, _) = seeded_catalog();
        let stale = SelectionRef::new("bike", 7);
        let snapshot = Snapshot::capture(&catalog, Some(&stale));

        let restored = snapshot.restore();
        assert_eq!(restored.current, None);
        assert_eq!(
            restored.warning,
            Some(RestoreWarning::SelectionOutOfRange {
                type_key: "bike".to_string(),
                index: 7,
            })
        );
    }

    #[test]
    fn snapshot_roundtrip_serialization() {
        let (catalog, id) = seeded_catalog();
        let selection = catalog.position_of(id);
        let snapshot = Snapshot::capture(&catalog, selection.as_ref());

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back.catalog(), snapshot.catalog());
        assert_eq!(back.current(), snapshot.current());
    }
}
