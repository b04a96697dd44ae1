//! Property-based tests for the session engine.
//!
//! These tests use proptest to verify the history and isolation invariants
//! hold across many randomly generated command sequences.

use proptest::prelude::*;
use trainset::capability::{self, REQUIRED_LICENSE};
use trainset::model::{FeatureFlags, RunState};
use trainset::session::Session;
use trainset::snapshot::Snapshot;

/// One always-valid mutating command against a session with a selection.
#[derive(Clone, Debug)]
enum EngineOp {
    Create(&'static str),
    CloneCurrent,
    Flags(bool, bool),
    Proxy(bool, &'static str),
    State(RunState),
}

fn apply(session: &mut Session, op: &EngineOp) {
    match op {
        EngineOp::Create(key) => {
            session.create_from_type(key).unwrap();
        }
        EngineOp::CloneCurrent => {
            session.clone_current().unwrap();
        }
        EngineOp::Flags(online, analytics) => {
            session.apply_flags(*online, *analytics).unwrap();
        }
        EngineOp::Proxy(enabled, key) => {
            session.apply_proxy(*enabled, key).unwrap();
        }
        EngineOp::State(state) => {
            session.set_run_state(*state).unwrap();
        }
    }
}

prop_compose! {
    fn arbitrary_op()(variant in 0..5u8, a in any::<bool>(), b in any::<bool>()) -> EngineOp {
        match variant {
            0 => EngineOp::Create(if a { "treadmill" } else { "rowing" }),
            1 => EngineOp::CloneCurrent,
            2 => EngineOp::Flags(a, b),
            3 => EngineOp::Proxy(a, if b { REQUIRED_LICENSE } else { "WRONG" }),
            _ => EngineOp::State(if a { RunState::Idle } else { RunState::Training }),
        }
    }
}

prop_compose! {
    fn arbitrary_flags()(
        use_online in any::<bool>(),
        use_analytics in any::<bool>(),
        use_proxy in any::<bool>(),
        valid_key in any::<bool>(),
    ) -> FeatureFlags {
        FeatureFlags {
            use_online,
            use_analytics,
            use_proxy,
            license_key: if valid_key { REQUIRED_LICENSE.to_string() } else { String::new() },
        }
    }
}

/// Seed a session with one bike so every op has a selection to work on.
fn seeded_session() -> Session {
    let mut session = Session::new();
    session.create_from_type("bike").unwrap();
    session
}

proptest! {
    #[test]
    fn undo_then_redo_round_trips(ops in prop::collection::vec(arbitrary_op(), 1..8)) {
        let mut session = seeded_session();
        let baseline = session.catalog().clone();

        for op in &ops {
            apply(&mut session, op);
        }
        let configured = session.catalog().clone();

        for _ in 0..ops.len() {
            prop_assert!(session.undo().unwrap());
        }
        prop_assert_eq!(session.catalog(), &baseline);

        for _ in 0..ops.len() {
            prop_assert!(session.redo().unwrap());
        }
        prop_assert_eq!(session.catalog(), &configured);
    }

    #[test]
    fn new_edits_make_the_future_unreachable(
        ops in prop::collection::vec(arbitrary_op(), 2..6),
        undo_count in 1..6usize,
    ) {
        let mut session = seeded_session();
        for op in &ops {
            apply(&mut session, op);
        }
        let undos = undo_count.min(ops.len());
        for _ in 0..undos {
            prop_assert!(session.undo().unwrap());
        }

        apply(&mut session, &EngineOp::Flags(true, true));

        prop_assert!(!session.redo().unwrap());
        let (entries, cursor) = session.history();
        prop_assert_eq!(entries.len(), 1 + ops.len() - undos + 1);
        prop_assert_eq!(cursor, Some(entries.len() - 1));
    }

    #[test]
    fn captured_snapshots_are_isolated_from_live_mutation(flags in arbitrary_flags()) {
        let mut session = seeded_session();
        let snapshot = Snapshot::capture(session.catalog(), session.selection());

        session.apply_flags(flags.use_online, flags.use_analytics).unwrap();
        session.apply_proxy(flags.use_proxy, &flags.license_key).unwrap();

        let id = session.current_model().unwrap().id();
        let captured = snapshot.catalog().find_by_id(id).unwrap();
        prop_assert_eq!(&captured.flags, &FeatureFlags::default());
    }

    #[test]
    fn clones_never_share_flag_storage(flags in arbitrary_flags()) {
        let mut session = seeded_session();
        let source = session.current_model().unwrap().id();
        let copy = session.clone_current().unwrap();

        // the clone is selected, so the flags land on it
        session.apply_flags(flags.use_online, flags.use_analytics).unwrap();
        session.apply_proxy(flags.use_proxy, &flags.license_key).unwrap();

        let source_flags = &session.catalog().find_by_id(source).unwrap().flags;
        let copy_flags = &session.catalog().find_by_id(copy).unwrap().flags;
        prop_assert_eq!(source_flags, &FeatureFlags::default());
        prop_assert_eq!(copy_flags, &flags);
    }

    #[test]
    fn chain_names_are_deterministic_in_their_inputs(flags in arbitrary_flags()) {
        let mut expected = "Bike Software".to_string();
        if flags.use_online {
            expected.push_str(" + Online");
        }
        if flags.use_analytics {
            expected.push_str(" + Analytics");
        }
        if flags.use_proxy {
            expected.push_str(" (via Proxy)");
        }

        let derived = capability::chain_name("Bike Software", &flags);
        prop_assert_eq!(&derived, &expected);

        let built = capability::build("Bike Software", &flags).name();
        prop_assert_eq!(built, expected);
    }

    #[test]
    fn catalog_roundtrips_through_serialization(ops in prop::collection::vec(arbitrary_op(), 0..5)) {
        let mut session = seeded_session();
        for op in &ops {
            apply(&mut session, op);
        }

        let json = serde_json::to_string(session.catalog()).unwrap();
        let back: trainset::catalog::EquipmentCatalog = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(session.catalog(), &back);
    }
}
