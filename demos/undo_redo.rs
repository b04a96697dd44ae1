//! Undo / Redo
//!
//! This example shows the snapshot history at work: every successful
//! mutating command leaves one snapshot behind, undo and redo walk the
//! cursor, and a fresh edit after an undo destroys the redo branch.
//!
//! Run with: cargo run --example undo_redo

use trainset::session::Session;

fn print_history(session: &Session) {
    let (entries, cursor) = session.history();
    println!(
        "history: {} snapshots, cursor at {:?}, can_undo={}, can_redo={}",
        entries.len(),
        cursor,
        session.can_undo(),
        session.can_redo()
    );
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Undo / Redo ===\n");

    let mut session = Session::new();
    session.create_from_type("treadmill").unwrap();
    session.apply_flags(true, false).unwrap();
    session.apply_flags(true, true).unwrap();
    print_history(&session);

    session.undo().unwrap();
    session.undo().unwrap();
    println!("\nafter two undos:");
    print_history(&session);
    let model = session.current_model().unwrap();
    println!("flags back to online={}", model.flags.use_online);

    // a fresh edit here makes the old future unreachable
    session.apply_flags(false, true).unwrap();
    println!("\nafter a new edit:");
    print_history(&session);
    println!("redo applied anything: {}", session.redo().unwrap());

    println!("\n=== Example Complete ===");
}
