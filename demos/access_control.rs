//! Access Control
//!
//! This example shows the proxy layer: a wrong license key is denied
//! without ever reaching the wrapped software, a valid key lazily loads
//! the protected module once, and the action log rides along on every
//! outcome.
//!
//! Run with: cargo run --example access_control

use trainset::capability::REQUIRED_LICENSE;
use trainset::session::Session;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Access Control ===\n");

    let mut session = Session::new();
    session.create_from_type("rowing").unwrap();
    session.apply_proxy(true, "LET-ME-IN").unwrap();

    let denied = session.run_operation().unwrap();
    println!("with a wrong key -> denied={}", denied.denied);
    println!("report: {}\n", denied.report);

    session.apply_proxy(true, REQUIRED_LICENSE).unwrap();
    let first = session.run_operation().unwrap();
    let second = session.run_operation().unwrap();
    println!("with the valid key -> denied={}", first.denied);

    println!("\naction log after two runs:");
    for entry in &second.diagnostics {
        println!("  {entry}");
    }

    println!("\n=== Example Complete ===");
}
