//! Configure a Bike
//!
//! This example walks the full configuration flow for one piece of
//! equipment: build it from its blueprint, enable the online and analytics
//! layers, license the access-control proxy, and run the resulting chain.
//!
//! Run with: cargo run --example configure_bike

use trainset::capability::REQUIRED_LICENSE;
use trainset::display;
use trainset::session::Session;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Configure a Bike ===\n");

    let mut session = Session::new();
    session.create_from_type("bike").unwrap();
    session.apply_flags(true, true).unwrap();
    session.apply_proxy(true, REQUIRED_LICENSE).unwrap();

    let model = session.current_model().unwrap();
    println!("{}\n", display::model_summary(model));

    let outcome = session.run_operation().unwrap();
    println!("Operation report:\n{}\n", outcome.report);
    println!("Denied: {}", outcome.denied);

    println!("\n=== Example Complete ===");
}
