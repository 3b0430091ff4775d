//! Traced Pipeline Example
//!
//! This example watches values flow through a composed pipeline using the
//! `traced` pass-through transform, which emits a `tracing` debug event per
//! value.
//!
//! Run with: cargo run --example traced_pipeline --features tracing

use millrace::transform::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("starting traced pipeline");

    let normalize = pipe(
        pipe(traced("raw"), |s: &String| s.trim().to_lowercase()),
        traced("normalized"),
    );

    let inputs = vec!["  Head Gate  ".to_string(), "SPILLWAY".to_string()];
    let cleaned: Vec<String> = inputs.iter().map(|s| normalize.apply(s)).collect();

    tracing::info!(?cleaned, "pipeline finished");
}
