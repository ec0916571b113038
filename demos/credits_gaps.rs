//! Lays out a tiny credits block and prints its gaps for a few scalings.
//!
//! Run with: RUST_LOG=debug cargo run --example credits_gaps --features tracing

use elastic_length::{Y, YError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), YError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Three lines of text, 24 tall each, with elastic line gaps.
    let line_gap = Y::elastic(6.0);
    let lines: Y = (0..3).map(|_| Y::constant(24.0) + line_gap.clone()).sum();
    let body = lines.checked_sub(&line_gap)?;

    // The head gap must fit a 40-tall logo, and grow at least like 30s.
    let head_gap = Y::constant(40.0).max(&Y::elastic(30.0));
    // Half as stretchy as the line gaps, but never below 12.
    let tail_gap = Y::constant(12.0) + line_gap.scale_elastic(0.5);

    let block = (head_gap.clone() + body + tail_gap.clone()).simplify();
    println!("block = {block}");

    for s in [0.0, 0.5, 1.0, 2.0] {
        println!(
            "s = {s:>3}: head {:>6.2}  tail {:>6.2}  block {:>7.2}",
            head_gap.resolve(s)?,
            tail_gap.resolve(s)?,
            block.resolve(s)?
        );
    }

    // A user drags the block to 150 tall; which scaling does that mean?
    let dragged = 150.0;
    let s = block.deresolve(dragged);
    println!("dragged to {dragged}: s = {s:.3} (resolves to {:.2})", block.resolve(s)?);

    // Halving the whole block is fine; dividing by zero is a caller error.
    println!("half block at s = 1: {:.2}", block.divide(2.0)?.resolve_reference());
    if let Err(e) = block.divide(0.0) {
        println!("divide(0): {e}");
    }
    Ok(())
}
