//! Numeric tolerances and reference points shared by the algebra.

/// Tolerance for flat slopes and for "close enough" length comparisons.
pub const EPS: f64 = 0.001;

/// The unscaled elastic scaling. `deresolve` falls back to it when a length
/// does not pin down a single scaling.
pub const REFERENCE_SCALING: f64 = 1.0;

/// `add` logs a warning once a product grows past this many segments.
pub const SEGMENT_WARN_THRESHOLD: usize = 4096;
