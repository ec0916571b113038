//! `debug!` and `warn!` for the algebra's few interesting events.
//!
//! Emitted events:
//! - `warn!` from [`Y::plus`](crate::Y::plus) when a sum's segment count passes
//!   [`SEGMENT_WARN_THRESHOLD`](crate::defaults::SEGMENT_WARN_THRESHOLD)
//!   (fields `lhs`, `rhs`, `total`).
//! - `debug!` from [`Y::simplify`](crate::Y::simplify) with the segment counts
//!   before and after pruning.
//! - `debug!` from [`Y::deresolve`](crate::Y::deresolve) naming the branch
//!   taken: length ignores scaling, at or below minimum, exact, best match.
//!
//! They forward to `tracing` when the `tracing` feature is on and expand to
//! nothing otherwise.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
