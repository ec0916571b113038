//! Elastic lengths for vertical layout.
//!
//! A [`Y`] is a length that is not yet a number: it is a function of one
//! document-wide elastic scaling `s >= 0`. Layout code builds gaps and block
//! heights as `Y` values, combines them with `+`, [`Y::max`], [`Y::scale`] and
//! [`Y::scale_elastic`], and only turns them into concrete lengths with
//! [`Y::resolve`] once the scaling for the whole document is known.
//! [`Y::deresolve`] goes the other way, e.g. when a user drags a size handle.
//!
//! ```
//! use elastic_length::Y;
//!
//! // At least 10 tall, growing 5 per unit of scaling, but never below 25s.
//! let gap = (Y::constant(10.0) + Y::elastic(5.0)).max(&Y::elastic(25.0));
//! assert_eq!(gap.resolve(0.0)?, 10.0);
//! assert_eq!(gap.resolve(1.0)?, 25.0);
//! assert_eq!(gap.deresolve(25.0), 1.0);
//! # Ok::<(), elastic_length::YError>(())
//! ```

pub mod defaults;
pub mod envelope;
pub mod errors;
mod eval;
mod log;
pub mod types;
mod y;

pub use errors::YError;
pub use types::Segment;
pub use y::Y;
