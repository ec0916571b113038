//! Error types for the elastic length algebra.
//!
//! Most operations are total. The few that are not report through [`YError`],
//! which carries a diagnostic code so layout code can surface it with miette.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by fallible [`Y`](crate::Y) operations.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum YError {
    #[error("division by zero")]
    #[diagnostic(
        code(elastic_length::divide_by_zero),
        help("an elastic length can only be divided by a non-zero factor")
    )]
    DivideByZero,

    #[error("elastic scaling {value} is outside the domain [0, inf)")]
    #[diagnostic(code(elastic_length::out_of_domain))]
    OutOfDomain { value: f64 },

    #[error("non-finite value: {value}")]
    #[diagnostic(code(elastic_length::non_finite))]
    NonFinite { value: f64 },

    #[error("cannot flip the sign of a length made of {segments} envelope pieces")]
    #[diagnostic(
        code(elastic_length::not_affine),
        help("only affine lengths (a single constant + elastic term) can be negated or subtracted")
    )]
    NotAffine { segments: usize },
}

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(value: f64) -> Result<f64, YError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(YError::NonFinite { value })
    }
}
