//! Forward and inverse evaluation of elastic lengths.

use crate::defaults::{EPS, REFERENCE_SCALING};
use crate::errors::YError;
use crate::log::debug;
use crate::y::Y;

impl Y {
    /// The concrete length at elastic scaling `s`.
    ///
    /// Negative (and NaN) scalings are rejected rather than clamped: the
    /// algebra is only defined on `[0, inf)`.
    pub fn resolve(&self, s: f64) -> Result<f64, YError> {
        if s.is_nan() || s < 0.0 {
            return Err(YError::OutOfDomain { value: s });
        }
        Ok(self
            .segments()
            .iter()
            .map(|seg| seg.at(s))
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// The concrete length at the unscaled reference point `s = 1`.
    pub fn resolve_reference(&self) -> f64 {
        self.segments()
            .iter()
            .map(|seg| seg.at(REFERENCE_SCALING))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// The elastic scaling whose resolved length is `length`, or the best
    /// stand-in when none is.
    ///
    /// - Lengths that do not depend on `s` give `1`.
    /// - Targets at or below the minimum give the largest `s` attaining it.
    /// - Targets hit by the graph give the largest `s` hitting them.
    /// - Targets above the graph give the line solution nearest `1`.
    ///
    /// Never negative and never fails. Re-resolve to check for an exact match.
    pub fn deresolve(&self, length: f64) -> f64 {
        let envelope = self.envelope();

        if envelope.is_flat() {
            debug!(length, "deresolve: length ignores scaling");
            return REFERENCE_SCALING;
        }

        if let Some(min) = envelope.minimum() {
            if length <= min.value + EPS {
                debug!(length, min = min.value, "deresolve: at or below minimum");
                return if min.upper.is_finite() {
                    min.upper
                } else {
                    REFERENCE_SCALING.max(min.lower)
                };
            }
        }

        // A line's solution only counts inside its own piece. Near a breakpoint
        // the clamped point may still match within EPS, measured in length.
        let hit = envelope
            .pieces()
            .iter()
            .filter(|p| !p.segment.is_flat())
            .filter_map(|p| {
                let s = p.segment.solve(length)?.clamp(p.start, p.end);
                ((p.segment.at(s) - length).abs() <= EPS).then_some(s)
            })
            .reduce(f64::max);
        if let Some(s) = hit {
            debug!(length, s, "deresolve: exact");
            return s;
        }

        let nearest = envelope
            .pieces()
            .iter()
            .filter(|p| !p.segment.is_flat())
            .filter_map(|p| p.segment.solve(length))
            .min_by(|a, b| {
                let (da, db) = ((a - REFERENCE_SCALING).abs(), (b - REFERENCE_SCALING).abs());
                da.total_cmp(&db).then(b.total_cmp(a))
            })
            .unwrap_or(REFERENCE_SCALING);
        debug!(length, s = nearest, "deresolve: best match");
        nearest.max(0.0)
    }
}
