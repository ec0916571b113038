//! The affine building block of elastic lengths.
//!
//! A [`Segment`] is one branch `constant + elastic * s` of an elastic length.
//! [`Y`](crate::Y) is the pointwise maximum over a set of them.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::defaults::EPS;
use crate::errors::{YError, ensure_finite};

/// An affine function of the elastic scaling `s`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Segment {
    /// Value at `s = 0`.
    pub constant: f64,
    /// Growth per unit of `s`. May be negative.
    pub elastic: f64,
}

impl Segment {
    pub const ZERO: Segment = Segment::new(0.0, 0.0);

    /// Create a segment (const-friendly, unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub const fn new(constant: f64, elastic: f64) -> Segment {
        Segment { constant, elastic }
    }

    /// Create a segment with validation (rejects NaN/infinite)
    pub fn try_new(constant: f64, elastic: f64) -> Result<Segment, YError> {
        Ok(Segment::new(ensure_finite(constant)?, ensure_finite(elastic)?))
    }

    /// Evaluate at `s`.
    #[inline]
    pub fn at(self, s: f64) -> f64 {
        self.constant + self.elastic * s
    }

    /// Whether the slope is indistinguishable from zero.
    #[inline]
    pub fn is_flat(self) -> bool {
        self.elastic.abs() <= EPS
    }

    /// The `s` at which this segment evaluates to `length`, if the slope allows one.
    pub fn solve(self, length: f64) -> Option<f64> {
        if self.elastic == 0.0 {
            None
        } else {
            Some((length - self.constant) / self.elastic)
        }
    }

    /// The `s` where the two lines meet. `None` for parallel lines.
    pub fn crossing(self, other: Segment) -> Option<f64> {
        let de = other.elastic - self.elastic;
        if de == 0.0 {
            None
        } else {
            Some((self.constant - other.constant) / de)
        }
    }

    /// Whether `self >= other` at every `s >= 0`.
    pub fn dominates_on_domain(self, other: Segment) -> bool {
        self.constant >= other.constant && self.elastic >= other.elastic
    }

    /// Multiply only the elastic part.
    #[inline]
    pub fn scale_elastic(self, k: f64) -> Segment {
        Segment::new(self.constant, self.elastic * k)
    }
}

impl Add for Segment {
    type Output = Segment;
    fn add(self, rhs: Segment) -> Segment {
        Segment::new(self.constant + rhs.constant, self.elastic + rhs.elastic)
    }
}

impl Sub for Segment {
    type Output = Segment;
    fn sub(self, rhs: Segment) -> Segment {
        Segment::new(self.constant - rhs.constant, self.elastic - rhs.elastic)
    }
}

impl Mul<f64> for Segment {
    type Output = Segment;
    fn mul(self, rhs: f64) -> Segment {
        Segment::new(self.constant * rhs, self.elastic * rhs)
    }
}

impl Neg for Segment {
    type Output = Segment;
    fn neg(self) -> Segment {
        Segment::new(-self.constant, -self.elastic)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding +0.0 turns -0.0 into 0.0 so it never prints as "-0".
        let c = self.constant + 0.0;
        let e = self.elastic + 0.0;
        match (c == 0.0, e == 0.0) {
            (_, true) => write!(f, "{}", c),
            (true, false) => write!(f, "{}s", e),
            (false, false) if e < 0.0 => write!(f, "{} - {}s", c, -e),
            (false, false) => write!(f, "{} + {}s", c, e),
        }
    }
}
