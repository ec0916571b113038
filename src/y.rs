//! The elastic length value type and its algebra.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use crate::defaults::{EPS, SEGMENT_WARN_THRESHOLD};
use crate::envelope::Envelope;
use crate::errors::{YError, ensure_finite};
use crate::log::{debug, warn};
use crate::types::Segment;

/// A vertical length that depends on the document-wide elastic scaling `s`.
///
/// The value at `s` is the maximum over all segments of
/// `constant + elastic * s`, so every `Y` is a convex, piecewise-linear
/// function of `s`. Values are immutable; every operation returns a new one.
///
/// The segment set may contain dominated segments. They never change what
/// [`Y::resolve`] or [`Y::deresolve`] return; [`Y::simplify`] drops them.
#[derive(Clone, Debug, PartialEq)]
pub struct Y {
    // Never empty.
    segments: Vec<Segment>,
}

impl Y {
    /// A fixed length that ignores the elastic scaling.
    pub fn constant(c: f64) -> Y {
        Y::from(Segment::new(c, 0.0))
    }

    /// A purely elastic length, `e * s`.
    pub fn elastic(e: f64) -> Y {
        Y::from(Segment::new(0.0, e))
    }

    /// Like [`Y::constant`] but rejects NaN and infinities.
    pub fn try_constant(c: f64) -> Result<Y, YError> {
        Ok(Y::constant(ensure_finite(c)?))
    }

    /// Like [`Y::elastic`] but rejects NaN and infinities.
    pub fn try_elastic(e: f64) -> Result<Y, YError> {
        Ok(Y::elastic(ensure_finite(e)?))
    }

    /// Maximum over prebuilt segments. No segments means the zero length.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Y {
        let segments: Vec<Segment> = segments.into_iter().collect();
        if segments.is_empty() {
            Y::constant(0.0)
        } else {
            Y { segments }
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The upper envelope of this length on `[0, inf)`.
    pub fn envelope(&self) -> Envelope {
        Envelope::of(&self.segments)
    }

    /// Pointwise sum, also available as `+`. The result holds one segment per
    /// pair of input segments.
    pub fn plus(&self, other: &Y) -> Y {
        let segments: Vec<Segment> = self
            .segments
            .iter()
            .flat_map(|&a| other.segments.iter().map(move |&b| a + b))
            .collect();
        if segments.len() > SEGMENT_WARN_THRESHOLD {
            warn!(
                lhs = self.segments.len(),
                rhs = other.segments.len(),
                total = segments.len(),
                "elastic length grew large, consider simplify()"
            );
        }
        Y { segments }
    }

    /// Pointwise maximum.
    pub fn max(&self, other: &Y) -> Y {
        let mut segments = Vec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Y { segments }
    }

    /// Multiply both the constant and the elastic part by `k`.
    ///
    /// A negative `k` turns a maximum into a minimum, which is only
    /// representable when this length is affine.
    pub fn scale(&self, k: f64) -> Result<Y, YError> {
        let k = ensure_finite(k)?;
        if k >= 0.0 {
            return Ok(self.map(|seg| seg * k));
        }
        let envelope = self.envelope();
        match envelope.pieces() {
            [only] => Ok(Y::from(only.segment * k)),
            pieces => Err(YError::NotAffine { segments: pieces.len() }),
        }
    }

    /// Divide both parts by `k`.
    pub fn divide(&self, k: f64) -> Result<Y, YError> {
        let k = ensure_finite(k)?;
        if k == 0.0 {
            return Err(YError::DivideByZero);
        }
        self.scale(1.0 / k)
    }

    /// Multiply only the elastic part by `k`, keeping the length at `s = 0`.
    pub fn scale_elastic(&self, k: f64) -> Y {
        self.map(|seg| seg.scale_elastic(k))
    }

    /// `-self`, for affine lengths only.
    pub fn checked_neg(&self) -> Result<Y, YError> {
        self.scale(-1.0)
    }

    /// `self - other`. `other` must be affine.
    pub fn checked_sub(&self, other: &Y) -> Result<Y, YError> {
        Ok(self.plus(&other.checked_neg()?))
    }

    /// Drop every segment that never attains the maximum on `[0, inf)`.
    pub fn simplify(&self) -> Y {
        let mut segments: Vec<Segment> = Vec::new();
        for piece in self.envelope().pieces() {
            if !segments.contains(&piece.segment) {
                segments.push(piece.segment);
            }
        }
        debug!(
            before = self.segments.len(),
            after = segments.len(),
            "simplified elastic length"
        );
        Y::from_segments(segments)
    }

    /// Whether the length is a single affine function on `[0, inf)`.
    pub fn is_affine(&self) -> bool {
        self.envelope().pieces().len() == 1
    }

    /// Whether the length does not depend on the elastic scaling at all.
    pub fn is_constant(&self) -> bool {
        self.envelope().is_flat()
    }

    /// Whether both lengths describe the same function within [`EPS`],
    /// regardless of how their segment sets look.
    pub fn approx_eq(&self, other: &Y) -> bool {
        let (a, b) = (self.envelope(), other.envelope());
        let mut points: Vec<f64> = std::iter::once(0.0)
            .chain(a.breakpoints())
            .chain(b.breakpoints())
            .collect();
        let last = points.iter().copied().fold(0.0, f64::max);
        points.push(last + 1.0);
        points.iter().all(|&s| (a.at(s) - b.at(s)).abs() <= EPS)
    }

    fn map(&self, f: impl Fn(Segment) -> Segment) -> Y {
        Y { segments: self.segments.iter().map(|&seg| f(seg)).collect() }
    }

    fn shift(&self, rigid: f64) -> Y {
        self.map(|seg| Segment::new(seg.constant + rigid, seg.elastic))
    }
}

impl Default for Y {
    fn default() -> Y {
        Y::constant(0.0)
    }
}

impl From<Segment> for Y {
    fn from(segment: Segment) -> Y {
        Y { segments: vec![segment] }
    }
}

impl From<f64> for Y {
    fn from(c: f64) -> Y {
        Y::constant(c)
    }
}

impl Add for Y {
    type Output = Y;
    fn add(self, rhs: Y) -> Y {
        Y::plus(&self, &rhs)
    }
}

impl Add<&Y> for &Y {
    type Output = Y;
    fn add(self, rhs: &Y) -> Y {
        Y::plus(self, rhs)
    }
}

impl AddAssign for Y {
    fn add_assign(&mut self, rhs: Y) {
        *self = Y::plus(self, &rhs);
    }
}

/// Append a fixed length to every branch.
impl Add<f64> for Y {
    type Output = Y;
    fn add(self, rhs: f64) -> Y {
        self.shift(rhs)
    }
}

impl Add<Y> for f64 {
    type Output = Y;
    fn add(self, rhs: Y) -> Y {
        rhs.shift(self)
    }
}

impl Sub<f64> for Y {
    type Output = Y;
    fn sub(self, rhs: f64) -> Y {
        self.shift(-rhs)
    }
}

impl AddAssign<f64> for Y {
    fn add_assign(&mut self, rhs: f64) {
        *self = self.shift(rhs);
    }
}

// NOTE: Neg, Sub<Y>, Mul<f64> and Div<f64> are intentionally not operators.
// They can fail (non-affine negation, zero divisor); use checked_neg(),
// checked_sub(), scale() and divide() instead.

impl Sum for Y {
    fn sum<I: Iterator<Item = Y>>(iter: I) -> Y {
        iter.fold(Y::default(), |acc, y| Y::plus(&acc, &y))
    }
}

impl<'a> Sum<&'a Y> for Y {
    fn sum<I: Iterator<Item = &'a Y>>(iter: I) -> Y {
        iter.fold(Y::default(), |acc, y| Y::plus(&acc, y))
    }
}

impl fmt::Display for Y {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.segments.as_slice() {
            return write!(f, "{}", only);
        }
        write!(f, "max(")?;
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", seg)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(constant: f64, elastic: f64) -> Segment {
        Segment::new(constant, elastic)
    }

    // ==================== Constructors ====================

    #[test]
    fn constant_and_elastic_are_single_segments() {
        assert_eq!(Y::constant(7.0).segments(), &[seg(7.0, 0.0)]);
        assert_eq!(Y::elastic(10.0).segments(), &[seg(0.0, 10.0)]);
    }

    #[test]
    fn checked_constructors_reject_non_finite() {
        assert!(Y::try_constant(3.0).is_ok());
        assert!(Y::try_constant(f64::NAN).is_err());
        assert_eq!(
            Y::try_elastic(f64::INFINITY),
            Err(YError::NonFinite { value: f64::INFINITY })
        );
    }

    #[test]
    fn from_no_segments_is_zero() {
        assert_eq!(Y::from_segments(Vec::new()), Y::constant(0.0));
        assert_eq!(Y::default(), Y::constant(0.0));
    }

    // ==================== Add ====================

    #[test]
    fn add_is_cartesian_product() {
        let a = Y::constant(10.0).max(&Y::elastic(25.0));
        let b = Y::constant(1.0).max(&Y::elastic(2.0)).max(&Y::constant(3.0));
        let sum = a.plus(&b);
        assert_eq!(sum.segments().len(), 6);
        assert_eq!(sum.segments()[0], seg(11.0, 0.0));
        assert_eq!(sum.segments()[4], seg(0.0, 27.0));
    }

    #[test]
    fn add_operators_agree() {
        let a = 7.0 + Y::elastic(10.0);
        let b = Y::elastic(5.0);
        let by_ref = &a + &b;
        let mut assigned = a.clone();
        assigned += b.clone();
        assert_eq!(by_ref, a.clone() + b);
        assert_eq!(assigned, by_ref);
        assert_eq!(by_ref.segments(), &[seg(7.0, 15.0)]);
    }

    #[test]
    fn rigid_offsets_shift_every_branch() {
        let y = Y::constant(10.0).max(&Y::elastic(25.0)) + 2.0;
        assert_eq!(y.segments(), &[seg(12.0, 0.0), seg(2.0, 25.0)]);
        let mut y = y - 4.0;
        assert_eq!(y.segments(), &[seg(8.0, 0.0), seg(-2.0, 25.0)]);
        y += 1.0;
        assert_eq!(y.segments(), &[seg(9.0, 0.0), seg(-1.0, 25.0)]);
    }

    #[test]
    fn sum_of_heights() {
        let rows = vec![Y::constant(10.0), Y::elastic(4.0), Y::constant(2.5)];
        let total: Y = rows.iter().sum();
        assert_eq!(total.segments(), &[seg(12.5, 4.0)]);
        let empty: Y = Vec::<Y>::new().into_iter().sum();
        assert_eq!(empty, Y::constant(0.0));
    }

    // ==================== Scale ====================

    #[test]
    fn scale_multiplies_both_parts() {
        let y = (7.0 + Y::elastic(10.0)).max(&Y::elastic(20.0));
        let scaled = y.scale(2.0).unwrap();
        assert_eq!(scaled.segments(), &[seg(14.0, 20.0), seg(0.0, 40.0)]);
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(Y::constant(1.0).divide(0.0), Err(YError::DivideByZero));
        assert_eq!(Y::constant(1.0).divide(-0.0), Err(YError::DivideByZero));
    }

    #[test]
    fn divide_halves() {
        let y = (7.0 + Y::elastic(10.0)).divide(2.0).unwrap();
        assert_eq!(y.segments(), &[seg(3.5, 5.0)]);
    }

    #[test]
    fn scale_rejects_non_finite_factor() {
        assert!(matches!(Y::constant(1.0).scale(f64::NAN), Err(YError::NonFinite { .. })));
        assert!(matches!(Y::constant(1.0).divide(f64::INFINITY), Err(YError::NonFinite { .. })));
    }

    #[test]
    fn negative_scale_needs_affine_length() {
        let affine = 7.0 + Y::elastic(10.0);
        assert_eq!(affine.scale(-2.0).unwrap().segments(), &[seg(-14.0, -20.0)]);

        let kinked = Y::constant(5.0).max(&Y::elastic(10.0));
        assert_eq!(kinked.scale(-1.0), Err(YError::NotAffine { segments: 2 }));
    }

    #[test]
    fn negative_scale_ignores_dominated_segments() {
        // 5s never attains the maximum; negating it must not let it take over.
        let y = (10.0 + Y::elastic(5.0)).max(&Y::elastic(5.0));
        assert_eq!(y.checked_neg().unwrap().segments(), &[seg(-10.0, -5.0)]);
    }

    #[test]
    fn scale_elastic_keeps_constant() {
        let y = (7.0 + Y::elastic(10.0)).scale_elastic(0.5);
        assert_eq!(y.segments(), &[seg(7.0, 5.0)]);
        let frozen = (7.0 + Y::elastic(10.0)).scale_elastic(0.0);
        assert!(frozen.is_constant());
    }

    // ==================== Subtract ====================

    #[test]
    fn subtract_affine_gap() {
        let gap = Y::elastic(3.0);
        let y = (Y::constant(10.0).max(&Y::elastic(25.0)) + gap.clone())
            .checked_sub(&gap)
            .unwrap();
        assert!(y.approx_eq(&Y::constant(10.0).max(&Y::elastic(25.0))));
    }

    #[test]
    fn subtract_kinked_fails() {
        let kinked = Y::constant(5.0).max(&Y::elastic(10.0));
        assert_eq!(
            Y::constant(1.0).checked_sub(&kinked),
            Err(YError::NotAffine { segments: 2 })
        );
    }

    // ==================== Max / simplify ====================

    #[test]
    fn max_concatenates() {
        let y = Y::elastic(5.0).max(&(10.0 + Y::elastic(5.0)));
        assert_eq!(y.segments(), &[seg(0.0, 5.0), seg(10.0, 5.0)]);
    }

    #[test]
    fn simplify_drops_dominated() {
        let y = Y::elastic(5.0)
            .max(&(10.0 + Y::elastic(5.0)))
            .max(&Y::elastic(25.0))
            .max(&Y::constant(-3.0));
        let simple = y.simplify();
        assert_eq!(simple.segments(), &[seg(10.0, 5.0), seg(0.0, 25.0)]);
        assert!(simple.approx_eq(&y));
    }

    #[test]
    fn affine_and_constant_checks() {
        assert!(Y::constant(4.0).is_affine());
        assert!(Y::constant(4.0).is_constant());
        assert!(!Y::elastic(4.0).is_constant());
        assert!((Y::elastic(5.0).max(&(10.0 + Y::elastic(5.0)))).is_affine());
        assert!(!Y::constant(5.0).max(&Y::elastic(10.0)).is_affine());
    }

    #[test]
    fn approx_eq_is_semantic() {
        let a = Y::constant(5.0).max(&Y::elastic(10.0));
        let b = Y::elastic(10.0).max(&Y::constant(5.0)).max(&Y::constant(1.0));
        assert!(a.approx_eq(&b));
        assert_ne!(a, b);
        assert!(!a.approx_eq(&Y::constant(5.0).max(&Y::elastic(10.5))));
        assert!(!Y::elastic(1.0).approx_eq(&Y::elastic(1.1)));
    }

    // ==================== Display ====================

    #[test]
    fn display_single_segment() {
        insta::assert_snapshot!(7.0 + Y::elastic(10.0), @"7 + 10s");
    }

    #[test]
    fn display_maximum() {
        let y = (10.0 + Y::elastic(5.0)).max(&Y::elastic(25.0)).max(&Y::constant(-3.0));
        insta::assert_snapshot!(y, @"max(10 + 5s, 25s, -3)");
    }
}
