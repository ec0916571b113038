//! Upper envelope of a segment set on `[0, inf)`.
//!
//! The maximum of affine functions is convex and piecewise linear. Walking it
//! left to right, each piece is owned by one segment and slopes strictly
//! increase. Segments that never own a piece are dominated and play no role in
//! evaluation.

use crate::defaults::EPS;
use crate::types::Segment;

/// One linear piece of the envelope, valid on `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub start: f64,
    /// `f64::INFINITY` for the last piece.
    pub end: f64,
    pub segment: Segment,
}

/// Where a convex envelope bottoms out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minimum {
    pub value: f64,
    /// Smallest `s` attaining `value`.
    pub lower: f64,
    /// Largest `s` attaining `value`, possibly `f64::INFINITY`.
    pub upper: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    pieces: Vec<Piece>,
}

impl Envelope {
    /// Build the envelope of `segments`. `segments` must not be empty.
    pub fn of(segments: &[Segment]) -> Envelope {
        let mut pieces = Vec::new();
        let Some(mut current) = segments.iter().copied().reduce(|best, seg| {
            if seg.constant > best.constant
                || (seg.constant == best.constant && seg.elastic > best.elastic)
            {
                seg
            } else {
                best
            }
        }) else {
            return Envelope { pieces };
        };
        let mut start = 0.0;

        loop {
            // The steeper segment that overtakes `current` first; ties go to the steepest.
            let next = segments
                .iter()
                .copied()
                .filter(|seg| seg.elastic > current.elastic)
                .filter_map(|seg| current.crossing(seg).map(|s| (s.max(start), seg)))
                .min_by(|(sa, a), (sb, b)| {
                    sa.total_cmp(sb).then(b.elastic.total_cmp(&a.elastic))
                });

            match next {
                Some((s, seg)) => {
                    if s > start {
                        pieces.push(Piece { start, end: s, segment: current });
                        start = s;
                    }
                    current = seg;
                }
                None => {
                    pieces.push(Piece { start, end: f64::INFINITY, segment: current });
                    return Envelope { pieces };
                }
            }
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Breakpoints between pieces, in increasing order.
    pub fn breakpoints(&self) -> impl Iterator<Item = f64> + '_ {
        self.pieces.iter().skip(1).map(|p| p.start)
    }

    /// Evaluate the envelope at `s >= 0`.
    pub fn at(&self, s: f64) -> f64 {
        self.pieces
            .iter()
            .find(|p| s <= p.end)
            .or(self.pieces.last())
            .map_or(0.0, |p| p.segment.at(s))
    }

    /// Whether every piece is flat, i.e. the length does not depend on `s`.
    pub fn is_flat(&self) -> bool {
        self.pieces.iter().all(|p| p.segment.is_flat())
    }

    /// The minimum over `[0, inf)`, or `None` if the envelope decreases forever.
    pub fn minimum(&self) -> Option<Minimum> {
        let first = self
            .pieces
            .iter()
            .position(|p| p.segment.elastic >= -EPS)?;
        let lower = self.pieces[first].start;
        let value = self.pieces[first].segment.at(lower);
        let upper = self.pieces[first..]
            .iter()
            .take_while(|p| p.segment.is_flat())
            .last()
            .map_or(lower, |p| p.end);
        Some(Minimum { value, lower, upper })
    }
}
