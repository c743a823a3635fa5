//! Bounded line segment between two owned endpoints.
//!
//! Purpose
//! - Closed-form segment queries: length, slope, interpolation along either
//!   axis, midpoint split, point membership, parallelism.
//!
//! Conventions
//! - The segment is bounded: interpolation and membership outside the
//!   endpoints' bounding box yield `NaN` / `false`.
//! - Endpoint order matters for equality and for the sign of a vertical slope.
//! - No query panics; out-of-domain inputs degrade to `NaN` or `false`.
//!
//! Code cross-refs: `point::Point`, `coord::Coordinate2D`

use std::any::Any;
use std::fmt;

use crate::coord::Coordinate2D;
use crate::point::Point;
use crate::util::{within, within_eps};

/// Segment from `end_a` to `end_b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    end_a: Point,
    end_b: Point,
}

impl Line {
    /// Copies both ends into fresh `Point`s.
    pub fn new(end_a: impl Coordinate2D, end_b: impl Coordinate2D) -> Self {
        Self {
            end_a: Point::from_coord(end_a),
            end_b: Point::from_coord(end_b),
        }
    }

    #[inline]
    pub fn end_a(&self) -> Point {
        self.end_a
    }

    #[inline]
    pub fn end_b(&self) -> Point {
        self.end_b
    }

    /// True iff `other` is a `Line` with the same ends in the same order.
    pub fn is_equal_to(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Line>().is_some_and(|l| {
            self.end_a.is_equal_to(&l.end_a) && self.end_b.is_equal_to(&l.end_b)
        })
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.end_a.distance_to(&self.end_b)
    }

    /// `dy / dx`; vertical segments give `±inf`, a single point gives `NaN`.
    #[inline]
    pub fn slope(&self) -> f64 {
        (self.end_b.y() - self.end_a.y()) / (self.end_b.x() - self.end_a.x())
    }

    /// Parallel iff `other` is a `Line` with exactly the same slope that does
    /// not lie on the same infinite line. A `NaN` slope is never parallel.
    pub fn is_parallel_to(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<Line>() {
            Some(l) => self.slope() == l.slope() && !self.is_collinear_with(&l.end_a),
            None => false,
        }
    }

    /// x on the segment at height `y`.
    ///
    /// Exact endpoint matches win over interpolation (this is what makes a
    /// horizontal segment answer its own height). Heights outside the segment
    /// give `NaN`.
    pub fn find_x(&self, y: f64) -> f64 {
        let (a, b) = (self.end_a, self.end_b);
        if y == a.y() {
            return a.x();
        }
        if y == b.y() {
            return b.x();
        }
        if !within(y, a.y(), b.y()) {
            return f64::NAN;
        }
        a.x() + (y - a.y()) * (b.x() - a.x()) / (b.y() - a.y())
    }

    /// y on the segment at abscissa `x`; mirror of [`Line::find_x`].
    pub fn find_y(&self, x: f64) -> f64 {
        let (a, b) = (self.end_a, self.end_b);
        if x == a.x() {
            return a.y();
        }
        if x == b.x() {
            return b.y();
        }
        if !within(x, a.x(), b.x()) {
            return f64::NAN;
        }
        a.y() + (x - a.x()) * (b.y() - a.y()) / (b.x() - a.x())
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.end_a.midpoint(&self.end_b)
    }

    /// Halves at the midpoint: `[a→mid, mid→b]`.
    pub fn split(&self) -> [Line; 2] {
        let mid = self.midpoint();
        [Line::new(self.end_a, mid), Line::new(mid, self.end_b)]
    }

    /// True iff `point` is a `Point` lying exactly on the segment.
    pub fn has_point(&self, point: &dyn Any) -> bool {
        let Some(p) = point.downcast_ref::<Point>() else {
            return false;
        };
        let (a, b) = (self.end_a, self.end_b);
        self.is_collinear_with(p) && within(p.x(), a.x(), b.x()) && within(p.y(), a.y(), b.y())
    }

    /// Tolerant membership: distance to the carrier line and to the bounding
    /// box both at most `eps`. Negative `eps` shrinks the accepted region.
    pub fn has_point_eps(&self, p: &Point, eps: f64) -> bool {
        let (a, b) = (self.end_a, self.end_b);
        let len = self.length();
        let off_line = if len > 0.0 {
            self.cross(p).abs() / len
        } else {
            a.distance_to(p)
        };
        off_line <= eps.max(0.0)
            && within_eps(p.x(), a.x(), b.x(), eps)
            && within_eps(p.y(), a.y(), b.y(), eps)
    }

    /// `(b - a) × (p - a)`; zero iff `p` is on the carrier line.
    #[inline]
    fn cross(&self, p: &Point) -> f64 {
        let (a, b) = (self.end_a, self.end_b);
        (b.x() - a.x()) * (p.y() - a.y()) - (b.y() - a.y()) * (p.x() - a.x())
    }

    #[inline]
    fn is_collinear_with(&self, p: &Point) -> bool {
        self.cross(p) == 0.0
    }
}

/// Renders as `[Line (xA,yA) to (xB,yB)]`.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Line {} to {}]", self.end_a, self.end_b)
    }
}
