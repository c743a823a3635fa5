//! Axis-aligned rectangle spanned by two diagonal corners.
//!
//! The corners are kept as given (no normalization), so equality and the
//! rendering follow construction order.

use std::any::Any;
use std::fmt;

use crate::coord::Coordinate2D;
use crate::point::Point;
use crate::util::within;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    corner_a: Point,
    corner_c: Point,
}

impl Rectangle {
    pub fn new(corner_a: impl Coordinate2D, corner_c: impl Coordinate2D) -> Self {
        Self {
            corner_a: Point::from_coord(corner_a),
            corner_c: Point::from_coord(corner_c),
        }
    }

    #[inline]
    pub fn corners(&self) -> (Point, Point) {
        (self.corner_a, self.corner_c)
    }

    /// True iff `other` is a `Rectangle` with the same diagonal, in order.
    pub fn is_equal_to(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Rectangle>().is_some_and(|r| {
            self.corner_a.is_equal_to(&r.corner_a) && self.corner_c.is_equal_to(&r.corner_c)
        })
    }

    /// Extent along x.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.corner_c.x() - self.corner_a.x()).abs()
    }

    /// Extent along y.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.corner_c.y() - self.corner_a.y()).abs()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.length()
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.length())
    }

    /// Closed-box membership; false for anything that is not a `Point`.
    pub fn has_point(&self, point: &dyn Any) -> bool {
        let (a, c) = (self.corner_a, self.corner_c);
        point
            .downcast_ref::<Point>()
            .is_some_and(|p| within(p.x(), a.x(), c.x()) && within(p.y(), a.y(), c.y()))
    }
}

/// Renders as `[Rectangle (x1,y1) to (x2,y2)]`.
impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Rectangle {} to {}]", self.corner_a, self.corner_c)
    }
}
