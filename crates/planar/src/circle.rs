//! Circle given by an owned centre and a radius.

use std::any::Any;
use std::f64::consts::PI;
use std::fmt;

use crate::coord::Coordinate2D;
use crate::point::Point;
use crate::util::write_num;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    centre: Point,
    radius: f64,
}

impl Circle {
    pub fn new(centre: impl Coordinate2D, radius: f64) -> Self {
        Self {
            centre: Point::from_coord(centre),
            radius,
        }
    }

    #[inline]
    pub fn centre(&self) -> Point {
        self.centre
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True iff `other` is a `Circle` with equal centre and radius.
    pub fn is_equal_to(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Circle>()
            .is_some_and(|c| self.centre.is_equal_to(&c.centre) && self.radius == c.radius)
    }

    /// `π r²`
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// `2 π r`
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Closed disc membership; false for anything that is not a `Point`.
    pub fn has_point(&self, point: &dyn Any) -> bool {
        point
            .downcast_ref::<Point>()
            .is_some_and(|p| self.centre.distance_to(p) <= self.radius)
    }
}

/// Renders as `[Circle @(x,y) radius r]`.
impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Circle @{} radius ", self.centre)?;
        write_num(f, self.radius)?;
        f.write_str("]")
    }
}
