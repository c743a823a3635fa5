//! Immutable 2D point.
//!
//! Equality is by value (`f64 ==`): NaN never equals anything and `-0 == 0`.
//! `is_equal_to` is the type-tolerant form used when the other operand may not
//! be a `Point` at all.

use std::any::Any;
use std::fmt;

use nalgebra::Vector2;

use crate::coord::Coordinate2D;
use crate::util::write_num;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// No validation: NaN and infinities are stored as given.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Copy the components of any coordinate-like value.
    #[inline]
    pub fn from_coord<C: Coordinate2D>(c: C) -> Self {
        Self::new(c.x(), c.y())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// True iff `other` is a `Point` with equal coordinates.
    pub fn is_equal_to(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Point>().is_some_and(|p| self == p)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.to_vec2() - self.to_vec2()).norm()
    }

    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl Coordinate2D for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Renders as `(x,y)`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_num(f, self.x)?;
        f.write_str(",")?;
        write_num(f, self.y)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    /// Same fields as `Point`, different type.
    struct PointLike {
        x: f64,
        y: f64,
    }

    #[test]
    fn display_uses_plain_numbers() {
        assert_eq!(Point::new(1.0, 2.0).to_string(), "(1,2)");
        assert_eq!(Point::new(-3.5, 0.0).to_string(), "(-3.5,0)");
        assert_eq!(Point::new(f64::NAN, f64::INFINITY).to_string(), "(NaN,Infinity)");
        assert_eq!(Point::new(-0.0, 0.0).to_string(), "(0,0)");
        assert_eq!(Point::new(1e21, 1e-7).to_string(), "(1e+21,1e-7)");
    }

    #[test]
    fn equality_requires_a_point() {
        let p = Point::new(1.0, 2.0);
        assert!(p.is_equal_to(&Point::new(1.0, 2.0)));
        assert!(!p.is_equal_to(&Point::new(2.0, 1.0)));
        assert!(!p.is_equal_to(&(1.0, 2.0)));
        assert!(!p.is_equal_to(&PointLike { x: 1.0, y: 2.0 }));
        assert!(!p.is_equal_to(&"(1,2)"));
    }

    #[test]
    fn nan_point_is_not_equal_to_itself() {
        let p = Point::new(f64::NAN, 0.0);
        assert!(!p.is_equal_to(&p));
        assert!(Point::new(-0.0, 0.0).is_equal_to(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn copies_structural_coordinates() {
        let src = PointLike { x: 4.0, y: -1.0 };
        let p = Point::from_coord((src.x, src.y));
        assert_eq!(p, Point::new(4.0, -1.0));
        assert_eq!(Point::from(vector![4.0, -1.0]), p);
        assert_eq!(Vector2::from(p), vector![4.0, -1.0]);
    }

    #[test]
    fn distance_and_midpoint() {
        let a = Point::new(3.0, 2.0);
        let b = Point::new(6.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.midpoint(&b), Point::new(4.5, 4.0));
    }

    proptest! {
        #[test]
        fn finite_points_equal_themselves(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            prop_assert!(Point::new(x, y).is_equal_to(&Point::new(x, y)));
            prop_assert!(!Point::new(x, y).is_equal_to(&(x, y)));
        }
    }
}
