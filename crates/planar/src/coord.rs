//! Structural coordinate contract.
//!
//! Anything with a numeric `x` and `y` can seed a shape. Constructors read the
//! two components through `Coordinate2D` and copy them into owned `Point`s, so
//! a shape never aliases caller data.
//!
//! Code cross-refs: `point::Point`, `line::Line::new`, `circle::Circle::new`

use nalgebra::Vector2;

/// A value exposing a 2D position.
pub trait Coordinate2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate2D for Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Coordinate2D for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate2D for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl<C: Coordinate2D + ?Sized> Coordinate2D for &C {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}
