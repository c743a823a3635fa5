//! Immutable 2D shapes: points, segments, circles and rectangles.
//!
//! All shapes are plain `Copy` values built from any `Coordinate2D` input.
//! Queries are closed-form and never fail: out-of-domain answers are `NaN` or
//! `false`, and comparisons against an unrelated type are `false`.

pub mod api;
pub mod circle;
pub mod coord;
pub mod line;
pub mod point;
pub mod rectangle;
mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circle::Circle;
pub use coord::Coordinate2D;
pub use line::Line;
pub use nalgebra::Vector2 as Vec2;
pub use point::Point;
pub use rectangle::Rectangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::{Circle, Coordinate2D, Line, Point, Rectangle, Vec2};
}
