//! Curated surface for callers (front ends, benches, examples).
//!
//! Mirrors the shape modules with short aliases; the module paths remain
//! the canonical names.

pub use crate::circle::Circle;
pub use crate::coord::Coordinate2D as Coord2;
pub use crate::line::Line as Segment;
pub use crate::point::Point;
pub use crate::rectangle::Rectangle as Rect;
