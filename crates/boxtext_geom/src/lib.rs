//! boxtext_geom - integer geometry for image annotations
//!
//! Points, axis-aligned rectangles with addressable corners, and polygons.
//! All coordinates are image pixels stored as `i32`. Degenerate geometry
//! (zero-size rectangles, empty polygons, repeated vertices) is valid input
//! everywhere in this crate.

mod point;
mod polygon;
mod rect;

pub use point::Point;
pub use polygon::Polygon;
pub use rect::{Corner, Rect};
