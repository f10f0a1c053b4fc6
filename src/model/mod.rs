//! Shape annotation model.

mod collection;
mod shape;

pub use collection::ShapeCollection;
pub use shape::{Geometry, Handle, Shape, rect_to_polygon};
