//! boxtext - image region annotation core
//!
//! Draw rectangles and polygons over an image, label them with text, and keep
//! the annotations in the image's metadata. The crate holds the editing
//! engine; a UI shell feeds it pointer and key events and draws its render
//! list.
//!
//! - [`model`]: shapes and the ordered, single-selection shape collection
//! - [`format`](mod@format): the JSON annotation document
//! - [`hit_test`]: which shape a click selects
//! - [`session`]: the press/move/release state machine and key actions
//! - [`store`]: where the document is persisted

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod keybindings;
pub mod model;
pub mod prompt;
pub mod render;
pub mod session;
pub mod store;
pub mod surface;

pub use boxtext_geom::{Corner, Point, Polygon, Rect};
pub use config::EditorConfig;
pub use error::{Error, Result};
pub use model::{Geometry, Shape, ShapeCollection};
pub use session::{EditMode, EditSession};
