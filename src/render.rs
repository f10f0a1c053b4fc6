//! Display-space description of what the shell should draw.
//!
//! Rendering reads the shapes and never changes them.

use crate::config::RenderConfig;
use crate::model::{Geometry, ShapeCollection};
use crate::session::ViewTransform;

/// How a shape is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Selected,
    Neutral,
}

/// One shape, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderShape {
    /// Index in the collection
    pub index: usize,
    /// Geometry in window coordinates
    pub geometry: Geometry,
    pub highlight: Highlight,
    /// RGBA fill
    pub fill: [u8; 4],
    /// Label text, only set for the selected shape
    pub label: Option<String>,
}

/// Map every shape to the window, in collection order.
pub fn render_list(
    shapes: &ShapeCollection,
    transform: &ViewTransform,
    colors: &RenderConfig,
) -> Vec<RenderShape> {
    shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            let selected = shapes.selected() == Some(index);
            let geometry = match shape.geometry() {
                Geometry::Rectangle(rect) => Geometry::Rectangle(transform.rect_to_display(rect)),
                Geometry::Polygon(polygon) => {
                    Geometry::Polygon(transform.polygon_to_display(polygon))
                }
            };

            RenderShape {
                index,
                geometry,
                highlight: if selected {
                    Highlight::Selected
                } else {
                    Highlight::Neutral
                },
                fill: if selected {
                    colors.selected_color
                } else {
                    colors.neutral_color
                },
                label: selected
                    .then(|| shape.label().map(str::to_string))
                    .flatten(),
            }
        })
        .collect()
}
