//! Serde types for the persisted annotation document.
//!
//! ```json
//! { "boxes": [
//!     { "top_left": [10, 20], "bottom_right": [50, 80], "text": "hello" },
//!     { "points": [[0, 0], [10, 0], [5, 8]], "text": "" }
//! ] }
//! ```
//!
//! A record is a polygon if and only if it has a `points` field.

use boxtext_geom::{Point, Polygon, Rect};
use serde::{Deserialize, Deserializer, Serialize};

use crate::format::error::FormatError;
use crate::model::{Geometry, Shape, ShapeCollection};

/// Top-level document stored in the image metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationDocument {
    pub boxes: Vec<ShapeRecord>,
}

/// One persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShapeRecord {
    Rectangle {
        top_left: Point,
        bottom_right: Point,
        text: String,
    },
    Polygon {
        points: Vec<Point>,
        text: String,
    },
}

/// Every field a record may carry. Unknown keys are ignored.
#[derive(Deserialize)]
struct RawRecord {
    points: Option<Vec<Point>>,
    top_left: Option<Point>,
    bottom_right: Option<Point>,
    text: Option<String>,
}

impl TryFrom<RawRecord> for ShapeRecord {
    type Error = FormatError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let text = raw.text.unwrap_or_default();

        if let Some(points) = raw.points {
            return Ok(ShapeRecord::Polygon { points, text });
        }

        let top_left = raw
            .top_left
            .ok_or_else(|| FormatError::missing_field("top_left"))?;
        let bottom_right = raw
            .bottom_right
            .ok_or_else(|| FormatError::missing_field("bottom_right"))?;

        Ok(ShapeRecord::Rectangle {
            top_left,
            bottom_right,
            text,
        })
    }
}

impl<'de> Deserialize<'de> for ShapeRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRecord::deserialize(deserializer)?;
        ShapeRecord::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        let text = shape.label().unwrap_or_default().to_string();
        match shape.geometry() {
            Geometry::Rectangle(rect) => ShapeRecord::Rectangle {
                top_left: rect.top_left(),
                bottom_right: rect.bottom_right(),
                text,
            },
            Geometry::Polygon(polygon) => ShapeRecord::Polygon {
                points: polygon.vertices().to_vec(),
                text,
            },
        }
    }
}

impl From<ShapeRecord> for Shape {
    fn from(record: ShapeRecord) -> Self {
        match record {
            ShapeRecord::Rectangle {
                top_left,
                bottom_right,
                text,
            } => Shape::rectangle(Rect::new(top_left, bottom_right)).with_label(text),
            ShapeRecord::Polygon { points, text } => {
                Shape::polygon(Polygon::from_vertices(points)).with_label(text)
            }
        }
    }
}

impl From<&ShapeCollection> for AnnotationDocument {
    fn from(shapes: &ShapeCollection) -> Self {
        Self {
            boxes: shapes.iter().map(ShapeRecord::from).collect(),
        }
    }
}

impl From<AnnotationDocument> for ShapeCollection {
    fn from(document: AnnotationDocument) -> Self {
        document.boxes.into_iter().map(Shape::from).collect()
    }
}
