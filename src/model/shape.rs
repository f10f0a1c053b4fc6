//! Annotation shapes: a geometry plus an optional text label.

use std::fmt;

use boxtext_geom::{Corner, Point, Polygon, Rect};

/// Geometry of an annotation shape (in image coordinates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry {
    /// Axis-aligned box, possibly inverted while being resized.
    Rectangle(Rect),
    /// Closed polygon.
    Polygon(Polygon),
}

/// A draggable point on a shape: a rectangle corner or a polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Corner(Corner),
    Vertex(usize),
}

/// A single annotation region.
///
/// The variant of a shape never changes in place; converting produces a new
/// shape (see [`Shape::converted`]) that the owning collection swaps in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    geometry: Geometry,
    label: Option<String>,
}

impl Shape {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            label: None,
        }
    }

    pub fn rectangle(rect: Rect) -> Self {
        Self::new(Geometry::Rectangle(rect))
    }

    pub fn polygon(polygon: Polygon) -> Self {
        Self::new(Geometry::Polygon(polygon))
    }

    /// Builder-style variant of [`Shape::set_label`].
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.set_label(text);
        self
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn as_rect(&self) -> Option<&Rect> {
        match &self.geometry {
            Geometry::Rectangle(rect) => Some(rect),
            Geometry::Polygon(_) => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match &self.geometry {
            Geometry::Polygon(polygon) => Some(polygon),
            Geometry::Rectangle(_) => None,
        }
    }

    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match &mut self.geometry {
            Geometry::Polygon(polygon) => Some(polygon),
            Geometry::Rectangle(_) => None,
        }
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self.geometry, Geometry::Polygon(_))
    }

    /// Short name of the variant, used in logs and listings.
    pub fn kind_name(&self) -> &'static str {
        match self.geometry {
            Geometry::Rectangle(_) => "rectangle",
            Geometry::Polygon(_) => "polygon",
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set the text label. An empty string clears it.
    pub fn set_label(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.label = if text.is_empty() { None } else { Some(text) };
    }

    /// Whether `point` lies inside the shape.
    ///
    /// Rectangles test inclusively against their normalized form, polygons
    /// use the even-odd rule.
    pub fn contains(&self, point: Point) -> bool {
        match &self.geometry {
            Geometry::Rectangle(rect) => rect.contains(point),
            Geometry::Polygon(polygon) => polygon.contains(point),
        }
    }

    /// Canonical axis-aligned bounds of the shape.
    pub fn bounding_rect(&self) -> Rect {
        match &self.geometry {
            Geometry::Rectangle(rect) => rect.normalized(),
            Geometry::Polygon(polygon) => polygon.bounding_rect(),
        }
    }

    /// Rigidly move the shape by `offset`.
    pub fn translate(&mut self, offset: Point) {
        match &mut self.geometry {
            Geometry::Rectangle(rect) => rect.translate(offset),
            Geometry::Polygon(polygon) => polygon.translate(offset),
        }
    }

    /// Every handle of the shape with its current position.
    ///
    /// Rectangle corners come in [`Corner::ALL`] order, polygon vertices in
    /// vertex order.
    pub fn handles(&self) -> Vec<(Handle, Point)> {
        match &self.geometry {
            Geometry::Rectangle(rect) => Corner::ALL
                .iter()
                .map(|&corner| (Handle::Corner(corner), rect.corner(corner)))
                .collect(),
            Geometry::Polygon(polygon) => polygon
                .vertices()
                .iter()
                .enumerate()
                .map(|(i, &p)| (Handle::Vertex(i), p))
                .collect(),
        }
    }

    pub fn handle_position(&self, handle: Handle) -> Option<Point> {
        match (&self.geometry, handle) {
            (Geometry::Rectangle(rect), Handle::Corner(corner)) => Some(rect.corner(corner)),
            (Geometry::Polygon(polygon), Handle::Vertex(index)) => polygon.vertex(index),
            _ => None,
        }
    }

    /// Move a handle to `to`.
    ///
    /// Returns false when the handle does not belong to this kind of shape or
    /// the vertex index is out of range.
    pub fn move_handle(&mut self, handle: Handle, to: Point) -> bool {
        match (&mut self.geometry, handle) {
            (Geometry::Rectangle(rect), Handle::Corner(corner)) => {
                rect.set_corner(corner, to);
                true
            }
            (Geometry::Polygon(polygon), Handle::Vertex(index)) => polygon.set_vertex(index, to),
            _ => false,
        }
    }

    /// This shape as a polygon, carrying the label over.
    ///
    /// A rectangle becomes the vertices top-left, top-right, bottom-right,
    /// bottom-left. A polygon is returned unchanged.
    pub fn to_polygon(&self) -> Shape {
        let polygon = match &self.geometry {
            Geometry::Rectangle(rect) => rect_to_polygon(rect),
            Geometry::Polygon(polygon) => polygon.clone(),
        };
        Shape {
            geometry: Geometry::Polygon(polygon),
            label: self.label.clone(),
        }
    }

    /// This shape as a rectangle, carrying the label over.
    ///
    /// A polygon is replaced by its bounding rectangle; the vertices are lost.
    pub fn to_rectangle(&self) -> Shape {
        let rect = match &self.geometry {
            Geometry::Rectangle(rect) => *rect,
            Geometry::Polygon(polygon) => polygon.bounding_rect(),
        };
        Shape {
            geometry: Geometry::Rectangle(rect),
            label: self.label.clone(),
        }
    }

    /// The same region as the other variant.
    pub fn converted(&self) -> Shape {
        match self.geometry {
            Geometry::Rectangle(_) => self.to_polygon(),
            Geometry::Polygon(_) => self.to_rectangle(),
        }
    }
}

/// The four corners of a rectangle as polygon vertices, in drawing order.
pub fn rect_to_polygon(rect: &Rect) -> Polygon {
    Polygon::from_vertices(vec![
        rect.corner(Corner::TopLeft),
        rect.corner(Corner::TopRight),
        rect.corner(Corner::BottomRight),
        rect.corner(Corner::BottomLeft),
    ])
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.geometry {
            Geometry::Rectangle(rect) => write!(f, "rectangle {}", rect)?,
            Geometry::Polygon(polygon) => {
                write!(f, "polygon [")?;
                for (i, p) in polygon.vertices().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, "]")?;
            }
        }
        if let Some(label) = &self.label {
            write!(f, " {:?}", label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(l: i32, t: i32, r: i32, b: i32) -> Rect {
        Rect::new(Point::new(l, t), Point::new(r, b))
    }

    #[test]
    fn test_rect_to_polygon_vertex_order() {
        let shape = Shape::rectangle(rect(0, 0, 10, 5)).with_label("title");
        let poly = shape.to_polygon();
        assert_eq!(
            poly.as_polygon().unwrap().vertices(),
            &[
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 5),
                Point::new(0, 5)
            ]
        );
        assert_eq!(poly.label(), Some("title"));
    }

    #[test]
    fn test_polygon_to_rect_is_bounding_box() {
        let poly = Polygon::from_vertices(vec![
            Point::new(5, 0),
            Point::new(10, 5),
            Point::new(5, 10),
            Point::new(0, 5),
        ]);
        let shape = Shape::polygon(poly).with_label("diamond");
        let converted = shape.converted();
        assert_eq!(converted.as_rect(), Some(&rect(0, 0, 10, 10)));
        assert_eq!(converted.label(), Some("diamond"));
    }

    #[test]
    fn test_conversion_keeps_label_for_inverted_rect() {
        let inverted = Shape::rectangle(rect(20, 30, 5, 10)).with_label("x");
        let back = inverted.to_polygon().to_rectangle();
        assert_eq!(back.label(), inverted.label());
        assert_eq!(
            back.as_rect().map(Rect::normalized),
            inverted.as_rect().map(Rect::normalized)
        );
    }

    #[test]
    fn test_empty_label_clears() {
        let mut shape = Shape::rectangle(rect(0, 0, 1, 1)).with_label("word");
        assert_eq!(shape.label(), Some("word"));
        shape.set_label("");
        assert_eq!(shape.label(), None);
        assert_eq!(shape, Shape::rectangle(rect(0, 0, 1, 1)));
    }

    #[test]
    fn test_move_handle() {
        let mut r = Shape::rectangle(rect(0, 0, 10, 10));
        assert!(r.move_handle(Handle::Corner(Corner::BottomRight), Point::new(20, 15)));
        assert_eq!(r.as_rect(), Some(&rect(0, 0, 20, 15)));
        assert!(!r.move_handle(Handle::Vertex(0), Point::ORIGIN));

        let mut p = r.to_polygon();
        assert!(p.move_handle(Handle::Vertex(2), Point::new(30, 30)));
        assert_eq!(p.handle_position(Handle::Vertex(2)), Some(Point::new(30, 30)));
        assert!(!p.move_handle(Handle::Vertex(9), Point::ORIGIN));
        assert!(!p.move_handle(Handle::Corner(Corner::TopLeft), Point::ORIGIN));
    }

    #[test]
    fn test_handles() {
        let r = Shape::rectangle(rect(0, 0, 4, 2));
        let handles = r.handles();
        assert_eq!(handles.len(), 4);
        assert_eq!(handles[1], (Handle::Corner(Corner::TopRight), Point::new(4, 0)));

        let p = Shape::polygon(Polygon::new());
        assert!(p.handles().is_empty());
    }

    #[test]
    fn test_display() {
        let shape = Shape::rectangle(rect(1, 2, 3, 4)).with_label("hi");
        assert_eq!(shape.to_string(), "rectangle (1, 2)-(3, 4) \"hi\"");
        let poly = Shape::polygon(Polygon::from_vertices(vec![Point::new(0, 0), Point::new(1, 1)]));
        assert_eq!(poly.to_string(), "polygon [(0, 0), (1, 1)]");
    }
}
