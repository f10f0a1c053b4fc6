//! Polygons defined by an ordered list of vertices.

use serde::{Deserialize, Serialize};

use crate::{Point, Rect};

/// A closed polygon.
///
/// Edges join consecutive vertices and the last vertex joins back to the
/// first. Concave and self-intersecting vertex lists are allowed; containment
/// uses the even-odd rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    /// Append a vertex after the current last one.
    pub fn push(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Replace the vertex at `index`. Returns false if the index is out of range.
    pub fn set_vertex(&mut self, index: usize, point: Point) -> bool {
        match self.vertices.get_mut(index) {
            Some(vertex) => {
                *vertex = point;
                true
            }
            None => false,
        }
    }

    /// Rigidly move every vertex by `offset`.
    pub fn translate(&mut self, offset: Point) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Tightest axis-aligned rectangle containing every vertex.
    ///
    /// An empty polygon yields a zero-size rectangle at the origin.
    pub fn bounding_rect(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::default();
        };

        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in &self.vertices[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Rect::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Point-in-polygon test using the even-odd rule (ray casting).
    ///
    /// Polygons with fewer than three vertices contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let px = f64::from(point.x);
        let py = f64::from(point.y);

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (f64::from(self.vertices[i].x), f64::from(self.vertices[i].y));
            let (xj, yj) = (f64::from(self.vertices[j].x), f64::from(self.vertices[j].y));

            if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }

        inside
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}
