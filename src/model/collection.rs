//! Ordered shape storage with a single selection.

use super::Shape;

/// The shapes annotated on one image, in drawing order.
///
/// A shape's identity is its index. At most one shape is selected; the
/// selected index is kept valid across every mutation.
#[derive(Debug, Clone, Default)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
    selected: Option<usize>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Index of the last shape, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.shapes.len().checked_sub(1)
    }

    /// Append a shape and return its index.
    pub fn append(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Remove the shape at `index`.
    ///
    /// Removing the selected shape selects the previous one (the new first
    /// shape when index 0 was removed), or nothing once the collection is
    /// empty. Removing a shape before the selection shifts it down.
    pub fn remove_at(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let removed = self.shapes.remove(index);

        self.selected = match self.selected {
            Some(_) if self.shapes.is_empty() => None,
            Some(s) if s == index => Some(s.saturating_sub(1)),
            Some(s) if s > index => Some(s - 1),
            other => other,
        };

        Some(removed)
    }

    /// Remove the last shape.
    pub fn pop(&mut self) -> Option<Shape> {
        let last = self.last_index()?;
        self.remove_at(last)
    }

    /// Replace the shape at `index`, returning the previous one.
    ///
    /// The selection is unchanged.
    pub fn replace_at(&mut self, index: usize, shape: Shape) -> Option<Shape> {
        let slot = self.shapes.get_mut(index)?;
        Some(std::mem::replace(slot, shape))
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }

    /// Select a shape by index, or clear the selection with `None`.
    ///
    /// An out-of-range index clears the selection. Returns true if the
    /// selection changed.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&i| i < self.shapes.len());
        let changed = self.selected != index;
        self.selected = index;
        changed
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.shapes.get(self.selected?)
    }

    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.get_mut(self.selected?)
    }

    /// Remove the selected shape, re-deriving the selection.
    pub fn remove_selected(&mut self) -> Option<Shape> {
        let index = self.selected?;
        self.remove_at(index)
    }
}

/// Equality compares the shapes only; the selection is editing state and not
/// part of the annotation document.
impl PartialEq for ShapeCollection {
    fn eq(&self, other: &Self) -> bool {
        self.shapes == other.shapes
    }
}

impl Eq for ShapeCollection {}

impl FromIterator<Shape> for ShapeCollection {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::from_shapes(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
