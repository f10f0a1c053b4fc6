//! Axis-aligned rectangles with addressable corners.

use std::fmt;

use crate::Point;

/// One of the four corners of a [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in the order handles are probed.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }
}

/// An axis-aligned rectangle stored as two opposite corners.
///
/// The stored corners are kept exactly as set: moving a single corner past
/// its opposite produces an inverted rectangle, and that state is preserved
/// so a corner keeps its identity for the rest of a resize. Anything that
/// measures the rectangle (containment, intersection, area) works on
/// [`Rect::normalized`].
///
/// Width and height are `right - left` and `bottom - top`, so a rectangle
/// whose corners coincide has zero size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    top_left: Point,
    bottom_right: Point,
}

impl Rect {
    /// Create a rectangle from its top-left and bottom-right corners, as given.
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Create a canonical rectangle spanning two arbitrary points.
    pub fn spanning(a: Point, b: Point) -> Self {
        Rect::new(a, b).normalized()
    }

    /// A square of half-size `(dx, dy)` centred on `center`.
    pub fn around(center: Point, dx: i32, dy: i32) -> Self {
        let half = Point::new(dx.saturating_abs(), dy.saturating_abs());
        Rect::new(center - half, center + half)
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }

    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    /// Position of a corner, read from the stored coordinates.
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => Point::new(self.right(), self.top()),
            Corner::BottomLeft => Point::new(self.left(), self.bottom()),
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Move one corner to `point`. The opposite corner does not move.
    pub fn set_corner(&mut self, corner: Corner, point: Point) {
        match corner {
            Corner::TopLeft => self.top_left = point,
            Corner::TopRight => {
                self.bottom_right.x = point.x;
                self.top_left.y = point.y;
            }
            Corner::BottomLeft => {
                self.top_left.x = point.x;
                self.bottom_right.y = point.y;
            }
            Corner::BottomRight => self.bottom_right = point,
        }
    }

    /// Rigidly move both corners by `offset`.
    pub fn translate(&mut self, offset: Point) {
        self.top_left += offset;
        self.bottom_right += offset;
    }

    /// A copy moved by `offset`.
    pub fn translated(&self, offset: Point) -> Rect {
        Rect::new(self.top_left + offset, self.bottom_right + offset)
    }

    /// Whether the stored corners already are top-left and bottom-right.
    pub fn is_normalized(&self) -> bool {
        self.left() <= self.right() && self.top() <= self.bottom()
    }

    /// The same area with corners reordered so that left <= right and top <= bottom.
    pub fn normalized(&self) -> Rect {
        Rect::new(
            Point::new(self.left().min(self.right()), self.top().min(self.bottom())),
            Point::new(self.left().max(self.right()), self.top().max(self.bottom())),
        )
    }

    /// Width of the normalized rectangle.
    pub fn width(&self) -> i64 {
        (i64::from(self.right()) - i64::from(self.left())).abs()
    }

    /// Height of the normalized rectangle.
    pub fn height(&self) -> i64 {
        (i64::from(self.bottom()) - i64::from(self.top())).abs()
    }

    /// Area of the normalized rectangle, saturating at `i64::MAX`.
    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.height())
    }

    /// Whether the rectangle has zero area.
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Inclusive containment test against the normalized rectangle.
    pub fn contains(&self, point: Point) -> bool {
        let r = self.normalized();
        point.x >= r.left() && point.x <= r.right() && point.y >= r.top() && point.y <= r.bottom()
    }

    /// Overlap of two rectangles.
    ///
    /// Returns a zero-size rectangle when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();

        let left = a.left().max(b.left());
        let top = a.top().max(b.top());
        let right = a.right().min(b.right());
        let bottom = a.bottom().min(b.bottom());

        if right < left || bottom < top {
            let anchor = Point::new(left, top);
            return Rect::new(anchor, anchor);
        }
        Rect::new(Point::new(left, top), Point::new(right, bottom))
    }

    /// Whether the two rectangles overlap with a non-zero area.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersect(other).is_empty()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.top_left, self.bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(l: i32, t: i32, r: i32, b: i32) -> Rect {
        Rect::new(Point::new(l, t), Point::new(r, b))
    }

    #[test]
    fn test_corner_accessors() {
        let r = rect(10, 20, 50, 80);
        assert_eq!(r.corner(Corner::TopLeft), Point::new(10, 20));
        assert_eq!(r.corner(Corner::TopRight), Point::new(50, 20));
        assert_eq!(r.corner(Corner::BottomLeft), Point::new(10, 80));
        assert_eq!(r.corner(Corner::BottomRight), Point::new(50, 80));
    }

    #[test]
    fn test_set_corner_can_invert() {
        let mut r = rect(10, 10, 20, 20);
        r.set_corner(Corner::TopLeft, Point::new(30, 5));
        assert_eq!(r.corner(Corner::TopLeft), Point::new(30, 5));
        assert!(!r.is_normalized());
        assert_eq!(r.normalized(), rect(20, 5, 30, 20));
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 15);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = rect(10, 10, 110, 110);
        assert!(r.contains(Point::new(50, 50)));
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(110, 110)));
        assert!(!r.contains(Point::new(5, 50)));

        // Inverted rectangles behave like their normalized form
        let inverted = rect(110, 110, 10, 10);
        assert!(inverted.contains(Point::new(50, 50)));
    }

    #[test]
    fn test_zero_size_rect_contains_only_its_point() {
        let r = rect(5, 5, 5, 5);
        assert!(r.is_empty());
        assert!(r.contains(Point::new(5, 5)));
        assert!(!r.contains(Point::new(6, 5)));
    }

    #[test]
    fn test_intersect() {
        let a = rect(0, 0, 10, 10);
        let b = rect(-5, -5, 20, 20);
        assert_eq!(a.intersect(&b), a);
        assert_eq!(b.intersect(&a), a);

        let c = rect(5, 5, 15, 15);
        assert_eq!(a.intersect(&c), rect(5, 5, 10, 10));
        assert_eq!(a.intersect(&c).area(), 25);
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = rect(0, 0, 10, 10);
        let b = rect(20, 20, 30, 30);
        assert!(a.intersect(&b).is_empty());
        assert!(!a.intersects(&b));

        // Touching edges share no area
        let c = rect(10, 0, 20, 10);
        assert_eq!(a.intersect(&c).area(), 0);
    }

    #[test]
    fn test_around() {
        let r = Rect::around(Point::new(10, 10), 3, 4);
        assert_eq!(r, rect(7, 6, 13, 14));
        assert!(r.contains(Point::new(13, 14)));
        assert!(!r.contains(Point::new(14, 10)));
    }

    #[test]
    fn test_extreme_corners_saturate() {
        let full = rect(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(full.width(), i64::from(u32::MAX));
        assert_eq!(full.area(), i64::MAX);
        assert_eq!(full.intersect(&rect(0, 0, 10, 10)).area(), 100);

        let edge = Rect::around(Point::new(i32::MAX - 1, 20), 3, i32::MIN);
        assert_eq!(edge.right(), i32::MAX);
        assert_eq!(edge.top(), 20 - i32::MAX);
        assert_eq!(edge.bottom(), i32::MAX);
        assert!(edge.contains(Point::new(i32::MAX, 0)));
    }

    #[test]
    fn test_translate() {
        let mut r = rect(1, 2, 3, 4);
        r.translate(Point::new(10, -2));
        assert_eq!(r, rect(11, 0, 13, 2));
        assert_eq!(r.translated(Point::new(-10, 2)), rect(1, 2, 3, 4));
    }

    proptest! {
        #[test]
        fn prop_set_corner_round_trips(
            l in -1000i32..1000, t in -1000i32..1000,
            r in -1000i32..1000, b in -1000i32..1000,
            x in -1000i32..1000, y in -1000i32..1000,
            which in 0usize..4,
        ) {
            let corner = Corner::ALL[which];
            let original = rect(l, t, r, b);
            let mut moved = original;
            let p = Point::new(x, y);
            moved.set_corner(corner, p);

            prop_assert_eq!(moved.corner(corner), p);
            prop_assert_eq!(moved.corner(corner.opposite()), original.corner(corner.opposite()));

            // Adjacent corners share one axis with the moved corner and one with the opposite
            for adjacent in Corner::ALL {
                if adjacent == corner || adjacent == corner.opposite() {
                    continue;
                }
                let q = moved.corner(adjacent);
                let fixed = original.corner(corner.opposite());
                prop_assert!(
                    (q.x == p.x && q.y == fixed.y) || (q.y == p.y && q.x == fixed.x)
                );
            }
        }

        #[test]
        fn prop_intersection_within_both(
            l1 in -100i32..100, t1 in -100i32..100, r1 in -100i32..100, b1 in -100i32..100,
            l2 in -100i32..100, t2 in -100i32..100, r2 in -100i32..100, b2 in -100i32..100,
        ) {
            let a = rect(l1, t1, r1, b1);
            let b = rect(l2, t2, r2, b2);
            let inter = a.intersect(&b);
            prop_assert!(inter.area() <= a.area());
            prop_assert!(inter.area() <= b.area());
            prop_assert_eq!(inter.area(), b.intersect(&a).area());
        }
    }
}
