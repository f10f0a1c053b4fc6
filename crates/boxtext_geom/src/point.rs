//! Integer points and offsets.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A 2D integer coordinate.
///
/// Also used as an offset (the difference of two points). Arithmetic
/// saturates at the `i32` range instead of overflowing.
/// Serializes as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute coordinates of this point taken as an offset.
    pub fn manhattan_length(self) -> i32 {
        self.x.saturating_abs().saturating_add(self.y.saturating_abs())
    }

    /// Manhattan distance between two points.
    pub fn manhattan_distance(self, other: Point) -> i32 {
        (self - other).manhattan_length()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x = self.x.saturating_add(rhs.x);
        self.y = self.y.saturating_add(rhs.y);
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [i32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_arithmetic() {
        let a = Point::new(10, 20);
        let b = Point::new(4, 25);
        assert_eq!(a - b, Point::new(6, -5));
        assert_eq!(b + (a - b), a);
        assert_eq!(-(a - b), b - a);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Point::new(3, -4).manhattan_length(), 7);
        assert_eq!(Point::ORIGIN.manhattan_length(), 0);
        assert_eq!(Point::new(100, 100).manhattan_distance(Point::new(105, 100)), 5);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let far = Point::new(i32::MAX, i32::MIN);
        assert_eq!(far + Point::new(10, -10), far);
        assert_eq!(far - Point::new(-1, 1), far);
        assert_eq!(-Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));

        let mut moved = Point::new(i32::MAX - 1, 0);
        moved += Point::new(5, 0);
        assert_eq!(moved, Point::new(i32::MAX, 0));

        assert_eq!(Point::new(i32::MIN, i32::MIN).manhattan_length(), i32::MAX);
        assert_eq!(Point::new(i32::MAX, 0).manhattan_distance(Point::new(i32::MIN, 0)), i32::MAX);
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(7, -3)).unwrap();
        assert_eq!(json, "[7,-3]");
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Point::new(7, -3));
        assert!(serde_json::from_str::<Point>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Point>("[1.5, 2]").is_err());
    }
}
