use std::ops::{Add, Sub};

use crate::math::vec2::Vec2;

/// A location in the 2D plane.
///
/// Structurally the same as [`Vec2`] but semantically a position rather
/// than a displacement. Equality is exact coordinate equality.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new Point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from an `[x, y]` coordinate pair.
    pub fn from_array(coords: [f64; 2]) -> Self {
        Self::new(coords[0], coords[1])
    }

    /// Returns the coordinates as an `[x, y]` pair.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculates the Euclidean distance between two points.
    pub fn distance(a: Point, b: Point) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotates the point in place by `angle` radians about `about`.
    pub fn rotate_about(&mut self, angle: f64, about: Point) {
        let s = angle.sin();
        let c = angle.cos();
        let x = self.x - about.x;
        let y = self.y - about.y;
        self.x = x * c - y * s + about.x;
        self.y = x * s + y * c + about.y;
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

// Translating a location by a displacement yields a location.
impl Add<Vec2> for Point {
    type Output = Point;

    fn add(self, rhs: Vec2) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// The difference of two locations is a displacement.
impl Sub for Point {
    type Output = Vec2;

    fn sub(self, rhs: Point) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
