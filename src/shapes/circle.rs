use crate::math::point::Point;
use crate::shapes::rect::Rect;

/// A circle described by its center and radius.
///
/// A zero radius is legal and degenerates to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self {
            center: Point::new(x, y),
            radius,
        }
    }

    /// Exact overlap test: the centers are closer than the sum of the
    /// radii. Tangent circles (distance equal to the radii sum) do not
    /// intersect.
    pub fn intersects(&self, other: &Circle) -> bool {
        Point::distance(self.center, other.center) < self.radius + other.radius
    }

    /// The tightest axis-aligned rectangle enclosing the circle.
    pub fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.center.x,
            self.center.y,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}
