pub mod circle;
pub mod polygon;
pub mod rect;

// Re-export the specific shape types
pub use circle::Circle;
pub use polygon::{Polygon, PolygonKind};
pub use rect::Rect;

/// A collision operand: one of the two shape families the engine
/// understands. [`Rect`] is deliberately absent, it only exists as a
/// derived bounding shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// The tightest axis-aligned rectangle enclosing the shape.
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Shape::Circle(circle) => circle.bounding_rect(),
            Shape::Polygon(polygon) => polygon.bounding_rect(),
        }
    }

    /// An enclosing circle: the circle itself, or the polygon's
    /// position-centered bounding circle.
    pub fn bounding_circle(&self) -> Circle {
        match self {
            Shape::Circle(circle) => *circle,
            Shape::Polygon(polygon) => polygon.bounding_circle(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::Point;

    #[test]
    fn test_shape_bounding_rect_dispatch() {
        let circle = Shape::from(Circle::new(0.0, 0.0, 1.0));
        let rect = circle.bounding_rect();
        assert_eq!(rect.width, 2.0);
        assert_eq!(rect.height, 2.0);

        let triangle = Shape::from(Polygon::triangle([
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        ]));
        let rect = triangle.bounding_rect();
        assert_eq!(rect.center, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_shape_bounding_circle_of_circle_is_identity() {
        let circle = Circle::new(1.0, 2.0, 3.0);
        assert_eq!(Shape::from(circle).bounding_circle(), circle);
    }
}
