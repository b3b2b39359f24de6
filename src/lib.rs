pub mod collision;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{Collider, Method, UnsupportedMethodError};
pub use math::point::Point;
pub use math::vec2::Vec2;
pub use shapes::{Circle, Polygon, PolygonKind, Rect, Shape};
