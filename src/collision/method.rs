use std::str::FromStr;

use thiserror::Error;

/// Returned when a collision method name is none of `AABB`, `SAT`,
/// `CIRCLE`. Carries the offending name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported collision detection method: {0:?}")]
pub struct UnsupportedMethodError(pub String);

/// Selects the algorithm used by [`Collider::collide`](crate::Collider::collide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Axis-aligned bounding rectangle overlap.
    Aabb,
    /// Separating axis test over the polygons' edge normals.
    #[default]
    Sat,
    /// Conservative bounding-circle distance test.
    Circle,
}

impl FromStr for Method {
    type Err = UnsupportedMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AABB" => Ok(Method::Aabb),
            "SAT" => Ok(Method::Sat),
            "CIRCLE" => Ok(Method::Circle),
            other => Err(UnsupportedMethodError(other.to_string())),
        }
    }
}
