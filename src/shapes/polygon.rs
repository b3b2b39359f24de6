use std::f64::consts::TAU;
use std::fmt;

use crate::collision::geometry::minmax;
use crate::math::point::Point;
use crate::math::vec2::Vec2;
use crate::shapes::circle::Circle;
use crate::shapes::rect::Rect;

/// Identifies a polygon's vertex count and whether it was generated as a
/// regular polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolygonKind {
    pub sides: usize,
    pub regular: bool,
}

impl fmt::Display for PolygonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.regular {
            f.write_str("regular ")?;
        }
        match self.sides {
            3 => f.write_str("triangle"),
            4 => f.write_str("quadrilateral"),
            5 => f.write_str("pentagon"),
            6 => f.write_str("hexagon"),
            11 => f.write_str("hendecagon"),
            n => write!(f, "{n}-gon"),
        }
    }
}

/// A convex polygon defined by its vertices in world space, ordered
/// counter-clockwise (or clockwise, consistently).
///
/// The `position` is the polygon's reference point: the given center for a
/// regular polygon, the area centroid otherwise. Collision results are
/// unspecified for concave vertex rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    position: Point,
    kind: PolygonKind,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Point>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        let kind = PolygonKind {
            sides: vertices.len(),
            regular: false,
        };
        let position = centroid(&vertices);
        Polygon {
            vertices,
            position,
            kind,
        }
    }

    /// Generates a regular polygon: `sides` vertices evenly spaced by
    /// `2π/sides` radians on a circle of radius `circumradius` around
    /// `center`, the first vertex at `rotation` radians from the positive
    /// x-axis.
    ///
    /// Panics if `sides < 3` or `circumradius` is negative.
    pub fn regular(center: Point, circumradius: f64, rotation: f64, sides: usize) -> Self {
        assert!(sides >= 3, "Polygon must have at least 3 vertices");
        assert!(circumradius >= 0.0, "circumradius cannot be negative");
        let step = TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| {
                let angle = rotation + step * i as f64;
                center + Vec2::new(angle.cos(), angle.sin()) * circumradius
            })
            .collect();
        Polygon {
            vertices,
            position: center,
            kind: PolygonKind {
                sides,
                regular: true,
            },
        }
    }

    pub fn triangle(vertices: [Point; 3]) -> Self {
        Self::new(vertices.to_vec())
    }

    pub fn hexagon(vertices: [Point; 6]) -> Self {
        Self::new(vertices.to_vec())
    }

    pub fn hendecagon(vertices: [Point; 11]) -> Self {
        Self::new(vertices.to_vec())
    }

    pub fn regular_triangle(center: Point, circumradius: f64, rotation: f64) -> Self {
        Self::regular(center, circumradius, rotation, 3)
    }

    pub fn regular_hexagon(center: Point, circumradius: f64, rotation: f64) -> Self {
        Self::regular(center, circumradius, rotation, 6)
    }

    pub fn regular_hendecagon(center: Point, circumradius: f64, rotation: f64) -> Self {
        Self::regular(center, circumradius, rotation, 11)
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> PolygonKind {
        self.kind
    }

    /// Calculates the area of the polygon using the shoelace formula.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            let v1 = Vec2::from(self.vertices[i]);
            let v2 = Vec2::from(self.vertices[(i + 1) % n]);
            area += v1.cross(v2);
        }
        (area / 2.0).abs()
    }

    /// Rotates every vertex in place by `angle` radians about the
    /// polygon's position. The position itself is unchanged.
    pub fn rotate(&mut self, angle: f64) {
        let about = self.position;
        for v in &mut self.vertices {
            v.rotate_about(angle, about);
        }
    }

    /// Maximum distance from the polygon's position to any vertex. For a
    /// regular polygon this is the generating circumradius.
    pub fn circumradius(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| Point::distance(self.position, *v))
            .fold(0.0, f64::max)
    }

    /// The enclosing circle centered at the polygon's position.
    /// Conservative: it contains every vertex, so a test against it can
    /// only over-report collisions.
    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.position.x, self.position.y, self.circumradius())
    }

    /// The tightest axis-aligned rectangle around the vertices.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_extents(minmax(&self.vertices))
    }
}

/// Area centroid by triangle-fan decomposition, falling back to the plain
/// vertex average when the signed area vanishes (collinear rings).
fn centroid(vertices: &[Point]) -> Point {
    let origin = vertices[0];
    let mut weighted = Vec2::ZERO;
    let mut area_sum = 0.0;

    for pair in vertices[1..].windows(2) {
        let u = pair[0] - origin;
        let v = pair[1] - origin;
        let signed_area = u.cross(v) / 2.0;
        area_sum += signed_area;
        weighted += (u + v) / 3.0 * signed_area;
    }

    if area_sum.abs() < 1e-10 {
        let mut sum = Vec2::ZERO;
        for v in vertices {
            sum += Vec2::from(*v);
        }
        Point::from(sum / vertices.len() as f64)
    } else {
        origin + weighted / area_sum
    }
}
