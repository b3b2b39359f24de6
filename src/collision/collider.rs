use log::trace;

use crate::collision::geometry::{edges, minmax, overlap, project};
use crate::collision::method::{Method, UnsupportedMethodError};
use crate::shapes::{Circle, Polygon, Shape};

/// Narrow-phase overlap test over a pair of shapes.
///
/// The collider borrows its operands for the duration of a decision call
/// and never mutates them. Each call is a pure function of the pair and
/// the selected method, so a collider is safe to share across threads as
/// long as nobody mutates the shapes underneath it.
#[derive(Debug, Clone, Copy)]
pub struct Collider<'a> {
    a: &'a Shape,
    b: &'a Shape,
}

impl<'a> Collider<'a> {
    pub fn new(a: &'a Shape, b: &'a Shape) -> Self {
        Self { a, b }
    }

    /// Decides whether the two shapes overlap under `method`.
    ///
    /// Two circles are always resolved by the exact center-distance test,
    /// whatever method was requested; method selection only matters when
    /// at least one operand is a polygon.
    pub fn collide(&self, method: Method) -> bool {
        if let (Shape::Circle(a), Shape::Circle(b)) = (self.a, self.b) {
            trace!("circle pair, resolving exactly instead of {method:?}");
            return a.intersects(b);
        }
        match method {
            Method::Aabb => self.aabb(),
            Method::Sat => self.sat(),
            Method::Circle => self.bounding_circles(),
        }
    }

    /// Parses a method name (`"AABB"`, `"SAT"` or `"CIRCLE"`) and decides.
    pub fn collide_named(&self, method: &str) -> Result<bool, UnsupportedMethodError> {
        Ok(self.collide(method.parse()?))
    }

    /// Axis-aligned bounding rectangle test. A circle operand contributes
    /// the extents `[x - r, x + r, y - r, y + r]`.
    fn aabb(&self) -> bool {
        self.a.bounding_rect().overlaps(&self.b.bounding_rect())
    }

    /// Conservative bounding-circle test. May report collisions the exact
    /// tests would reject, never the reverse.
    fn bounding_circles(&self) -> bool {
        self.a.bounding_circle().intersects(&self.b.bounding_circle())
    }

    /// Separating axis test. A lone circle operand is normalized into the
    /// second slot by the match; the circle-circle combination never gets
    /// this far.
    fn sat(&self) -> bool {
        match (self.a, self.b) {
            (Shape::Polygon(a), Shape::Polygon(b)) => sat_polygons(a, b),
            (Shape::Polygon(polygon), Shape::Circle(circle))
            | (Shape::Circle(circle), Shape::Polygon(polygon)) => {
                sat_polygon_circle(polygon, circle)
            }
            (Shape::Circle(_), Shape::Circle(_)) => {
                unreachable!("circle pairs are resolved before method dispatch")
            }
        }
    }
}

/// Tests the polygon's axis-aligned extents against the circle's.
///
/// This is a two-axis approximation: the axis from the circle's center to
/// the nearest vertex is not checked, so a circle just outside a corner
/// can report as a hit.
fn sat_polygon_circle(polygon: &Polygon, circle: &Circle) -> bool {
    let [min_x, max_x, min_y, max_y] = minmax(polygon.vertices());
    let (cx, cy, r) = (circle.center.x, circle.center.y, circle.radius);
    overlap((min_x, max_x), (cx - r, cx + r)) && overlap((min_y, max_y), (cy - r, cy + r))
}

/// Exact test for convex polygons: they are disjoint iff some edge normal
/// of either polygon yields disjoint projections.
fn sat_polygons(a: &Polygon, b: &Polygon) -> bool {
    let axes = edges(a.vertices())
        .chain(edges(b.vertices()))
        .map(|edge| edge.perpendicular().normalize());
    for axis in axes {
        if !overlap(project(a.vertices(), axis), project(b.vertices(), axis)) {
            trace!("separating axis found: {axis:?}");
            return false;
        }
    }
    true
}
