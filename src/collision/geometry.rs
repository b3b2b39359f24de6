//! Projection and interval helpers shared by the collision methods.

use crate::math::point::Point;
use crate::math::vec2::Vec2;

/// Edge displacement vectors of a closed vertex ring: vertex `i` to vertex
/// `i + 1`, wrapping around for the last edge. Lazy and restartable, a pure
/// function of its input.
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = Vec2> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| vertices[(i + 1) % n] - vertices[i])
}

/// Projects every vertex onto `axis` (via dot product) and returns the
/// covered `(min, max)` scalar interval.
pub fn project(vertices: &[Point], axis: Vec2) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in vertices {
        let p = Vec2::from(*v).dot(axis);
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}

/// Axis-aligned extents `[min_x, max_x, min_y, max_y]` over a vertex set.
pub fn minmax(vertices: &[Point]) -> [f64; 4] {
    let mut extents = [
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    for v in vertices {
        extents[0] = extents[0].min(v.x);
        extents[1] = extents[1].max(v.x);
        extents[2] = extents[2].min(v.y);
        extents[3] = extents[3].max(v.y);
    }
    extents
}

/// Strict interval intersection. Intervals that merely touch at an
/// endpoint do not overlap; the AABB rectangle test shares this
/// convention.
pub fn overlap(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 < b.1 && a.1 > b.0
}
