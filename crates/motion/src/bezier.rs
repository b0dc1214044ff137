//! Bezier curve evaluation.
//!
//! Pure Bernstein blends; randomness enters only through control-point
//! placement upstream in the trajectory generator.

use ghosthand_core_types::Point;

/// Second-order bezier at parameter `t ∈ [0, 1]`.
pub fn quad_bezier(t: f64, p0: Point, cp: Point, p1: Point) -> Point {
    let u = 1.0 - t;
    Point {
        x: u * u * p0.x + 2.0 * t * u * cp.x + t * t * p1.x,
        y: u * u * p0.y + 2.0 * t * u * cp.y + t * t * p1.y,
    }
}

/// Third-order bezier at parameter `t ∈ [0, 1]`.
pub fn cubic_bezier(t: f64, p0: Point, c1: Point, c2: Point, p1: Point) -> Point {
    let u = 1.0 - t;
    Point {
        x: p0.x * u * u * u + 3.0 * c1.x * t * u * u + 3.0 * c2.x * t * t * u + p1.x * t * t * t,
        y: p0.y * u * u * u + 3.0 * c1.y * t * u * u + 3.0 * c2.y * t * t * u + p1.y * t * t * t,
    }
}
