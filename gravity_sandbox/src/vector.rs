//! Planar vector helpers used by the force law

use glam::Vec2;
use std::f32::consts::PI;

/// Split a magnitude along `angle` (radians) into x/y components.
pub fn component_along(magnitude: f32, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(magnitude * cos, magnitude * sin)
}

/// Direction of the vector from `b` to `a`, full four-quadrant range.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    d.y.atan2(d.x)
}

/// Quadrant-limited direction from `b` to `a`: `atan(dy/dx)`, shifted by a
/// half-turn when `dx < 0`.
///
/// Returns `None` when `a.x == b.x`, where the slope is undefined.
pub fn legacy_angle_between(a: Vec2, b: Vec2) -> Option<f32> {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    if dx == 0.0 {
        return None;
    }

    let angle = (dy / dx).atan();
    Some(if dx < 0.0 { angle + PI } else { angle })
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    (dx * dx + dy * dy).sqrt()
}
