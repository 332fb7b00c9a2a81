//! Brute-force 2D ray marching against a single circular blocker
//!
//! Rays leave the light disc's boundary and advance one pixel-length step at a
//! time until they either leave the canvas or enter the blocker. No closed-form
//! intersection: grazing (tangent) hits resolve exactly as the stepping sees them.

use std::f64::consts::TAU;

use crate::geometry::{CanvasSize, Disc, Point, RaySegment};

/// Cast a single ray from the light boundary at `angle` radians.
///
/// Stops at the first march point inside `blocker` (that point is the end), or
/// at the last march point still on the canvas when the next one would leave it.
pub fn cast_ray(light: &Disc, angle: f64, blocker: &Disc, canvas: CanvasSize) -> RaySegment {
    let (dir_y, dir_x) = angle.sin_cos();
    let start = light.boundary_point(angle);

    let mut end = start;
    let mut p = start;
    loop {
        if !canvas.contains(p) {
            break;
        }
        end = p;
        if blocker.contains(p) {
            break;
        }
        p = Point::new(p.x + dir_x, p.y + dir_y);
    }

    RaySegment::new(start, end)
}

/// Cast `count` rays evenly spread around the light.
///
/// The angle is advanced before each cast, so the casts land on
/// `step, 2*step, ..., count*step` and angle 0 itself is never sampled
/// (the last ray, at a full turn, covers that direction).
pub fn generate_rays(
    light: &Disc,
    blocker: &Disc,
    count: usize,
    canvas: CanvasSize,
) -> Vec<RaySegment> {
    if count == 0 {
        return Vec::new();
    }

    let step = TAU / count as f64;
    let mut angle = 0.0;
    let mut rays = Vec::with_capacity(count);
    for _ in 0..count {
        angle += step;
        rays.push(cast_ray(light, angle, blocker, canvas));
    }
    rays
}
