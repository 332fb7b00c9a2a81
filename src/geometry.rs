//! Geometry primitives: points, discs, ray segments and the canvas extent

use serde::{Deserialize, Serialize};

/// A point in canvas space (pixels, origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance (no sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Truncate toward zero into pixel coordinates
    #[inline]
    pub fn to_pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// A circle used both as the light source and as the blocker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub center: Point,
    pub radius: f64,
}

impl Disc {
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
        }
    }

    /// Point-in-circle test, boundary inclusive
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.distance_squared(&self.center) <= self.radius * self.radius
    }

    /// Point on the boundary at `angle` radians
    pub fn boundary_point(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.center = Point::new(x, y);
    }
}

/// One cast ray, from the light's boundary to where it stopped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaySegment {
    pub start: Point,
    pub end: Point,
}

impl RaySegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if `p` lies in `[0, width) x [0, height)`. NaN coordinates are outside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..self.width as f64).contains(&p.x) && (0.0..self.height as f64).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_matches_squared_distance() {
        let disc = Disc::new(520.0, 240.0, 100.0);
        for y in (100..380).step_by(7) {
            for x in (380..660).step_by(7) {
                let p = Point::new(x as f64 + 0.25, y as f64 - 0.5);
                let dx = p.x - 520.0;
                let dy = p.y - 240.0;
                assert_eq!(disc.contains(p), dx * dx + dy * dy <= 100.0 * 100.0);
            }
        }
    }

    #[test]
    fn test_contains_boundary_inclusive() {
        let disc = Disc::new(10.0, 10.0, 5.0);
        assert!(disc.contains(Point::new(15.0, 10.0)));
        assert!(disc.contains(Point::new(10.0, 5.0)));
        assert!(!disc.contains(Point::new(15.0001, 10.0)));
    }

    #[test]
    fn test_zero_radius_disc_contains_only_center() {
        let disc = Disc::new(3.0, 4.0, 0.0);
        assert!(disc.contains(Point::new(3.0, 4.0)));
        assert!(!disc.contains(Point::new(3.0, 4.1)));
    }

    #[test]
    fn test_boundary_point_on_circle() {
        let disc = Disc::new(240.0, 440.0, 50.0);
        for i in 0..16 {
            let angle = i as f64 * std::f64::consts::PI / 8.0;
            let p = disc.boundary_point(angle);
            assert!((p.distance_to(&disc.center) - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_canvas_contains_half_open() {
        let canvas = CanvasSize::new(900, 600);
        assert!(canvas.contains(Point::new(0.0, 0.0)));
        assert!(canvas.contains(Point::new(899.99, 599.99)));
        assert!(!canvas.contains(Point::new(900.0, 10.0)));
        assert!(!canvas.contains(Point::new(10.0, 600.0)));
        assert!(!canvas.contains(Point::new(-0.001, 10.0)));
        assert!(!canvas.contains(Point::new(f64::NAN, 10.0)));
    }

    #[test]
    fn test_ray_segment_json_shape() {
        let ray = RaySegment::new(Point::new(1.0, 2.5), Point::new(3.0, 4.0));
        let json = serde_json::to_value(ray).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"start": {"x": 1.0, "y": 2.5}, "end": {"x": 3.0, "y": 4.0}})
        );
    }

    #[test]
    fn test_to_pixel_truncates_toward_zero() {
        assert_eq!(Point::new(899.7, 0.2).to_pixel(), (899, 0));
        assert_eq!(Point::new(-0.5, 12.9).to_pixel(), (0, 12));
    }
}
