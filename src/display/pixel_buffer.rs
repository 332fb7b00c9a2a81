use super::Color;
use crate::geometry::{Disc, Point};

// ============================================================================
// PixelBuffer
// ============================================================================

/// Row-major ARGB8888 canvas for software rendering.
/// Every drawing primitive funnels through `set_pixel`, which clips silently.
pub struct PixelBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a black, opaque pixel buffer
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Color::BLACK; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Clear to a solid color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Set a single pixel (bounds checked, out-of-range writes are dropped)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color;
        }
    }

    /// Read a pixel from the buffer (bounds checked)
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Fill a disc by scanning its bounding box.
    ///
    /// The box is `center ± radius` truncated toward zero, inclusive on both
    /// ends; a pixel is painted iff its integer coordinates pass `Disc::contains`.
    pub fn fill_disc(&mut self, disc: &Disc, color: Color) {
        let x_min = (disc.center.x - disc.radius) as i32;
        let x_max = (disc.center.x + disc.radius) as i32;
        let y_min = (disc.center.y - disc.radius) as i32;
        let y_max = (disc.center.y + disc.radius) as i32;

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                if disc.contains(Point::new(x as f64, y as f64)) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw a line using Bresenham's algorithm (all octants, per-pixel clipping)
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        for (x, y) in BresenhamLine::new(x0, y0, x1, y1) {
            self.set_pixel(x, y, color);
        }
    }

    /// Bresenham line whose color fades from `start` to `end`.
    ///
    /// The blend factor is the euclidean distance from `(x0, y0)` divided by
    /// the segment length, or 0 for a zero-length segment.
    pub fn line_gradient(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        start: Color,
        end: Color,
    ) {
        let origin = Point::new(x0 as f64, y0 as f64);
        let length = origin.distance_to(&Point::new(x1 as f64, y1 as f64));

        for (x, y) in BresenhamLine::new(x0, y0, x1, y1) {
            let t = if length > 0.0 {
                origin.distance_to(&Point::new(x as f64, y as f64)) / length
            } else {
                0.0
            };
            self.set_pixel(x, y, start.lerp(end, t));
        }
    }

    /// Raw pixel storage, row-major
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Bytes for texture upload (native-endian ARGB8888)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

// ============================================================================
// Bresenham iterator
// ============================================================================

/// Integer error-accumulation walk from `(x0, y0)` to `(x1, y1)`, both inclusive
struct BresenhamLine {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 - x0).abs();
        let dy = -((y1 - y0).abs());
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}
