//! Packed 32-bit ARGB colors

use bytemuck::{Pod, Zeroable};

/// A packed `0xAARRGGBB` color, laid out to match SDL's ARGB8888 texture format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF000000);
    pub const WHITE: Color = Color(0xFFFFFFFF);
    pub const YELLOW: Color = Color(0xFFFFD700);
    pub const GREY: Color = Color(0xFFA9A9A9);
    /// Far end of the gradient ray variant
    pub const DEEP_BLUE: Color = Color(0xFF0A2A8C);

    /// Opaque color from channels
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Per-channel linear interpolation, alpha forced opaque.
    /// `t` is clamped to [0, 1]; each channel truncates toward zero.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |s: u8, e: u8| (s as f64 + (e as f64 - s as f64) * t) as u8;
        Color::rgb(
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
        )
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.0
    }
}
