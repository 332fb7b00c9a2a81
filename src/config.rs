//! Command line options and the fixed scene layout

use clap::{Parser, ValueEnum};

use crate::display::Color;
use crate::geometry::{CanvasSize, Disc};

pub const WIDTH: u32 = 900;
pub const HEIGHT: u32 = 600;

/// Light disc at startup
pub const LIGHT: Disc = Disc::new(240.0, 440.0, 50.0);
/// Blocker disc at startup
pub const BLOCKER: Disc = Disc::new(520.0, 240.0, 100.0);

/// ~60 FPS
pub const FRAME_DELAY_MS: u32 = 16;

pub const SOLID_RAY_COUNT: usize = 200;
pub const GRADIENT_RAY_COUNT: usize = 400;

/// How rays are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Plain white rays
    Solid,
    /// Rays fading from white to deep blue
    Gradient,
}

/// Rasterization style derived from the variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayStyle {
    Solid(Color),
    Gradient { start: Color, end: Color },
}

impl Variant {
    pub fn default_ray_count(self) -> usize {
        match self {
            Variant::Solid => SOLID_RAY_COUNT,
            Variant::Gradient => GRADIENT_RAY_COUNT,
        }
    }

    pub fn ray_style(self) -> RayStyle {
        match self {
            Variant::Solid => RayStyle::Solid(Color::WHITE),
            Variant::Gradient => RayStyle::Gradient {
                start: Color::WHITE,
                end: Color::DEEP_BLUE,
            },
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "umbra", about = "Drag a light and a blocker around and watch the shadow")]
pub struct Cli {
    /// Ray rendering variant
    #[arg(long, value_enum, default_value_t = Variant::Solid)]
    pub variant: Variant,

    /// Number of rays (defaults to 200 for solid, 400 for gradient)
    #[arg(long)]
    pub rays: Option<usize>,

    /// Also lock presentation to the monitor refresh
    #[arg(long)]
    pub vsync: bool,

    /// Print the initial ray field as JSON and exit without opening a window
    #[arg(long)]
    pub dump_rays: bool,
}

impl Cli {
    pub fn ray_count(&self) -> usize {
        self.rays.unwrap_or_else(|| self.variant.default_ray_count())
    }
}

pub fn canvas() -> CanvasSize {
    CanvasSize::new(WIDTH, HEIGHT)
}
