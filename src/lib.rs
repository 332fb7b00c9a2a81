//! umbra: drag a light disc and a blocker disc around a canvas and watch the
//! shadow the blocker casts. Rays are marched one step at a time from the
//! light's boundary and rasterized with Bresenham into an ARGB pixel buffer
//! that SDL2 presents.

pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod raycast;
pub mod scene;
pub mod util;
