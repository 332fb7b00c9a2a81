//! Light/blocker scene: drag handling, ray field ownership and frame rendering

use log::{debug, trace};

use crate::config::RayStyle;
use crate::display::{Color, InputEvent, PixelBuffer};
use crate::geometry::{CanvasSize, Disc, Point, RaySegment};
use crate::raycast::generate_rays;

/// Which disc, if any, follows the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    DraggingLight,
    DraggingShadow,
}

/// Everything the frame loop mutates
pub struct ShadowScene {
    light: Disc,
    blocker: Disc,
    rays: Vec<RaySegment>,
    ray_count: usize,
    canvas: CanvasSize,
    style: RayStyle,
    drag: DragState,
}

impl ShadowScene {
    pub fn new(
        light: Disc,
        blocker: Disc,
        ray_count: usize,
        canvas: CanvasSize,
        style: RayStyle,
    ) -> Self {
        let rays = generate_rays(&light, &blocker, ray_count, canvas);
        Self {
            light,
            blocker,
            rays,
            ray_count,
            canvas,
            style,
            drag: DragState::Idle,
        }
    }

    pub fn light(&self) -> &Disc {
        &self.light
    }

    pub fn blocker(&self) -> &Disc {
        &self.blocker
    }

    pub fn rays(&self) -> &[RaySegment] {
        &self.rays
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Apply one input event. Returns true if the ray field was rebuilt.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::MouseDown { x, y } => {
                let p = Point::new(x as f64, y as f64);
                if self.light.contains(p) {
                    self.drag = DragState::DraggingLight;
                } else if self.blocker.contains(p) {
                    self.drag = DragState::DraggingShadow;
                }
                if self.drag != DragState::Idle {
                    debug!("drag start: {:?} at ({}, {})", self.drag, x, y);
                }
                false
            },
            InputEvent::MouseUp { .. } => {
                if self.drag != DragState::Idle {
                    debug!("drag end: {:?}", self.drag);
                }
                self.drag = DragState::Idle;
                false
            },
            InputEvent::MouseMove { x, y } => {
                let disc = match self.drag {
                    DragState::Idle => return false,
                    DragState::DraggingLight => &mut self.light,
                    DragState::DraggingShadow => &mut self.blocker,
                };
                disc.move_to(x as f64, y as f64);
                self.regenerate();
                true
            },
            InputEvent::Quit | InputEvent::KeyDown(_) => false,
        }
    }

    /// Rebuild the whole ray field from the current discs
    pub fn regenerate(&mut self) {
        self.rays = generate_rays(&self.light, &self.blocker, self.ray_count, self.canvas);
        trace!(
            "regenerated {} rays (light {:?}, blocker {:?})",
            self.rays.len(),
            self.light.center,
            self.blocker.center
        );
    }

    /// Draw one frame: background, light, rays, then the blocker on top
    pub fn render(&self, buffer: &mut PixelBuffer) {
        buffer.clear(Color::BLACK);
        buffer.fill_disc(&self.light, Color::YELLOW);

        for ray in &self.rays {
            let (x0, y0) = ray.start.to_pixel();
            let (x1, y1) = ray.end.to_pixel();
            match self.style {
                RayStyle::Solid(color) => buffer.line(x0, y0, x1, y1, color),
                RayStyle::Gradient { start, end } => {
                    buffer.line_gradient(x0, y0, x1, y1, start, end);
                },
            }
        }

        buffer.fill_disc(&self.blocker, Color::GREY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, Variant};

    fn scene(variant: Variant) -> ShadowScene {
        ShadowScene::new(
            config::LIGHT,
            config::BLOCKER,
            variant.default_ray_count(),
            config::canvas(),
            variant.ray_style(),
        )
    }

    fn down(x: i32, y: i32) -> InputEvent {
        InputEvent::MouseDown { x, y }
    }

    fn up(x: i32, y: i32) -> InputEvent {
        InputEvent::MouseUp { x, y }
    }

    /// The last ray's accumulated angle lands a hair below a full turn,
    /// so its pixels may sit on row 439 instead of 440.
    fn lit_near_row_440(buffer: &PixelBuffer, x: i32) -> Option<Color> {
        (439..=440)
            .filter_map(|y| buffer.get_pixel(x, y))
            .find(|&c| c != Color::BLACK)
    }

    #[test]
    fn test_initial_field() {
        let s = scene(Variant::Solid);
        assert_eq!(s.rays().len(), 200);
        assert_eq!(s.drag_state(), DragState::Idle);
        assert_eq!(scene(Variant::Gradient).rays().len(), 400);
    }

    #[test]
    fn test_drag_light() {
        let mut s = scene(Variant::Solid);
        let before = s.rays().to_vec();

        assert!(!s.handle_event(&down(240, 440)));
        assert_eq!(s.drag_state(), DragState::DraggingLight);

        assert!(s.handle_event(&InputEvent::MouseMove { x: 250, y: 440 }));
        assert_eq!(s.light().center, Point::new(250.0, 440.0));
        assert_ne!(s.rays(), before.as_slice());

        assert!(!s.handle_event(&up(250, 440)));
        assert_eq!(s.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_blocker() {
        let mut s = scene(Variant::Solid);
        s.handle_event(&down(520, 240));
        assert_eq!(s.drag_state(), DragState::DraggingShadow);

        s.handle_event(&InputEvent::MouseMove { x: 700, y: 300 });
        assert_eq!(s.blocker().center, Point::new(700.0, 300.0));
        assert_eq!(s.light().center, Point::new(240.0, 440.0));
    }

    #[test]
    fn test_light_wins_when_discs_overlap() {
        let mut s = ShadowScene::new(
            Disc::new(100.0, 100.0, 50.0),
            Disc::new(120.0, 100.0, 50.0),
            16,
            config::canvas(),
            RayStyle::Solid(Color::WHITE),
        );
        s.handle_event(&down(110, 100));
        assert_eq!(s.drag_state(), DragState::DraggingLight);
    }

    #[test]
    fn test_click_on_empty_space_stays_idle() {
        let mut s = scene(Variant::Solid);
        s.handle_event(&down(10, 10));
        assert_eq!(s.drag_state(), DragState::Idle);

        let before = s.rays().to_vec();
        assert!(!s.handle_event(&InputEvent::MouseMove { x: 300, y: 300 }));
        assert_eq!(s.rays(), before.as_slice());
        assert_eq!(s.light().center, Point::new(240.0, 440.0));
    }

    #[test]
    fn test_release_anywhere_ends_drag() {
        for start in [(240, 440), (520, 240)] {
            let mut s = scene(Variant::Solid);
            s.handle_event(&down(start.0, start.1));
            assert_ne!(s.drag_state(), DragState::Idle);

            // Released far from both discs, e.g. a side button let go off-canvas
            s.handle_event(&up(-50, 2000));
            assert_eq!(s.drag_state(), DragState::Idle);

            let before = s.rays().to_vec();
            assert!(!s.handle_event(&InputEvent::MouseMove { x: 400, y: 100 }));
            assert_eq!(s.rays(), before.as_slice());
        }
    }

    #[test]
    fn test_move_after_release_is_ignored() {
        let mut s = scene(Variant::Solid);
        s.handle_event(&down(520, 240));
        s.handle_event(&up(520, 240));
        assert!(!s.handle_event(&InputEvent::MouseMove { x: 10, y: 10 }));
        assert_eq!(s.blocker().center, Point::new(520.0, 240.0));
    }

    #[test]
    fn test_render_layers() {
        let s = scene(Variant::Solid);
        let mut buffer = PixelBuffer::with_size(config::WIDTH, config::HEIGHT);
        buffer.clear(Color::WHITE);
        s.render(&mut buffer);

        assert_eq!(buffer.get_pixel(240, 440), Some(Color::YELLOW));
        assert_eq!(buffer.get_pixel(520, 240), Some(Color::GREY));
        // Top-right corner sits in the blocker's shadow
        assert_eq!(buffer.get_pixel(890, 5), Some(Color::BLACK));
        // Ray along +x, drawn from the light boundary to the right edge
        assert_eq!(lit_near_row_440(&buffer, 600), Some(Color::WHITE));
        assert_eq!(lit_near_row_440(&buffer, 899), Some(Color::WHITE));
    }

    #[test]
    fn test_render_gradient_fades_outward() {
        let s = scene(Variant::Gradient);
        let mut buffer = PixelBuffer::with_size(config::WIDTH, config::HEIGHT);
        s.render(&mut buffer);

        let near = lit_near_row_440(&buffer, 300).unwrap();
        let far = lit_near_row_440(&buffer, 880).unwrap();
        assert!(near.r() > far.r());
        assert_eq!(near.a(), 0xFF);
        assert_eq!(far.a(), 0xFF);
    }
}
