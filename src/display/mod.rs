mod color;
mod pixel_buffer;

pub use color::Color;
pub use pixel_buffer::PixelBuffer;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, TimerSubsystem};

use crate::error::AppError;

/// SDL window, renderer, timer and event source
pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    timer: TimerSubsystem,
    width: u32,
    height: u32,
}

/// Streaming texture the pixel buffer is uploaded into each frame
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    MouseMove {
        x: i32,
        y: i32,
    },
    /// Any mouse button, side buttons included
    MouseDown {
        x: i32,
        y: i32,
    },
    MouseUp {
        x: i32,
        y: i32,
    },
}

impl Display {
    /// Create a centered window of the given size.
    /// vsync=true additionally locks presentation to the monitor refresh.
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), AppError> {
        let sdl_context = sdl2::init().map_err(AppError::VideoInit)?;
        let video_subsystem = sdl_context.video().map_err(AppError::VideoInit)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| AppError::WindowCreation(e.to_string()))?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder
            .build()
            .map_err(|e| AppError::Renderer(e.to_string()))?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(AppError::EventPump)?;
        let timer = sdl_context.timer().map_err(AppError::Timer)?;

        Ok((
            Self {
                canvas,
                event_pump,
                timer,
                width,
                height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        buffer: &PixelBuffer,
    ) -> Result<(), AppError> {
        debug_assert_eq!((target.width, target.height), (buffer.width(), buffer.height()));
        target
            .texture
            .update(None, buffer.as_bytes(), (buffer.width() * 4) as usize)
            .map_err(|e| AppError::Present(e.to_string()))?;

        self.canvas
            .copy(&target.texture, None, None)
            .map_err(AppError::Present)?;
        self.canvas.present();
        Ok(())
    }

    /// Drain every pending event without blocking
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            if let Some(input) = translate_event(event) {
                events.push(input);
            }
        }

        events
    }

    /// Coarse frame pacing sleep
    pub fn delay(&mut self, ms: u32) {
        self.timer.delay(ms);
    }
}

impl<'a> RenderTarget<'a> {
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, AppError> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| AppError::Texture(e.to_string()))?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}

/// Map an SDL event onto the subset the scene understands
fn translate_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(k), ..
        } => Some(InputEvent::KeyDown(k)),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMove { x, y }),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::MouseDown { x, y }),
        Event::MouseButtonUp { x, y, .. } => Some(InputEvent::MouseUp { x, y }),
        _ => None,
    }
}
