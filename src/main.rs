use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};
use sdl2::keyboard::Keycode;

use umbra::config::{self, Cli, FRAME_DELAY_MS};
use umbra::display::{Display, InputEvent, PixelBuffer, RenderTarget};
use umbra::error::AppError;
use umbra::raycast::generate_rays;
use umbra::scene::ShadowScene;
use umbra::util::FpsCounter;

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u64 = 120;

/// Write the initial ray field to stdout as pretty JSON
fn dump_rays(ray_count: usize) -> Result<(), AppError> {
    let rays = generate_rays(
        &config::LIGHT,
        &config::BLOCKER,
        ray_count,
        config::canvas(),
    );
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &rays)?;
    writeln!(stdout)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let canvas = config::canvas();
    let ray_count = cli.ray_count();

    let (mut display, texture_creator) =
        Display::with_options("umbra", canvas.width, canvas.height, cli.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, display.width(), display.height())?;
    let mut buffer = PixelBuffer::with_size(display.width(), display.height());

    let mut scene = ShadowScene::new(
        config::LIGHT,
        config::BLOCKER,
        ray_count,
        canvas,
        cli.variant.ray_style(),
    );
    let mut fps_counter = FpsCounter::new(60);

    info!("=== umbra ===");
    info!("Resolution: {}x{}", canvas.width, canvas.height);
    info!("Variant: {:?}, {} rays", cli.variant, scene.rays().len());
    info!("Controls:");
    info!("  Drag the yellow disc  - Move the light");
    info!("  Drag the grey disc    - Move the blocker");
    info!("  Escape / close window - Quit");

    'main: loop {
        let avg_fps = fps_counter.tick();
        if fps_counter.frames() % FPS_LOG_INTERVAL == 0 {
            let (min_fps, max_fps) = fps_counter.min_max_fps();
            debug!(
                "FPS {:.0} avg  {:.0} min  {:.0} max  {:.1}ms",
                avg_fps,
                min_fps,
                max_fps,
                fps_counter.avg_frame_time_ms()
            );
        }

        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                _ => {
                    scene.handle_event(&event);
                },
            }
        }

        scene.render(&mut buffer);
        display.present(&mut target, &buffer)?;
        display.delay(FRAME_DELAY_MS);
    }

    info!(
        "Quit with light at {:?}, blocker at {:?}",
        scene.light().center,
        scene.blocker().center
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = if cli.dump_rays {
        dump_rays(cli.ray_count())
    } else {
        run(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        },
    }
}
