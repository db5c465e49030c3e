use super::{render_pass, Renderer};

use crate::parsing::config::{Config, RendererType};
use crate::vec2d::PixelBuffer;
use crate::world::World;

use std::time::{Duration, Instant};

use anyhow::Context;
use minifb::{Key, Scale, Window, WindowOptions};
use tracing::{debug, info, trace};

const DEFAULT_TARGET_FPS: usize = 60;

/// Redraws the scene into a window every frame until it is closed.
#[derive(Default)]
pub struct PreviewRenderer {}

impl PreviewRenderer {
    pub fn new() -> Self {
        PreviewRenderer {}
    }
}

impl Renderer for PreviewRenderer {
    fn render(&self, world: &World, config: &Config) -> anyhow::Result<()> {
        let target_fps = match config.renderer {
            RendererType::Preview { target_fps } => target_fps.unwrap_or(DEFAULT_TARGET_FPS),
            _ => DEFAULT_TARGET_FPS,
        };
        let (width, height) = world.resolution();

        let mut window = Window::new(
            "arg_tracer",
            width,
            height,
            WindowOptions {
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .context("window could not be created")?;
        window.set_target_fps(target_fps);
        info!("opened {}x{} window at {} fps", width, height, target_fps);

        // outlives every frame, missed pixels carry over
        let mut film = PixelBuffer::new(width, height, 0u32);

        let mut frames = 0usize;
        let mut last_report = Instant::now();
        while window.is_open() && !window.is_key_down(Key::Escape) {
            let now = Instant::now();
            render_pass(world, &mut film);
            trace!("render pass took {:?}", now.elapsed());

            window
                .update_with_buffer(film.as_slice(), width, height)
                .context("failed to present frame")?;

            frames += 1;
            let elapsed = last_report.elapsed();
            if elapsed >= Duration::from_secs(5) {
                debug!(
                    "{:.1} fps over the last {:?}",
                    frames as f32 / elapsed.as_secs_f32(),
                    elapsed
                );
                frames = 0;
                last_report = Instant::now();
            }
        }
        info!("window closed");
        Ok(())
    }
}
