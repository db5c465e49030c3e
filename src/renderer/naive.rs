use super::{render_pass, Renderer};

use crate::math::unpack_color;
use crate::parsing::config::{Config, RendererType};
use crate::vec2d::PixelBuffer;
use crate::world::World;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use tracing::{info, trace};

pub const DEFAULT_OUTPUT: &str = "output/arg_tracer.png";

/// Headless renderer. Runs the pass a fixed number of times on a fresh
/// buffer and saves the last frame as a png.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> Self {
        NaiveRenderer {}
    }

    pub fn render_frames(&self, world: &World, frames: usize) -> PixelBuffer {
        let (width, height) = world.resolution();
        let mut film = PixelBuffer::new(width, height, 0u32);
        for frame in 0..frames {
            let now = Instant::now();
            render_pass(world, &mut film);
            trace!("frame {} took {:?}", frame, now.elapsed());
        }
        film
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: &World, config: &Config) -> anyhow::Result<()> {
        let (frames, filename) = match &config.renderer {
            RendererType::Naive { frames, filename } => (frames.unwrap_or(1), filename.clone()),
            _ => (1, None),
        };
        let filename = PathBuf::from(filename.unwrap_or_else(|| String::from(DEFAULT_OUTPUT)));

        let (width, height) = world.resolution();
        info!(
            "rendering {} frame(s) at {}x{} without a window",
            frames, width, height
        );
        let film = self.render_frames(world, frames);
        write_png(&film, &filename)?;
        info!("wrote {}", filename.display());
        Ok(())
    }
}

/// Saves packed ARGB pixels as an RGBA png, creating parent directories.
pub fn write_png(film: &PixelBuffer, filename: &Path) -> anyhow::Result<()> {
    if let Some(parent) = filename.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("couldn't create {}", parent.display()))?;
    }
    let img = image::RgbaImage::from_fn(film.width() as u32, film.height() as u32, |x, y| {
        image::Rgba(unpack_color(film.at(x as usize, y as usize)))
    });
    img.save(filename)
        .with_context(|| format!("failed to write {}", filename.display()))?;
    Ok(())
}
