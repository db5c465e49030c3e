mod naive;
#[cfg(feature = "preview")]
mod preview;

pub use naive::NaiveRenderer;
#[cfg(feature = "preview")]
pub use preview::PreviewRenderer;

use crate::parsing::config::Config;
use crate::vec2d::PixelBuffer;
use crate::world::World;

/// Runs one full sweep over `film`. Hit pixels get `world.hit_color`. Missed
/// pixels keep their previous value unless the world has a background color.
///
/// Pixels outside the world's resolution are never touched, and a film
/// smaller than the world's resolution only receives the overlapping pixels.
pub fn render_pass(world: &World, film: &mut PixelBuffer) {
    let (width, height) = world.resolution();
    for i in 0..width {
        for j in 0..height {
            let ray = world.camera.get_ray(i, j);
            if world.sphere.hit(ray) {
                film.write_at(i, j, world.hit_color);
            } else if let Some(background) = world.background {
                film.write_at(i, j, background);
            }
        }
    }
}

pub trait Renderer {
    fn render(&self, world: &World, config: &Config) -> anyhow::Result<()>;
}
