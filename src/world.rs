use crate::camera::OrthographicCamera;
use crate::geometry::Sphere;
use crate::math::{pack_color, Vec3};
use crate::parsing::config::{CameraSettings, Config, Resolution};

/// Everything the render pass reads. Built once and never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct World {
    pub sphere: Sphere,
    pub camera: OrthographicCamera,
    pub hit_color: u32,
    pub background: Option<u32>,
}

impl World {
    /// Validates `config` first, so a world never holds a non-positive radius
    /// or a resolution the pixel buffer can't allocate.
    pub fn from_config(config: &Config) -> anyhow::Result<World> {
        config.validate()?;
        Ok(World::build(config))
    }

    fn build(config: &Config) -> World {
        let Resolution { width, height } = config.resolution;
        let CameraSettings { max_x, max_y } = config.camera;
        World {
            sphere: Sphere::new(config.sphere.radius, Vec3::from(config.sphere.center)),
            camera: OrthographicCamera::new(max_x, max_y, width, height),
            hit_color: pack_color(config.hit_color),
            background: config.background.map(pack_color),
        }
    }

    pub fn resolution(&self) -> (usize, usize) {
        (self.camera.width, self.camera.height)
    }
}

impl Default for World {
    fn default() -> Self {
        World::build(&Config::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::color::RED;

    #[test]
    fn test_default_world() {
        let world = World::default();
        assert_eq!(world.resolution(), (640, 640));
        assert_eq!(world.sphere.origin, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(world.sphere.radius, 1.0);
        assert_eq!(world.camera.max_x, 5.0);
        assert_eq!(world.camera.max_y, 5.0);
        assert_eq!(world.hit_color, RED);
        assert_eq!(world.background, None);
        assert_eq!(World::from_config(&Config::default()).unwrap(), world);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = Config::default();
        config.sphere.radius = -1.0;
        assert!(World::from_config(&config).is_err());

        let mut config = Config::default();
        config.resolution.width = usize::MAX;
        config.resolution.height = 2;
        assert!(World::from_config(&config).is_err());
    }
}
