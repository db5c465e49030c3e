use crate::math::{Vec3, Vec4};

use anyhow::{ensure, Context};
use serde::Deserialize;

pub const SCREEN_WIDTH: usize = 640;
pub const SCREEN_HEIGHT: usize = 640;
/// Upper bound on `width * height`, 256 MiB of packed pixels.
pub const MAX_PIXELS: usize = 1 << 26;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// World space half extents of the film plane.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub max_x: f32,
    pub max_y: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            max_x: 5.0,
            max_y: 5.0,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct SphereSettings {
    pub center: [f32; 3],
    pub radius: f32,
}

impl Default for SphereSettings {
    fn default() -> Self {
        SphereSettings {
            center: [0.0, 0.0, -10.0],
            radius: 1.0,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive {
        frames: Option<usize>,
        filename: Option<String>,
    },
    Preview {
        target_fps: Option<usize>,
    },
}

impl Default for RendererType {
    fn default() -> Self {
        RendererType::Preview { target_fps: None }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct TOMLConfig {
    pub resolution: Option<Resolution>,
    pub camera: Option<CameraSettings>,
    pub sphere: Option<SphereSettings>,
    pub hit_color: Option<Vec4>,
    pub background: Option<Vec4>,
    pub renderer: Option<RendererType>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub resolution: Resolution,
    pub camera: CameraSettings,
    pub sphere: SphereSettings,
    pub hit_color: Vec4,
    // None leaves missed pixels untouched
    pub background: Option<Vec4>,
    pub renderer: RendererType,
}

impl Default for Config {
    fn default() -> Self {
        Config::from(TOMLConfig::default())
    }
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            resolution: data.resolution.unwrap_or_default(),
            camera: data.camera.unwrap_or_default(),
            sphere: data.sphere.unwrap_or_default(),
            hit_color: data.hit_color.unwrap_or(Vec4::OPAQUE_RED),
            background: data.background,
            renderer: data.renderer.unwrap_or_default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        let Resolution { width, height } = self.resolution;
        ensure!(
            width > 0 && height > 0,
            "resolution must be non-zero, got {}x{}",
            width,
            height
        );
        ensure!(
            width <= u32::MAX as usize && height <= u32::MAX as usize,
            "resolution {}x{} is too large",
            width,
            height
        );
        let pixels = width.checked_mul(height);
        ensure!(
            pixels.is_some_and(|p| p <= MAX_PIXELS),
            "resolution {}x{} exceeds the limit of {} pixels",
            width,
            height,
            MAX_PIXELS
        );
        let radius = self.sphere.radius;
        ensure!(
            radius.is_finite() && radius > 0.0,
            "sphere radius must be positive and finite, got {}",
            radius
        );
        ensure!(
            Vec3::from(self.sphere.center).norm_squared().is_finite(),
            "sphere center must be finite, got {:?}",
            self.sphere.center
        );
        let CameraSettings { max_x, max_y } = self.camera;
        ensure!(
            max_x.is_finite() && max_x > 0.0 && max_y.is_finite() && max_y > 0.0,
            "camera extents must be positive and finite, got ({}, {})",
            max_x,
            max_y
        );
        if let RendererType::Naive {
            frames: Some(frames),
            ..
        } = &self.renderer
        {
            ensure!(*frames > 0, "naive renderer needs at least one frame");
        }
        Ok(())
    }
}

pub fn parse_config(input: &str) -> anyhow::Result<Config> {
    let data: TOMLConfig = toml::from_str(input).context("failed to parse config")?;
    let config = Config::from(data);
    config.validate()?;
    Ok(config)
}
