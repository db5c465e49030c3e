//! Renders one sphere with per-pixel ray casts into a packed ARGB buffer.

pub mod camera;
pub mod geometry;
pub mod math;
pub mod parsing;
pub mod renderer;
pub mod vec2d;
pub mod world;

pub use renderer::{render_pass, Renderer};
pub use vec2d::PixelBuffer;
pub use world::World;
