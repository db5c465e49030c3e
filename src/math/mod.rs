pub mod color;
mod ray;
mod vec;

pub use color::{pack_color, unpack_color, Vec4};
pub use ray::Ray;
pub use vec::Vec3;
