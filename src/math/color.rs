//! Normalized RGBA colors and their packed 32 bit ARGB form.
//!
//! Kept apart from [`crate::math::vec`] so the 4-component dot product can't
//! leak into the intersection math.

use super::Vec3;

use serde::Deserialize;

pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;

/// RGBA color with every channel nominally in [0, 1]. `w` is alpha.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }
    pub const ZERO: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);
    pub const OPAQUE_RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

    pub fn dot(self, other: Vec4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn pack(self) -> u32 {
        pack_color(self)
    }
}

impl From<(Vec3, f32)> for Vec4 {
    fn from((rgb, w): (Vec3, f32)) -> Vec4 {
        Vec4::new(rgb.x, rgb.y, rgb.z, w)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(arr: [f32; 4]) -> Vec4 {
        Vec4::new(arr[0], arr[1], arr[2], arr[3])
    }
}

fn to_channel(v: f32) -> u32 {
    // truncates. `as` saturates out of range values to 0 or 255 and maps NaN to 0.
    (v * 255.0) as u8 as u32
}

/// Packs as `(a << 24) | (r << 16) | (g << 8) | b`.
pub fn pack_color(color: Vec4) -> u32 {
    let a = to_channel(color.w);
    let r = to_channel(color.x);
    let g = to_channel(color.y);
    let b = to_channel(color.z);
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Splits a packed ARGB value into `[r, g, b, a]` bytes.
pub fn unpack_color(packed: u32) -> [u8; 4] {
    let [a, r, g, b] = packed.to_be_bytes();
    [r, g, b, a]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pack_extremes() {
        assert_eq!(pack_color(Vec4::ZERO), 0x00000000);
        assert_eq!(pack_color(Vec4::new(1.0, 1.0, 1.0, 1.0)), WHITE);
        assert_eq!(Vec4::OPAQUE_RED.pack(), RED);
        assert_eq!(Vec4::new(0.0, 1.0, 0.0, 1.0).pack(), GREEN);
        assert_eq!(Vec4::new(0.0, 0.0, 1.0, 1.0).pack(), BLUE);
    }

    #[test]
    fn test_pack_truncates() {
        // 0.4 * 255 = 102.000..., 0.999 * 255 = 254.745
        let packed = pack_color(Vec4::new(0.4, 0.999, 0.5, 1.0));
        assert_eq!(packed, 0xFF_66_FE_7F);
    }

    #[test]
    fn test_pack_saturates_out_of_range() {
        let packed = pack_color(Vec4::new(2.0, -1.0, f32::NAN, 1.5));
        assert_eq!(packed, 0xFF_FF_00_00);
    }

    #[test]
    fn test_unpack() {
        assert_eq!(unpack_color(RED), [255, 0, 0, 255]);
        assert_eq!(unpack_color(0x80_10_20_30), [0x10, 0x20, 0x30, 0x80]);
    }

    #[test]
    fn test_from_vec3_and_dot() {
        let c = Vec4::from((Vec3::new(0.25, 0.5, 0.75), 1.0));
        assert_eq!(c, Vec4::new(0.25, 0.5, 0.75, 1.0));
        assert_eq!(c.dot(Vec4::new(0.0, 0.0, 0.0, 2.0)), 2.0);
    }
}
