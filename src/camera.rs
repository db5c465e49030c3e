use crate::math::{Ray, Vec3};

/// Parallel rays along -z from the z = 0 plane. The plane spans
/// `[-max_x, max_x) x [-max_y, max_y)` across the film.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrthographicCamera {
    pub max_x: f32,
    pub max_y: f32,
    pub width: usize,
    pub height: usize,
}

impl OrthographicCamera {
    pub const DIRECTION: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    pub fn new(max_x: f32, max_y: f32, width: usize, height: usize) -> Self {
        OrthographicCamera {
            max_x,
            max_y,
            width,
            height,
        }
    }

    /// Maps a pixel to normalized device coordinates. Pixel 0 maps to -1 and
    /// the last pixel stops one step short of +1, so the film center sits at
    /// pixel `width / 2`, not between pixels.
    pub fn ndc(&self, i: usize, j: usize) -> (f32, f32) {
        let (w, h) = (self.width as i64, self.height as i64);
        let x = (i as i64 * 2 - w) as f32 / w as f32;
        let y = (j as i64 * 2 - h) as f32 / h as f32;
        (x, y)
    }

    pub fn get_ray(&self, i: usize, j: usize) -> Ray {
        let (x, y) = self.ndc(i, j);
        Ray::new(
            Vec3::new(x * self.max_x, y * self.max_y, 0.0),
            Self::DIRECTION,
        )
    }
}
