use crate::math::{Ray, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Vec3,
}

impl Sphere {
    pub fn new(radius: f32, origin: Vec3) -> Sphere {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        Sphere { radius, origin }
    }

    /// `b * b - c` of the intersection quadratic, assuming a unit length direction.
    /// Non-negative means the ray's line meets the sphere.
    pub fn discriminant(&self, r: Ray) -> f32 {
        let omc = r.origin - self.origin;
        let b = r.direction * omc;
        let c = omc * omc - self.radius * self.radius;
        b * b - c
    }

    /// Tangent rays count as hits.
    pub fn hit(&self, r: Ray) -> bool {
        self.discriminant(r) >= 0.0
    }
}
