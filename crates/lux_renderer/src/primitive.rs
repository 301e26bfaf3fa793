//! Closed set of geometry kinds the scene can hold.

use crate::{AaBox, HitRecord, Hittable, Material, Ray, Sphere, Triangle};
use lux_math::Interval;

/// Any geometry primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Box(AaBox),
    Triangle(Triangle),
}

impl Primitive {
    /// Material attached to this primitive.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Box(b) => b.material(),
            Primitive::Triangle(t) => t.material(),
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Primitive::Sphere(s) => s.hit(ray, ray_t),
            Primitive::Box(b) => b.hit(ray, ray_t),
            Primitive::Triangle(t) => t.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<AaBox> for Primitive {
    fn from(aabox: AaBox) -> Self {
        Primitive::Box(aabox)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
