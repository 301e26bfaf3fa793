//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use lux_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Produced fresh by every successful `hit` call. The normal is unit length
/// and oriented by the primitive that produced it (spheres and boxes point
/// outward, triangles use their fixed face normal); it is never flipped to
/// face the incoming ray.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record for a hit at `t` along `ray`.
    #[inline]
    pub fn new(ray: &Ray, t: f32, normal: Vec3, material: &'a Material) -> Self {
        Self {
            t,
            p: ray.at(t),
            normal,
            material,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    ///
    /// Returns the closest intersection, or `None` on a miss.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}
