//! Axis-aligned box primitive.
//!
//! Uses the slab method: each axis clips the running `[t_min, t_max]`
//! interval, and the axis that clipped last decides the face normal.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lux_math::{Interval, Vec3};

/// Direction components smaller than this are treated as parallel to a slab.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An axis-aligned box primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct AaBox {
    min: Vec3,
    max: Vec3,
    material: Material,
}

/// A face crossed by the ray: axis index and outward sign.
#[derive(Debug, Clone, Copy)]
struct Face {
    axis: usize,
    sign: f32,
}

impl Face {
    fn normal(self) -> Vec3 {
        let mut n = Vec3::ZERO;
        n[self.axis] = self.sign;
        n
    }
}

impl AaBox {
    /// Create a new box from two opposite corners, in any order.
    pub fn new(a: Vec3, b: Vec3, material: Material) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            material,
        }
    }

    /// Create a box from its center and half extents.
    pub fn from_center(center: Vec3, half_size: Vec3, material: Material) -> Self {
        Self::new(center - half_size, center + half_size, material)
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for AaBox {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let origin = ray.origin();
        let direction = ray.direction();

        let mut t_min = ray_t.min;
        let mut t_max = ray_t.max;
        let mut entry: Option<Face> = None;
        let mut exit: Option<Face> = None;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];

            if d.abs() < PARALLEL_EPSILON {
                // Parallel to this slab: either always inside it or never
                if !Interval::new(self.min[axis], self.max[axis]).contains(o) {
                    return None;
                }
                continue;
            }

            let inv_d = 1.0 / d;
            let mut t0 = (self.min[axis] - o) * inv_d;
            let mut t1 = (self.max[axis] - o) * inv_d;

            // Travelling towards -axis enters through the max face
            let mut entry_sign = -1.0;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
                entry_sign = 1.0;
            }

            if t0 > t_min {
                t_min = t0;
                entry = Some(Face { axis, sign: entry_sign });
            }
            if t1 < t_max {
                t_max = t1;
                exit = Some(Face { axis, sign: -entry_sign });
            }

            if t_max <= t_min {
                return None;
            }
        }

        // Entering from outside, or leaving when the origin is inside the box
        let (t, face) = match (entry, exit) {
            (Some(face), _) => (t_min, face),
            (None, Some(face)) => (t_max, face),
            (None, None) => return None,
        };

        Some(HitRecord::new(ray, t, face.normal(), &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> AaBox {
        AaBox::new(
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
            Material::lambertian(Vec3::splat(0.5)),
        )
    }

    fn forward() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_rays_towards_center_hit_expected_face() {
        let b = unit_box();
        let axes = [Vec3::X, Vec3::Y, Vec3::Z];

        for axis in axes {
            for sign in [1.0_f32, -1.0] {
                let face_normal = axis * sign;
                let origin = face_normal * 5.0;
                let ray = Ray::new(origin, b.center() - origin);

                let rec = b.hit(&ray, forward()).expect("ray aimed at center must hit");
                assert_eq!(rec.normal, face_normal, "origin {origin:?}");
                // Face is 4 units away along a direction of length 5
                assert!((rec.t - 0.8).abs() < 1e-5);
                assert!((rec.p - face_normal).length() < 1e-5);
            }
        }
    }

    #[test]
    fn test_oblique_ray_reports_last_entered_face() {
        let b = unit_box();
        // Reaches x=-1 at t=1, but y=-1 only later at t=1.5
        let ray = Ray::new(Vec3::new(-2.0, -2.5, 0.0), Vec3::new(1.0, 1.0, 0.0));

        let rec = b.hit(&ray, forward()).unwrap();
        assert_eq!(rec.normal, -Vec3::Y);
        assert!((rec.t - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_miss_beside_box() {
        let b = unit_box();
        let ray = Ray::new(Vec3::new(3.0, 0.0, -5.0), Vec3::Z);
        assert!(b.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_parallel_ray_on_face_plane_hits() {
        let b = unit_box();
        // Slab bounds are inclusive for rays parallel to them
        let ray = Ray::new(Vec3::new(1.0, 0.0, 5.0), -Vec3::Z);

        let rec = b.hit(&ray, forward()).unwrap();
        assert_eq!(rec.normal, Vec3::Z);
        assert!((rec.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss_pointing_away() {
        let b = unit_box();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(b.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_miss_beyond_t_max() {
        let b = unit_box();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        assert!(b.hit(&ray, Interval::new(0.001, 3.0)).is_none());
    }

    #[test]
    fn test_origin_inside_hits_exit_face() {
        let b = unit_box();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));

        let rec = b.hit(&ray, forward()).unwrap();
        assert_eq!(rec.normal, -Vec3::Z);
        assert!((rec.t - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_ray_leaving_surface_does_not_self_intersect() {
        let b = unit_box();
        // Scattered ray starting on the +Y face heading outwards
        let ray = Ray::new(Vec3::new(0.2, 1.0, 0.3), Vec3::new(0.1, 1.0, -0.2));
        assert!(b.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_corners_in_any_order() {
        let mat = Material::lambertian(Vec3::ONE);
        let b = AaBox::new(Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, 0.0), mat);
        assert_eq!(b.min(), Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max(), Vec3::new(1.0, 1.0, 2.0));
    }
}
