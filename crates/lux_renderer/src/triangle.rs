//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lux_math::{Interval, Vec3};

/// Determinants below this are treated as rays parallel to the triangle.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Squared sine of the smallest corner angle a triangle may have before it
/// counts as degenerate. Relative to the edge lengths, so small triangles
/// keep their normal.
const DEGENERATE_SIN_SQ: f32 = 1e-10;

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, or zero when degenerate)
    normal: Vec3,
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let normal = face_normal(v0, v1, v2);

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    /// Create a triangle from a `[v0, v1, v2]` vertex array.
    pub fn from_vertices(vertices: [Vec3; 3], material: Material) -> Self {
        let [v0, v1, v2] = vertices;
        Self::new(v0, v1, v2, material)
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// True when the vertices are (nearly) collinear.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }
}

/// Unit normal of the plane through three points, zero for degenerate input.
fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    let (e1, e2) = (v1 - v0, v2 - v0);
    let cross = e1.cross(e2);
    if cross.length_squared() > DEGENERATE_SIN_SQ * e1.length_squared() * e2.length_squared() {
        cross.normalize()
    } else {
        Vec3::ZERO
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        if self.is_degenerate() {
            return None;
        }

        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord::new(ray, t, self.normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_triangle() -> Triangle {
        // Triangle in XY plane at z=-1
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Material::lambertian(Vec3::new(0.5, 0.5, 0.5)),
        )
    }

    fn forward() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_triangle_hit() {
        let tri = test_triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = tri.hit(&ray, forward()).unwrap();
        assert!((rec.t - 1.0).abs() < 0.001);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = test_triangle();

        // Ray pointing away
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_back_face_is_hit() {
        let tri = test_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);

        let rec = tri.hit(&ray, forward()).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
        // Face normal is fixed, not flipped towards the ray
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_barycentric_containment() {
        let tri = test_triangle();
        let inside = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(-0.5, -0.8, 0.0),
            Vec3::new(0.5, -0.8, 0.0),
            Vec3::new(0.0, 0.8, 0.0),
        ];
        let outside = [
            Vec3::new(0.0, -1.2, 0.0), // below v0-v1
            Vec3::new(-0.8, 0.5, 0.0), // left of v2-v0
            Vec3::new(0.8, 0.5, 0.0),  // right of v1-v2
            Vec3::new(0.0, 1.2, 0.0),  // above the apex
        ];

        for p in inside {
            let ray = Ray::new(p, -Vec3::Z);
            assert!(tri.hit(&ray, forward()).is_some(), "{p:?} should hit");
        }
        for p in outside {
            let ray = Ray::new(p, -Vec3::Z);
            assert!(tri.hit(&ray, forward()).is_none(), "{p:?} should miss");
        }
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = test_triangle();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, -1.0), Vec3::X);
        assert!(tri.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_degenerate_triangle_has_zero_normal() {
        let tri = Triangle::new(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(2.0, 0.0, 0.0),
            Material::lambertian(Vec3::ONE),
        );
        assert!(tri.is_degenerate());
        assert_eq!(tri.normal(), Vec3::ZERO);

        let ray = Ray::new(Vec3::new(0.5, 0.0, 1.0), -Vec3::Z);
        assert!(tri.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_small_triangle_keeps_its_normal() {
        let tri = Triangle::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(5e-4, 0.0, -1.0),
            Vec3::new(0.0, 5e-4, -1.0),
            Material::light(Vec3::ONE),
        );
        assert!(!tri.is_degenerate());
        assert!((tri.normal() - Vec3::Z).length() < 1e-6);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(1e-4, 1e-4, -1.0));
        let rec = tri.hit(&ray, forward()).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_small_emissive_triangle_traces_to_sky() {
        let mut scene = crate::Scene::new();
        scene.add(Triangle::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(5e-4, 0.0, -1.0),
            Vec3::new(0.0, 5e-4, -1.0),
            Material::light(Vec3::ONE),
        ));
        let mut rng = StdRng::seed_from_u64(42);

        // The light re-emits along +Z, which is level with the horizon
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1e-4, 1e-4, -1.0));
        let color = crate::ray_color(&scene, &ray, 5, &mut rng);
        assert!(color.is_finite());
        assert!((color - Vec3::new(0.75, 0.85, 1.0)).length() < 1e-4);
    }

    #[test]
    fn test_degenerate_light_is_never_hit() {
        let mut scene = crate::Scene::new();
        scene.add(Triangle::new(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(3.0, 1e-7, -1.0),
            Material::light(Vec3::ONE),
        ));
        let mut rng = StdRng::seed_from_u64(42);

        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let color = crate::ray_color(&scene, &ray, 5, &mut rng);
        assert_eq!(color, crate::sky_gradient(&ray));
    }
}
