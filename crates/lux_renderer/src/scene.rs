//! Scene: an ordered list of primitives intersected by linear scan.

use crate::{HitRecord, Hittable, Material, Primitive, Ray, Triangle};
use lux_math::{Interval, Vec3};

/// An ordered collection of primitives.
///
/// When two surfaces are exactly equidistant the earliest-added one wins,
/// since later hits must be strictly closer to replace it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Insert a triangle soup, one triangle per `[v0, v1, v2]` entry.
    pub fn add_triangles(&mut self, triangles: &[[Vec3; 3]], material: Material) {
        self.primitives.reserve(triangles.len());
        for &vertices in triangles {
            self.add(Triangle::from_vertices(vertices, material));
        }
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for primitive in &self.primitives {
            if let Some(rec) = primitive.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
