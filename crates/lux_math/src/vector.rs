//! Vector helpers used by the path tracer.
//!
//! glam provides the arithmetic; these functions add the optics (reflection,
//! refraction, Fresnel) and the guarded normalization the renderer relies on.

use crate::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Normalize a vector.
///
/// # Panics
///
/// Panics if `v` has zero (or non-finite) length. A zero vector here means a
/// degenerate ray or normal upstream, which is a bug rather than a miss.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    assert!(
        len_sq > 0.0 && len_sq.is_finite(),
        "cannot normalize vector {v:?} with length^2 {len_sq}"
    );
    v / len_sq.sqrt()
}

/// Component-wise square root. Negative components map to zero.
#[inline]
pub fn sqrt(v: Vec3) -> Vec3 {
    Vec3::new(v.x.max(0.0).sqrt(), v.y.max(0.0).sqrt(), v.z.max(0.0).sqrt())
}

/// Blend two colors: `(1 - t) * a + t * b`.
#[inline]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    a * (1.0 - t) + b * t
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with normal `n` using Snell's law.
///
/// `ratio` is `eta_incident / eta_transmitted`. Returns `None` on total
/// internal reflection.
pub fn refract(v: Vec3, n: Vec3, ratio: f32) -> Option<Vec3> {
    let uv = unit_vector(v);
    let dt = uv.dot(n);
    let discriminant = 1.0 - ratio * ratio * (1.0 - dt * dt);

    if discriminant < 0.0 {
        return None;
    }

    Some(ratio * (uv - n * dt) - n * discriminant.sqrt())
}

/// Schlick's approximation of the Fresnel reflectance.
#[inline]
pub fn schlick(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = ((1.0 - refraction_index) / (1.0 + refraction_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
