//! Surface materials and their scattering models.

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_in_unit_sphere};
use crate::Ray;
use lux_math::{reflect, refract, schlick, unit_vector, Color};
use rand::RngCore;

/// Refractive index of the medium surrounding every dielectric.
pub const AIR_REFRACTIVE_INDEX: f32 = 1.0;

/// Result of a scatter event.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Color multiplier for the continued path, or the terminal radiance
    /// when the path stops here.
    pub attenuation: Color,
    /// The continued ray, `None` if the path terminates at this surface.
    pub scattered: Option<Ray>,
}

impl ScatterResult {
    fn scattered(attenuation: Color, ray: Ray) -> Self {
        Self {
            attenuation,
            scattered: Some(ray),
        }
    }

    fn absorbed(attenuation: Color) -> Self {
        Self {
            attenuation,
            scattered: None,
        }
    }
}

/// Materials describe how light interacts with surfaces.
///
/// Materials are small immutable values; every primitive owns a copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface.
    Lambertian { albedo: Color },
    /// Specular reflector. `fuzz` 0.0 is a perfect mirror, 1.0 very rough.
    Metal { albedo: Color, fuzz: f32 },
    /// Glass-like surface that reflects and refracts.
    Dielectric { refraction_index: f32, albedo: Color },
    /// Light source. Emission is folded into the attenuation chain.
    Emissive { albedo: Color, intensity: f32 },
    /// Shades surfaces by their normal; never scatters.
    NormalDebug,
}

impl Material {
    /// Create a new Lambertian material with the given albedo color.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a new Metal material. `fuzz` is clamped to [0, 1].
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Create a clear Dielectric material.
    ///
    /// - `refraction_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn dielectric(refraction_index: f32) -> Self {
        Self::tinted_dielectric(refraction_index, Color::ONE)
    }

    /// Create a Dielectric material that tints transmitted light.
    pub fn tinted_dielectric(refraction_index: f32, albedo: Color) -> Self {
        Material::Dielectric {
            refraction_index,
            albedo,
        }
    }

    /// Create an emissive material.
    pub fn emissive(albedo: Color, intensity: f32) -> Self {
        Material::Emissive { albedo, intensity }
    }

    /// Create an emissive material with unit intensity.
    pub fn light(color: Color) -> Self {
        Self::emissive(color, 1.0)
    }

    /// Scatter an incoming ray at a hit.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
        match *self {
            Material::Lambertian { albedo } => scatter_lambertian(albedo, rec, rng),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, ray_in, rec, rng),
            Material::Dielectric {
                refraction_index,
                albedo,
            } => scatter_dielectric(refraction_index, albedo, ray_in, rec, rng),
            Material::Emissive { albedo, intensity } => {
                ScatterResult::scattered(albedo * intensity, Ray::new(rec.p, rec.normal))
            }
            Material::NormalDebug => ScatterResult::absorbed(0.5 * (rec.normal + Color::ONE)),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::lambertian(Color::splat(0.5))
    }
}

fn scatter_lambertian(albedo: Color, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
    let mut scatter_direction = rec.normal + random_in_unit_sphere(rng);

    // Catch degenerate scatter direction
    if scatter_direction.length_squared() < 1e-8 {
        scatter_direction = rec.normal;
    }

    ScatterResult::scattered(albedo, Ray::new(rec.p, scatter_direction))
}

fn scatter_metal(
    albedo: Color,
    fuzz: f32,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> ScatterResult {
    let mut reflected = reflect(unit_vector(ray_in.direction()), rec.normal);
    if fuzz > 0.0 {
        reflected += fuzz * random_in_unit_sphere(rng);
    }

    // Reflections that end up below the surface are absorbed
    if reflected.dot(rec.normal) > 0.0 {
        ScatterResult::scattered(albedo, Ray::new(rec.p, reflected))
    } else {
        ScatterResult::absorbed(albedo)
    }
}

fn scatter_dielectric(
    refraction_index: f32,
    albedo: Color,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> ScatterResult {
    let direction = ray_in.direction();
    let d_dot_n = direction.dot(rec.normal);
    let reflected = reflect(direction, rec.normal);

    let (outward_normal, ratio, cosine) = if d_dot_n > 0.0 {
        // Leaving the medium
        (
            -rec.normal,
            refraction_index,
            refraction_index * d_dot_n / direction.length(),
        )
    } else {
        (
            rec.normal,
            AIR_REFRACTIVE_INDEX / refraction_index,
            -d_dot_n / direction.length(),
        )
    };

    let scattered_dir = match refract(direction, outward_normal, ratio) {
        Some(refracted) if gen_f32(rng) >= schlick(cosine, refraction_index) => refracted,
        _ => reflected,
    };

    ScatterResult::scattered(albedo, Ray::new(rec.p, scattered_dir))
}
