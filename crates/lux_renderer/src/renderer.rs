//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative bounce loop with configurable depth
//! - Gamma correction
//! - Anti-aliasing via jittered multi-sampling

use crate::error::{RenderError, RenderResult};
use crate::sampling::gen_f32;
use crate::{Camera, Color, Hittable, Ray, Rgb};
use lux_math::{lerp_color, sqrt, unit_vector, Interval, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Minimum hit distance along a ray; avoids self-intersection ("acne").
pub const MIN_DISTANCE: f32 = 1e-3;

/// Render settings.
///
/// Every field has a default, so a JSON file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Lens diameter; 0 renders a pinhole camera
    pub aperture: f32,
    /// Distance to the plane of focus; `None` focuses on the look-at point
    pub focus_distance: Option<f32>,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Jitter the sample position inside the pixel even with one sample
    pub jitter: bool,
    /// Number of frames averaged by the temporal filter (1 disables it)
    pub temporal_window: usize,
    /// Number of render threads, one column tile each
    pub workers: usize,
    /// Give every worker its own copy of the scene and camera
    pub per_worker_copies: bool,
    /// Seed for reproducible frames; random when absent
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: 90.0,
            aperture: 0.0,
            focus_distance: None,
            max_depth: 50,
            samples_per_pixel: 1,
            jitter: true,
            temporal_window: 32,
            workers: 4,
            per_worker_copies: false,
            seed: None,
        }
    }
}

impl RenderSettings {
    /// Check that the settings describe a renderable frame.
    pub fn validate(&self) -> RenderResult<()> {
        let counts = [
            ("width", self.width as usize),
            ("height", self.height as usize),
            ("samples_per_pixel", self.samples_per_pixel as usize),
            ("workers", self.workers),
            ("temporal_window", self.temporal_window),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, value)| *value == 0) {
            return Err(RenderError::InvalidSettings(format!(
                "{name} must be at least 1"
            )));
        }

        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(RenderError::InvalidSettings(format!(
                "fov must be between 0 and 180 degrees, got {}",
                self.fov
            )));
        }
        if !self.aperture.is_finite() || self.aperture < 0.0 {
            return Err(RenderError::InvalidSettings(format!(
                "aperture must be non-negative, got {}",
                self.aperture
            )));
        }
        if let Some(focus) = self.focus_distance {
            if !(focus > 0.0 && focus.is_finite()) {
                return Err(RenderError::InvalidSettings(format!(
                    "focus_distance must be positive, got {focus}"
                )));
            }
        }

        Ok(())
    }

    /// Build a camera framed for these settings.
    ///
    /// Without an explicit focus distance the focus plane passes through
    /// `look_at`.
    pub fn camera(&self, position: Vec3, look_at: Vec3, up: Vec3) -> Camera {
        let focus = self
            .focus_distance
            .unwrap_or_else(|| (position - look_at).length());

        Camera::from_bounds(self.width, self.height)
            .with_position(position, look_at, up)
            .with_lens(self.fov, self.aperture, focus)
    }

    /// Whether sample positions are jittered inside each pixel.
    pub fn jittered(&self) -> bool {
        self.jitter || self.samples_per_pixel > 1
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. Every hit scatters once; the
/// scattered ray is only followed while `depth > 0`, otherwise the
/// attenuation itself is returned. Emission is not added, so emissive
/// surfaces only contribute through the product of attenuations.
///
/// Bounces run in a loop over an accumulated attenuation, so stack usage
/// does not grow with `depth`.
pub fn ray_color(world: &dyn Hittable, ray: &Ray, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut attenuation = Color::ONE;
    let mut ray = *ray;
    let mut depth = depth;

    loop {
        let Some(rec) = world.hit(&ray, Interval::new(MIN_DISTANCE, f32::INFINITY)) else {
            return attenuation * sky_gradient(&ray);
        };

        let result = rec.material.scatter(&ray, &rec, rng);
        attenuation *= result.attenuation;
        match result.scattered {
            Some(scattered) if depth > 0 => {
                ray = scattered;
                depth -= 1;
            }
            _ => return attenuation,
        }
    }
}

/// Compute sky gradient background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    lerp_color(white, blue, a)
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to an 8-bit pixel.
pub fn color_to_rgb(color: Color) -> Rgb {
    // Apply gamma correction (gamma = 2.0) and convert to 0-255
    let gamma = sqrt(color);
    let to_byte = |c: f32| (255.0 * clamp_01(c)) as u8;
    Rgb([to_byte(gamma.x), to_byte(gamma.y), to_byte(gamma.z)])
}

/// Render a single pixel, averaging `samples_per_pixel` camera rays.
///
/// `y` counts image rows from the top, while the camera's `v` coordinate
/// grows upwards, hence the flip.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let width = settings.width as f32;
    let height = settings.height as f32;
    let flipped_y = settings.height.saturating_sub(1).saturating_sub(y) as f32;
    let jittered = settings.jittered();
    let samples = settings.samples_per_pixel.max(1);

    let mut pixel_color = Color::ZERO;
    for _ in 0..samples {
        let (dx, dy) = if jittered {
            (gen_f32(rng), gen_f32(rng))
        } else {
            (0.0, 0.0)
        };
        let u = (x as f32 + dx) / width;
        let v = (flipped_y + dy) / height;

        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(world, &ray, settings.max_depth, rng);
    }

    // Average the samples
    pixel_color / samples as f32
}
