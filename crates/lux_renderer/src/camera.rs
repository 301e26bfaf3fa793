//! Thin-lens camera for ray generation.
//!
//! Rays start from a random point on a lens disk of radius `aperture / 2`
//! and pass through the focus plane, which gives depth of field. With a
//! zero aperture the camera degenerates to a pinhole.

use crate::sampling::random_in_unit_disk;
use crate::Ray;
use lux_math::{unit_vector, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Every setter recomputes the cached viewport, so the derived vectors always
/// match the current parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // Camera positioning
    position: Vec3,
    look_at: Vec3,
    up: Vec3,

    // Lens settings
    aspect_ratio: f32,
    fov: f32,            // Vertical field of view in degrees
    aperture: f32,       // Lens diameter
    focus_distance: f32, // Distance from camera to plane of perfect focus

    // Cached computed values (set by update_viewport())
    lens_radius: f32,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera with the default framing for the given aspect ratio.
    ///
    /// Looks from (-2, 2, 1) towards (0, 0, -1) with a 90 degree field of
    /// view, no defocus blur, and the focus plane through the look-at point.
    pub fn new(aspect_ratio: f32) -> Self {
        let position = Vec3::new(-2.0, 2.0, 1.0);
        let look_at = Vec3::new(0.0, 0.0, -1.0);
        let mut camera = Self {
            position,
            look_at,
            up: Vec3::Y,
            aspect_ratio,
            fov: 90.0,
            aperture: 0.0,
            focus_distance: (position - look_at).length(),
            lens_radius: 0.0,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            lower_left_corner: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
        };
        camera.update_viewport();
        camera
    }

    /// Create a camera whose aspect ratio matches an image size.
    pub fn from_bounds(width: u32, height: u32) -> Self {
        Self::new(width as f32 / height.max(1) as f32)
    }

    /// Set camera position, target and up vector.
    ///
    /// The focus distance is kept; call `with_lens` or `set_focus_distance`
    /// to move the focus plane.
    pub fn with_position(mut self, position: Vec3, look_at: Vec3, up: Vec3) -> Self {
        self.position = position;
        self.look_at = look_at;
        self.up = up;
        self.update_viewport();
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, fov: f32, aperture: f32, focus_distance: f32) -> Self {
        self.fov = fov;
        self.aperture = aperture.max(0.0);
        self.focus_distance = focus_distance;
        self.update_viewport();
        self
    }

    /// Recompute the basis, lens radius and image plane from the parameters.
    pub fn update_viewport(&mut self) {
        let theta = self.fov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = self.aspect_ratio * half_height;

        self.lens_radius = self.aperture / 2.0;

        // Calculate camera basis vectors
        self.w = unit_vector(self.position - self.look_at);
        self.u = unit_vector(self.up.cross(self.w));
        self.v = self.w.cross(self.u);

        let u = self.u * half_width * self.focus_distance;
        let v = self.v * half_height * self.focus_distance;
        let w = self.w * self.focus_distance;

        self.lower_left_corner = self.position - u - v - w;
        self.horizontal = 2.0 * u;
        self.vertical = 2.0 * v;
    }

    /// Generate a ray through the normalized screen coordinate (s, t).
    ///
    /// (0, 0) is the lower-left corner of the image plane and (1, 1) the
    /// upper-right. Values outside [0, 1] extrapolate the plane.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        let origin = self.position + offset;
        let direction = self.lower_left_corner + s * self.horizontal + t * self.vertical
            - self.position
            - offset;

        Ray::new(origin, direction)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aperture(&self) -> f32 {
        self.aperture
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    pub fn focus_distance(&self) -> f32 {
        self.focus_distance
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Orthonormal camera basis `(u, v, w)`; `w` points away from the target.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_viewport();
    }

    /// Move the camera (not its target) by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.set_position(self.position + delta);
    }

    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
        self.update_viewport();
    }

    /// Set the lens diameter. Negative values are clamped to zero.
    pub fn set_aperture(&mut self, aperture: f32) {
        self.aperture = aperture.max(0.0);
        self.update_viewport();
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
        self.update_viewport();
    }

    pub fn set_focus_distance(&mut self, focus_distance: f32) {
        self.focus_distance = focus_distance;
        self.update_viewport();
    }

    /// Update aspect ratio (e.g., on resize)
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.update_viewport();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(4.0 / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn front_camera(aperture: f32) -> Camera {
        Camera::new(2.0)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, aperture, 1.0)
    }

    #[test]
    fn test_camera_basis() {
        let camera = front_camera(0.0);
        let (u, v, w) = camera.basis();

        assert!((u - Vec3::X).length() < 1e-6);
        assert!((v - Vec3::Y).length() < 1e-6);
        assert!((w - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_camera_image_plane() {
        let camera = front_camera(0.0);
        // tan(45 deg) = 1, aspect 2, focus distance 1
        assert!((camera.lower_left_corner - Vec3::new(-2.0, -1.0, -1.0)).length() < 1e-5);
        assert!((camera.horizontal - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
        assert!((camera.vertical - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = front_camera(0.0);
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_zero_aperture_matches_pinhole() {
        let camera = front_camera(0.0);
        let mut rng = StdRng::seed_from_u64(42);

        for &(s, t) in &[(0.0, 0.0), (0.25, 0.75), (1.0, 1.0), (-0.1, 1.2)] {
            let ray = camera.get_ray(s, t, &mut rng);
            let pinhole = camera.lower_left_corner + s * camera.horizontal + t * camera.vertical
                - camera.position();
            assert_eq!(ray.origin(), camera.position());
            assert_eq!(ray.direction(), pinhole);
        }
    }

    #[test]
    fn test_aperture_jitters_origin_but_keeps_focus() {
        let camera = front_camera(0.5);
        assert_eq!(camera.lens_radius(), 0.25);
        let mut rng = StdRng::seed_from_u64(9);

        let mut moved = false;
        for _ in 0..32 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            let offset = ray.origin() - camera.position();
            assert!(offset.length() < 0.25 + 1e-6);
            assert!(offset.z.abs() < 1e-6);
            moved |= offset.length() > 1e-4;

            // Every lens sample converges on the focus plane point
            let focus_point = ray.at(1.0);
            assert!((focus_point - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
        }
        assert!(moved);
    }

    #[test]
    fn test_setters_refresh_viewport() {
        let mut camera = front_camera(0.0);
        camera.set_position(Vec3::new(0.0, 0.0, 2.0));

        let expected = front_camera(0.0).with_position(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
        );
        assert_eq!(camera, expected);
        assert!((camera.lower_left_corner - Vec3::new(-2.0, -1.0, 1.0)).length() < 1e-5);

        camera.set_aperture(-1.0);
        assert_eq!(camera.aperture(), 0.0);
        assert_eq!(camera.lens_radius(), 0.0);

        camera.set_aperture(0.2);
        assert!((camera.lens_radius() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_default_focus_on_target() {
        let camera = Camera::from_bounds(640, 480);
        assert!((camera.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
        assert!((camera.focus_distance() - 12.0_f32.sqrt()).abs() < 1e-5);
    }
}
