//! Demo scene: a glowing ground, three feature spheres, and scattered props.

use lux_math::{Color, Vec3};
use lux_renderer::{AaBox, Material, Scene, Sphere};
use rand::Rng;

/// Random props land in `[-HALF_SPREAD, HALF_SPREAD)` on X and Z.
const SPREAD: f32 = 30.0;
const HALF_SPREAD: f32 = SPREAD / 2.0;

const RANDOM_SPHERE_ROUNDS: usize = 40;
const RANDOM_BOX_ROUNDS: usize = 10;

fn random_color<R: Rng>(rng: &mut R, min: f32, max: f32) -> Color {
    Color::new(
        rng.gen_range(min..max),
        rng.gen_range(min..max),
        rng.gen_range(min..max),
    )
}

/// Random ground position for an object whose bottom sits at `y = -0.5`.
fn random_position<R: Rng>(rng: &mut R, half_height: f32) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() * SPREAD - HALF_SPREAD,
        half_height - 0.5,
        rng.gen::<f32>() * SPREAD - HALF_SPREAD,
    )
}

fn random_radius<R: Rng>(rng: &mut R) -> f32 {
    0.4 + rng.gen::<f32>() * 0.2
}

/// Build the demo scene, drawing the random layout from `rng`.
pub fn demo_scene<R: Rng>(rng: &mut R) -> Scene {
    let mut scene = Scene::new();

    // Ground
    scene.add(Sphere::new(
        Vec3::new(0.0, -500.5, -1.0),
        500.0,
        Material::light(Color::new(0.4, 0.7, 0.0)),
    ));

    scene.add(Sphere::new(Vec3::new(-1.0, 0.0, -3.0), 0.5, Material::NormalDebug));
    scene.add(Sphere::new(
        Vec3::new(5.0, 1.0, -6.0),
        1.5,
        Material::tinted_dielectric(1.3, Color::splat(0.9)),
    ));
    scene.add(Sphere::new(
        Vec3::new(-1.0, 1.0, -3.0),
        1.5,
        Material::metal(Color::splat(0.6), 0.1),
    ));

    for _ in 0..RANDOM_SPHERE_ROUNDS {
        let radius = random_radius(rng);
        let center = random_position(rng, radius);
        scene.add(Sphere::new(center, radius, Material::light(random_color(rng, 0.1, 1.0))));

        let radius = random_radius(rng);
        let center = random_position(rng, radius);
        let albedo = random_color(rng, 0.1, 1.0);
        let fuzz = rng.gen::<f32>();
        scene.add(Sphere::new(center, radius, Material::metal(albedo, fuzz)));

        let radius = random_radius(rng);
        let center = random_position(rng, radius);
        let index = 2.0 * rng.gen::<f32>();
        let tint = random_color(rng, 0.95, 1.0);
        scene.add(Sphere::new(center, radius, Material::tinted_dielectric(index, tint)));
    }

    let half_size = Vec3::splat(0.5);
    for _ in 0..RANDOM_BOX_ROUNDS {
        let center = random_position(rng, half_size.y);
        let color = random_color(rng, 0.1, 1.0);
        scene.add(AaBox::from_center(center, half_size, Material::light(color)));

        let center = random_position(rng, half_size.y);
        let albedo = random_color(rng, 0.6, 1.0);
        scene.add(AaBox::from_center(center, half_size, Material::metal(albedo, 0.0)));
    }

    log::debug!("Demo scene has {} primitives", scene.len());
    scene
}
