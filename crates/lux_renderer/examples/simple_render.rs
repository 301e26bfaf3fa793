//! Simple path tracer example.
//!
//! Renders three spheres and a box over a ground sphere, averages a few
//! frames through a `RenderContext`, and saves the result as PPM.

use lux_renderer::{
    AaBox, Color, Material, RenderContext, RenderResult, RenderSettings, Scene, Sphere, Vec3,
};

fn main() -> RenderResult<()> {
    println!("Lux Path Tracer - Simple Example");
    println!("================================");

    let scene = build_scene();

    let settings = RenderSettings {
        width: 400,
        height: 225,
        samples_per_pixel: 4,
        max_depth: 10,
        aperture: 0.1,
        temporal_window: 8,
        ..Default::default()
    };
    let camera = settings.camera(
        Vec3::new(0.0, 0.5, 1.5), // look_from
        Vec3::new(0.0, 0.0, -1.0), // look_at
        Vec3::Y,
    );

    println!(
        "Rendering {}x{} @ {} spp...",
        settings.width, settings.height, settings.samples_per_pixel
    );

    let mut ctx = RenderContext::new(settings)?;
    let start = std::time::Instant::now();
    let mut image = ctx.render_frame(&scene, &camera);
    for _ in 1..8 {
        image = ctx.render_frame(&scene, &camera);
    }
    println!("Rendered 8 frames in {:?}", start.elapsed());

    let filename = "output.ppm";
    image.save_ppm(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Ground
    scene.add(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    ));

    scene.add(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(Color::new(0.1, 0.2, 0.5)),
    ));
    scene.add(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Material::dielectric(1.5),
    ));
    scene.add(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Material::metal(Color::new(0.8, 0.6, 0.2), 0.1),
    ));

    scene.add(AaBox::from_center(
        Vec3::new(0.0, -0.3, -2.2),
        Vec3::new(1.5, 0.2, 0.2),
        Material::metal(Color::new(0.7, 0.7, 0.7), 0.3),
    ));

    scene
}
