//! End-to-end rendering tests through the public API.

use lux_renderer::{
    color_to_rgb, render, sky_gradient, Color, FrameBuffer, Material, RenderContext,
    RenderSettings, Scene, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::ThreadPoolBuilder;

const ALBEDO: Color = Color::new(0.8, 0.3, 0.3);

fn two_sphere_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(ALBEDO),
    ));
    scene.add(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    ));
    scene
}

fn flat_settings() -> RenderSettings {
    RenderSettings {
        width: 20,
        height: 10,
        max_depth: 0,
        samples_per_pixel: 1,
        jitter: false,
        workers: 4,
        temporal_window: 4,
        seed: Some(11),
        ..Default::default()
    }
}

#[test]
fn depth_zero_render_shows_albedo_and_sky() {
    let settings = flat_settings();
    let scene = two_sphere_scene();
    let camera = settings.camera(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
    let pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();

    let frame = render(&pool, &scene, &camera, &settings, 0);
    assert_eq!((frame.width(), frame.height()), (20, 10));

    // Center of the image lands on the small sphere
    assert_eq!(frame.get(10, 5), color_to_rgb(ALBEDO));

    // The top row only sees sky
    let mut rng = StdRng::seed_from_u64(0);
    for x in 0..settings.width {
        let u = x as f32 / settings.width as f32;
        let v = (settings.height - 1) as f32 / settings.height as f32;
        let ray = camera.get_ray(u, v, &mut rng);
        assert_eq!(frame.get(x, 0), color_to_rgb(sky_gradient(&ray)), "column {x}");
    }
}

#[test]
fn worker_count_does_not_change_flat_render() {
    let scene = two_sphere_scene();
    let pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();

    let frames: Vec<FrameBuffer> = [1, 3, 7]
        .into_iter()
        .map(|workers| {
            let settings = RenderSettings {
                workers,
                ..flat_settings()
            };
            let camera = settings.camera(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
            render(&pool, &scene, &camera, &settings, 0)
        })
        .collect();

    assert_eq!(frames[0], frames[1]);
    assert_eq!(frames[0], frames[2]);
}

#[test]
fn seeded_context_is_reproducible() {
    let settings = RenderSettings {
        width: 12,
        height: 8,
        max_depth: 10,
        samples_per_pixel: 2,
        workers: 3,
        temporal_window: 1,
        seed: Some(99),
        ..Default::default()
    };
    let scene = two_sphere_scene();
    let camera = settings.camera(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);

    let mut first = RenderContext::new(settings.clone()).unwrap();
    let mut second = RenderContext::new(settings).unwrap();
    for _ in 0..3 {
        assert_eq!(
            first.render_frame(&scene, &camera),
            second.render_frame(&scene, &camera)
        );
    }
}

#[test]
fn temporal_average_of_identical_frames_is_unchanged() {
    let settings = flat_settings();
    let scene = two_sphere_scene();
    let camera = settings.camera(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
    let mut ctx = RenderContext::new(settings).unwrap();

    let single = ctx.render_frame(&scene, &camera);
    for _ in 0..5 {
        assert_eq!(ctx.render_frame(&scene, &camera), single);
    }
    assert_eq!(ctx.accumulated_frames(), 4);
}

#[test]
fn ppm_file_round_trips_header() {
    let settings = RenderSettings {
        width: 4,
        height: 3,
        ..flat_settings()
    };
    let scene = two_sphere_scene();
    let camera = settings.camera(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
    let pool = ThreadPoolBuilder::new().num_threads(2).build().unwrap();
    let frame = render(&pool, &scene, &camera, &settings, 0);

    let path = std::env::temp_dir().join(format!("lux_render_test_{}.ppm", std::process::id()));
    frame.save_ppm(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("4 3"));
    assert_eq!(lines.next(), Some("255"));

    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), 12);
    let [r, g, b] = frame.get(0, 0).0;
    assert_eq!(body[0], format!("{r} {g} {b}"));
}
