use anyhow::{Context, Result};
use clap::Parser;
use lux_math::Vec3;
use lux_renderer::{Material, RenderContext, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

mod cli;
mod config;
mod obj;
mod output;
mod scene;

use cli::Args;

/// Camera placement for the demo scene.
const LOOK_FROM: Vec3 = Vec3::new(-2.0, 2.0, 1.0);
const LOOK_AT: Vec3 = Vec3::new(0.0, 0.0, -1.0);

fn init_logger(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn build_scene(args: &Args, seed: Option<u64>) -> Result<Scene> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut scene = scene::demo_scene(&mut rng);

    if let Some(path) = &args.obj {
        let triangles = obj::load_obj_triangles(path)?;
        scene.add_triangles(&triangles, Material::light(Vec3::splat(0.9)));
    }

    Ok(scene)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Starting Lux");

    let settings = config::resolve_settings(&args)?;
    let scene = build_scene(&args, settings.seed)?;
    log::info!("Scene built with {} primitives", scene.len());

    let mut camera = settings.camera(LOOK_FROM, LOOK_AT, Vec3::Y);
    let mut ctx = RenderContext::new(settings).context("failed to create render context")?;

    let frames = args.frames.max(1);
    let mut image = None;
    for i in 0..frames {
        if i > 0 {
            if let Some(step) = args.orbit {
                ctx.update_camera(&mut camera, |c| c.translate(Vec3::X * step));
            }
        }

        let start = Instant::now();
        let frame = ctx.render_frame(&scene, &camera);
        log::info!(
            "Frame {}/{} rendered in {:.2?} ({} accumulated)",
            i + 1,
            frames,
            start.elapsed(),
            ctx.accumulated_frames()
        );
        image = Some(frame);
    }

    if let Some(image) = image {
        output::save_frame(&image, &args.output)?;
    }

    Ok(())
}
