//! Render settings: built-in defaults, then a JSON file, then CLI flags.

use crate::cli::Args;
use anyhow::{Context, Result};
use lux_renderer::RenderSettings;
use std::fs;
use std::path::Path;

/// Load settings from a JSON file. Missing fields keep their defaults.
pub fn load_settings(path: &Path) -> Result<RenderSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

fn parse_settings(text: &str) -> Result<RenderSettings> {
    Ok(serde_json::from_str(text)?)
}

/// Overwrite settings with every render flag given on the command line.
pub fn apply_overrides(settings: &mut RenderSettings, args: &Args) {
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(workers) = args.workers {
        settings.workers = workers;
    }
    if let Some(samples) = args.samples {
        settings.samples_per_pixel = samples;
    }
    if let Some(depth) = args.depth {
        settings.max_depth = depth;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
}

/// Resolve the final settings for a run.
pub fn resolve_settings(args: &Args) -> Result<RenderSettings> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => RenderSettings::default(),
    };
    apply_overrides(&mut settings, args);
    settings.validate().context("invalid render settings")?;

    log::debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}
