//! Frame export: PPM by default, PNG when the path asks for it.

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgb};
use lux_renderer::FrameBuffer;
use std::path::Path;

/// Save a frame, picking the format from the file extension.
pub fn save_frame(frame: &FrameBuffer, path: &Path) -> Result<()> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        save_png(frame, path)?;
    } else {
        frame
            .save_ppm(path)
            .with_context(|| format!("failed to write PPM {}", path.display()))?;
    }

    log::info!("Image saved as {}", path.display());
    Ok(())
}

fn save_png(frame: &FrameBuffer, path: &Path) -> Result<()> {
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(frame.width(), frame.height(), frame.to_rgb_bytes())
            .context("frame buffer size does not match its dimensions")?;

    image
        .save(path)
        .with_context(|| format!("failed to write PNG {}", path.display()))
}
