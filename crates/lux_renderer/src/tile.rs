//! Column-tile rendering.
//!
//! Divides the image into vertical column strips, one per worker, that are
//! rendered independently and in parallel using rayon.

use crate::renderer::{color_to_rgb, render_pixel, RenderSettings};
use crate::{Camera, FrameBuffer, Rgb, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::ops::Range;

/// A rectangular region of the image assigned to one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Index of this tile, left to right
    pub index: usize,
    /// Pixel columns covered by the tile
    pub columns: Range<u32>,
    /// Pixel rows covered by the tile (row 0 is the top)
    pub rows: Range<u32>,
}

impl Tile {
    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> usize {
        self.columns.len() * self.rows.len()
    }
}

/// Exclusive write access to the pixels of one tile.
///
/// `rows[i]` is the slice of row `tile.rows.start + i` spanning
/// `tile.columns`.
#[derive(Debug)]
pub struct TileRegion<'a> {
    pub tile: Tile,
    pub rows: Vec<&'a mut [Rgb]>,
}

impl<'a> TileRegion<'a> {
    pub(crate) fn new(tile: Tile) -> Self {
        let rows = Vec::with_capacity(tile.rows.len());
        Self { tile, rows }
    }
}

/// Split the image width into `workers` full-height column strips.
///
/// Every strip is `width / workers` columns wide and the last one absorbs the
/// remainder. `workers` is clamped to `[1, width]` so no strip is empty.
pub fn split_columns(width: u32, height: u32, workers: usize) -> Vec<Tile> {
    if width == 0 {
        return Vec::new();
    }

    let count = (workers.max(1) as u32).min(width);
    let step = width / count;

    (0..count)
        .map(|i| {
            let start = i * step;
            let end = if i + 1 == count { width } else { start + step };
            Tile {
                index: i as usize,
                columns: start..end,
                rows: 0..height,
            }
        })
        .collect()
}

/// Fill a tile's region with rendered pixels.
pub fn render_tile(
    region: &mut TileRegion<'_>,
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    rng: &mut StdRng,
) {
    let tile = &region.tile;

    for (y, row) in tile.rows.clone().zip(region.rows.iter_mut()) {
        for (x, pixel) in tile.columns.clone().zip(row.iter_mut()) {
            let color = render_pixel(camera, scene, x, y, settings, rng);
            *pixel = color_to_rgb(color);
        }
    }
}

/// Seed for one tile of one frame, or `None` to draw from entropy.
fn tile_seed(settings: &RenderSettings, frame_index: u64, tile_index: usize) -> Option<u64> {
    settings.seed.map(|seed| {
        seed ^ frame_index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ (tile_index as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
    })
}

fn tile_rng(settings: &RenderSettings, frame_index: u64, tile_index: usize) -> StdRng {
    match tile_seed(settings, frame_index, tile_index) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Render a full frame on `pool`, one column tile per worker.
///
/// Returns once every tile has been written.
pub fn render(
    pool: &ThreadPool,
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    frame_index: u64,
) -> FrameBuffer {
    let mut frame = FrameBuffer::new(settings.width, settings.height);
    let tiles = split_columns(settings.width, settings.height, settings.workers);
    let regions = frame.tile_regions(&tiles);

    log::debug!(
        "Rendering frame {} as {} tiles on {} threads",
        frame_index,
        regions.len(),
        pool.current_num_threads()
    );

    pool.install(|| {
        regions.into_par_iter().for_each(|mut region| {
            let mut rng = tile_rng(settings, frame_index, region.tile.index);

            if settings.per_worker_copies {
                let scene = scene.clone();
                let camera = camera.clone();
                render_tile(&mut region, &scene, &camera, settings, &mut rng);
            } else {
                render_tile(&mut region, scene, camera, settings, &mut rng);
            }
        });
    });

    frame
}
