//! 8-bit frame buffer, its per-tile write regions, and PPM export.

use crate::error::RenderResult;
use crate::tile::{Tile, TileRegion};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A gamma-corrected 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub [u8; 3]);

/// Rendered image, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width as usize * height as usize],
        }
    }

    /// Wrap existing pixels. Returns `None` if the count does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Whether `other` has the same dimensions.
    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = pixel;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Split the buffer into one exclusive write region per tile.
    ///
    /// Tiles must be ordered by column, must not overlap, and must lie inside
    /// the frame. Each region holds one mutable slice per row of its tile, so
    /// regions can be filled concurrently without synchronization.
    pub fn tile_regions(&mut self, tiles: &[Tile]) -> Vec<TileRegion<'_>> {
        let mut regions: Vec<TileRegion<'_>> = tiles
            .iter()
            .map(|tile| TileRegion::new(tile.clone()))
            .collect();

        let mut previous_end = 0;
        for tile in tiles {
            assert!(
                tile.columns.start >= previous_end
                    && tile.columns.start <= tile.columns.end
                    && tile.columns.end <= self.width
                    && tile.rows.end <= self.height,
                "tile {} does not fit a {}x{} frame in column order",
                tile.index,
                self.width,
                self.height
            );
            previous_end = tile.columns.end;
        }

        if self.width == 0 {
            return regions;
        }

        for (y, row) in self.pixels.chunks_mut(self.width as usize).enumerate() {
            let y = y as u32;
            let mut rest = row;
            let mut consumed = 0;

            for region in regions.iter_mut() {
                let start = (region.tile.columns.start - consumed) as usize;
                let len = region.tile.columns.len();

                let (_, tail) = std::mem::take(&mut rest).split_at_mut(start);
                let (span, tail) = tail.split_at_mut(len);
                rest = tail;
                consumed = region.tile.columns.end;

                if region.tile.rows.contains(&y) {
                    region.rows.push(span);
                }
            }
        }

        regions
    }

    /// Flatten to packed RGB bytes (for saving through image codecs).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.0).collect()
    }

    /// Write the frame as a plain-text PPM (P3).
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> RenderResult<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for Rgb([r, g, b]) in &self.pixels {
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Save the frame as a PPM file.
    pub fn save_ppm(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let file = File::create(path)?;
        self.write_ppm(BufWriter::new(file))
    }
}
