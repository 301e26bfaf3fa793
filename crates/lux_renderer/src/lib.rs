//! Lux Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres, boxes and triangle meshes.
//! Frames are split into column tiles rendered in parallel, and successive
//! frames of a static view can be averaged to reduce noise.

mod aabox;
mod camera;
mod context;
mod error;
mod frame;
mod hittable;
mod material;
mod primitive;
mod renderer;
mod sampling;
mod scene;
mod sphere;
mod temporal;
mod tile;
mod triangle;

pub use aabox::AaBox;
pub use camera::Camera;
pub use context::RenderContext;
pub use error::{RenderError, RenderResult};
pub use frame::{FrameBuffer, Rgb};
pub use hittable::{HitRecord, Hittable};
pub use material::{Material, ScatterResult, AIR_REFRACTIVE_INDEX};
pub use primitive::Primitive;
pub use renderer::{
    color_to_rgb, ray_color, render_pixel, sky_gradient, RenderSettings, MIN_DISTANCE,
};
pub use scene::Scene;
pub use sphere::Sphere;
pub use temporal::TemporalAccumulator;
pub use tile::{render, render_tile, split_columns, Tile, TileRegion};
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from lux_math
pub use lux_math::{Color, Interval, Ray, Vec3};
