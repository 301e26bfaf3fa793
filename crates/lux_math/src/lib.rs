// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{lerp_color, reflect, refract, schlick, sqrt, unit_vector, Color};
