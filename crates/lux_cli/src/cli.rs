use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
///
/// Render flags left unset keep the value from `--config`, or the built-in
/// default when no config file is given.
#[derive(Debug, Parser)]
#[command(name = "lux")]
#[command(about = "A Monte Carlo path tracer with temporal accumulation")]
pub struct Args {
    /// JSON file with render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output image (.ppm, or .png for PNG)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Number of frames to render and accumulate
    #[arg(short, long, default_value_t = 1)]
    pub frames: u32,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of render threads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Number of samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum bounce depth
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Seed for reproducible frames and scene layout
    #[arg(long)]
    pub seed: Option<u64>,

    /// OBJ mesh to add to the scene
    #[arg(long)]
    pub obj: Option<PathBuf>,

    /// Move the camera along +X by this much after every frame
    #[arg(long)]
    pub orbit: Option<f32>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
