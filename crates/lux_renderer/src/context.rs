//! Render context: owns the worker pool and temporal history between frames.

use crate::error::RenderResult;
use crate::renderer::RenderSettings;
use crate::temporal::TemporalAccumulator;
use crate::tile::render;
use crate::{Camera, FrameBuffer, Scene};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// State carried across successive frames of the same view.
///
/// Changing the camera through [`RenderContext::update_camera`] discards the
/// accumulated history so stale frames never blend into the new view.
pub struct RenderContext {
    settings: RenderSettings,
    pool: ThreadPool,
    temporal: TemporalAccumulator,
    frames_rendered: u64,
}

impl RenderContext {
    /// Validate `settings` and spin up one render thread per column tile.
    pub fn new(settings: RenderSettings) -> RenderResult<Self> {
        settings.validate()?;

        let threads = settings.workers.min(settings.width as usize);
        if threads < settings.workers {
            log::warn!(
                "{} workers requested for a {} pixel wide frame, using {}",
                settings.workers,
                settings.width,
                threads
            );
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lux-render-{i}"))
            .build()?;

        log::info!(
            "Render context: {}x{}, {} spp, depth {}, {} workers, temporal window {}",
            settings.width,
            settings.height,
            settings.samples_per_pixel,
            settings.max_depth,
            threads,
            settings.temporal_window
        );

        Ok(Self {
            temporal: TemporalAccumulator::new(settings.temporal_window),
            settings,
            pool,
            frames_rendered: 0,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render one frame and blend it into the temporal window.
    pub fn render_frame(&mut self, scene: &Scene, camera: &Camera) -> FrameBuffer {
        let frame = render(&self.pool, scene, camera, &self.settings, self.frames_rendered);
        self.frames_rendered += 1;

        if self.settings.temporal_window > 1 {
            let blended = self.temporal.push(frame);
            log::debug!(
                "Frame {} averaged over {} frames",
                self.frames_rendered,
                self.temporal.len()
            );
            blended
        } else {
            frame
        }
    }

    /// Apply a camera change and restart temporal accumulation.
    pub fn update_camera<F>(&mut self, camera: &mut Camera, update: F)
    where
        F: FnOnce(&mut Camera),
    {
        update(camera);
        self.reset();
    }

    /// Discard all accumulated frames.
    pub fn reset(&mut self) {
        self.temporal.clear();
    }

    /// Number of frames rendered by this context.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Number of frames currently held in the temporal window.
    pub fn accumulated_frames(&self) -> usize {
        self.temporal.len()
    }
}
