//! Temporal accumulation: averages a sliding window of recent frames.

use crate::{FrameBuffer, Rgb};
use std::collections::VecDeque;

/// Bounded FIFO of frames whose per-pixel mean suppresses sampling noise.
#[derive(Debug, Clone)]
pub struct TemporalAccumulator {
    frames: VecDeque<FrameBuffer>,
    capacity: usize,
}

impl TemporalAccumulator {
    /// Create an empty accumulator holding at most `capacity` frames (min 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a frame and return the average of the current window.
    ///
    /// The oldest frame is evicted once the window is full. A frame with
    /// different dimensions restarts the window.
    pub fn push(&mut self, frame: FrameBuffer) -> FrameBuffer {
        if self.frames.front().is_some_and(|f| !f.same_size(&frame)) {
            log::debug!(
                "Frame size changed to {}x{}, restarting temporal window",
                frame.width(),
                frame.height()
            );
            self.frames.clear();
        }

        self.frames.push_back(frame);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }

        self.average()
    }

    fn average(&self) -> FrameBuffer {
        let Some(newest) = self.frames.back() else {
            return FrameBuffer::new(0, 0);
        };
        if self.frames.len() == 1 {
            return newest.clone();
        }

        let count = self.frames.len() as u32;
        let mut sums = vec![[0u32; 3]; newest.pixels().len()];
        for frame in &self.frames {
            for (sum, Rgb(pixel)) in sums.iter_mut().zip(frame.pixels()) {
                for (s, &c) in sum.iter_mut().zip(pixel) {
                    *s += c as u32;
                }
            }
        }

        let pixels = sums
            .into_iter()
            .map(|[r, g, b]| Rgb([(r / count) as u8, (g / count) as u8, (b / count) as u8]))
            .collect();

        FrameBuffer::from_pixels(newest.width(), newest.height(), pixels)
            .unwrap_or_else(|| newest.clone())
    }

    /// Drop every queued frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
