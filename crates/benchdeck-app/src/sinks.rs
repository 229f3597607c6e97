//! Headless sinks for the display, toggle, and canvas seams. They log what
//! a browser front end would render.

use std::sync::atomic::{AtomicUsize, Ordering};

use benchdeck_common::{FrameId, Point, Size};
use benchdeck_frames::Surface;
use benchdeck_mux::ToggleSurface;
use benchdeck_panels::Canvas;

pub struct LogToggle;

impl ToggleSurface for LogToggle {
    fn set_connected(&mut self, connected: bool) {
        tracing::info!(connected, "link toggle");
    }
}

pub struct TracingSurface {
    size: Size,
}

impl TracingSurface {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Surface for TracingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn attach(&mut self, id: FrameId, at: Point, z: u32) {
        tracing::info!(frame = %id, x = at.x, y = at.y, z, "frame attached");
    }

    fn detach(&mut self, id: FrameId) {
        tracing::info!(frame = %id, "frame detached");
    }

    fn place(&mut self, id: FrameId, at: Point) {
        tracing::debug!(frame = %id, x = at.x, y = at.y, "frame moved");
    }

    fn raise(&mut self, id: FrameId, z: u32) {
        tracing::debug!(frame = %id, z, "frame raised");
    }
}

/// Counts stream frames and logs a sampled heartbeat.
pub struct StatsCanvas {
    label: &'static str,
    frames: AtomicUsize,
}

impl StatsCanvas {
    const SAMPLE_EVERY: usize = 30;

    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            frames: AtomicUsize::new(0),
        }
    }
}

impl Canvas for StatsCanvas {
    fn draw_frame(&mut self, image: &[u8]) {
        let n = self.frames.fetch_add(1, Ordering::Relaxed) + 1;
        if n % Self::SAMPLE_EVERY == 1 {
            tracing::info!(stream = self.label, frames = n, bytes = image.len(), "stream frame");
        }
    }

    fn clear(&mut self) {
        tracing::info!(stream = self.label, "stream cleared");
    }
}
