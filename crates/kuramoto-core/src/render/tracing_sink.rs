//! Progress logging sink.

use tracing::{debug, info, trace};

use crate::driver::{Frame, RunHeader, RunSummary};
use crate::error::SimResult;

use super::FrameSink;

/// Logs a progress line every `interval` frames and the final summary.
#[derive(Debug, Clone)]
pub struct TracingSink {
    interval: usize,
    frames: usize,
    total: usize,
}

impl TracingSink {
    /// Log every `interval` frames (at least every frame).
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            total: 0,
        }
    }

    /// Frames seen so far.
    pub fn frames_seen(&self) -> usize {
        self.frames
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(64)
    }
}

impl FrameSink for TracingSink {
    fn begin(&mut self, header: &RunHeader) -> SimResult<()> {
        self.frames = 0;
        self.total = header.frames;
        debug!(
            oscillators = header.oscillator_count,
            reference = header.reference,
            "Rendering frames"
        );
        Ok(())
    }

    fn frame(&mut self, frame: &Frame<'_>) -> SimResult<()> {
        self.frames += 1;
        if frame.index % self.interval == 0 {
            let (r, psi) = frame.order_parameter();
            debug!(
                frame = frame.index,
                total = self.total,
                t = frame.time,
                r,
                psi,
                "Frame progress"
            );
        } else {
            trace!(frame = frame.index, t = frame.time, "Frame");
        }
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> SimResult<()> {
        info!(
            frames = summary.frames,
            r = summary.order_parameter,
            spread = summary.phase_spread,
            "Rendering complete"
        );
        Ok(())
    }
}
