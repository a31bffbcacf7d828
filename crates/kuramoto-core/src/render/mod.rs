//! Frame sinks.
//!
//! The simulator does not draw anything. A [`FrameSink`] receives each frame
//! as a read-only view and hands the `(x, y)` samples to whatever renders
//! them:
//!
//! - [`JsonLinesSink`]: streams one JSON event per line (live preview)
//! - [`TracingSink`]: logs progress through `tracing`
//! - [`Recording`]: the complete run as one JSON document for the encoder

mod json_lines;
mod recording;
mod tracing_sink;

use crate::driver::{Frame, RunHeader, RunSummary};
use crate::error::SimResult;

pub use json_lines::{FrameRecord, JsonLinesSink, StreamEvent};
pub use recording::{Recording, TraceRecord};
pub use tracing_sink::TracingSink;

/// Consumer of processed frames.
pub trait FrameSink {
    /// Called once before the first frame.
    fn begin(&mut self, _header: &RunHeader) -> SimResult<()> {
        Ok(())
    }

    /// Called once per processed frame.
    fn frame(&mut self, frame: &Frame<'_>) -> SimResult<()>;

    /// Called once after the last frame.
    fn finish(&mut self, _summary: &RunSummary) -> SimResult<()> {
        Ok(())
    }
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn begin(&mut self, header: &RunHeader) -> SimResult<()> {
        (**self).begin(header)
    }

    fn frame(&mut self, frame: &Frame<'_>) -> SimResult<()> {
        (**self).frame(frame)
    }

    fn finish(&mut self, summary: &RunSummary) -> SimResult<()> {
        (**self).finish(summary)
    }
}

/// Both sinks see every event, the first one first.
impl<A: FrameSink, B: FrameSink> FrameSink for (A, B) {
    fn begin(&mut self, header: &RunHeader) -> SimResult<()> {
        self.0.begin(header)?;
        self.1.begin(header)
    }

    fn frame(&mut self, frame: &Frame<'_>) -> SimResult<()> {
        self.0.frame(frame)?;
        self.1.frame(frame)
    }

    fn finish(&mut self, summary: &RunSummary) -> SimResult<()> {
        self.0.finish(summary)?;
        self.1.finish(summary)
    }
}
