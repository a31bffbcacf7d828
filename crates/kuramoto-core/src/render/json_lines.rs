//! JSON-lines frame stream.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::driver::{Frame, RunHeader, RunSummary};
use crate::error::SimResult;

use super::FrameSink;

/// Serializable snapshot of one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Frame index.
    pub index: usize,

    /// Sample time (x value).
    pub time: f64,

    /// Coupled phases after this frame's update.
    pub phases: Vec<f64>,

    /// Coupled values (y values), one per oscillator.
    pub values: Vec<f64>,

    /// Uncoupled reference values, empty when disabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<f64>,

    /// Synchronization level r of the coupled phases.
    pub order_parameter: f64,
}

impl FrameRecord {
    /// Snapshot a frame view.
    pub fn from_frame(frame: &Frame<'_>) -> Self {
        let phases = frame.phases();
        let (r, _) = crate::phase::order_parameter(&phases);
        Self {
            index: frame.index,
            time: frame.time,
            phases,
            values: frame.values(),
            reference: frame.reference_values(),
            order_parameter: r,
        }
    }
}

/// One line of the stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StreamEvent {
    /// First line.
    Header(RunHeader),
    /// One per frame.
    Frame(FrameRecord),
    /// Last line.
    Summary(RunSummary),
}

/// Writes a header line, one line per frame and a summary line, each a
/// [`StreamEvent`] in compact JSON.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    lines: usize,
}

impl<W: Write> JsonLinesSink<W> {
    /// Stream into `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &StreamEvent) -> SimResult<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, header: &RunHeader) -> SimResult<()> {
        self.write_event(&StreamEvent::Header(header.clone()))
    }

    fn frame(&mut self, frame: &Frame<'_>) -> SimResult<()> {
        self.write_event(&StreamEvent::Frame(FrameRecord::from_frame(frame)))
    }

    fn finish(&mut self, summary: &RunSummary) -> SimResult<()> {
        self.write_event(&StreamEvent::Summary(summary.clone()))?;
        self.writer.flush()?;
        Ok(())
    }
}
