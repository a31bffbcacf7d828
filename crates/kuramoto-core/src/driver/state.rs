//! Frame driver states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a [`FrameDriver`](super::FrameDriver) is in its run.
///
/// ```text
/// Idle ──advance──▶ Running(0) ──advance──▶ … ──▶ Running(last) ──advance──▶ Finished
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DriverState {
    /// No frame processed yet.
    #[default]
    Idle,

    /// `frame_index` was the most recently processed frame.
    Running {
        /// Index into the time axis.
        frame_index: usize,
    },

    /// Time axis exhausted; no further updates.
    Finished,
}

impl DriverState {
    /// Index of the frame the next advance would process, or `None` once
    /// finished.
    pub fn next_index(self) -> Option<usize> {
        match self {
            DriverState::Idle => Some(0),
            DriverState::Running { frame_index } => Some(frame_index + 1),
            DriverState::Finished => None,
        }
    }

    /// Number of frames processed so far, given the axis length.
    pub fn frames_processed(self, axis_len: usize) -> usize {
        match self {
            DriverState::Idle => 0,
            DriverState::Running { frame_index } => frame_index + 1,
            DriverState::Finished => axis_len,
        }
    }

    /// True once the driver reached [`DriverState::Finished`].
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, DriverState::Finished)
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverState::Idle => f.write_str("idle"),
            DriverState::Running { frame_index } => write!(f, "running({})", frame_index),
            DriverState::Finished => f.write_str("finished"),
        }
    }
}
