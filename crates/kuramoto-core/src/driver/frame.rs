//! Read-only views handed to frame sinks.

use serde::{Deserialize, Serialize};

use crate::phase::{order_parameter, CouplingMode, Oscillator};

/// One processed frame, borrowed from the driver.
///
/// Sinks may read everything here but cannot mutate simulation state.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Index of this frame on the time axis.
    pub index: usize,

    /// Sample time of this frame.
    pub time: f64,

    /// Every sample time processed so far, this frame's included.
    pub times: &'a [f64],

    /// Coupled oscillators after this frame's update and sample.
    pub oscillators: &'a [Oscillator],

    /// Uncoupled reference traces; empty when disabled.
    pub reference: &'a [Oscillator],
}

impl<'a> Frame<'a> {
    /// Current phases of the coupled oscillators.
    pub fn phases(&self) -> Vec<f64> {
        self.oscillators.iter().map(Oscillator::phase).collect()
    }

    /// Values sampled for this frame, one per coupled oscillator.
    pub fn values(&self) -> Vec<f64> {
        last_values(self.oscillators)
    }

    /// Reference values sampled for this frame.
    pub fn reference_values(&self) -> Vec<f64> {
        last_values(self.reference)
    }

    /// Order parameter `(r, ψ)` of the coupled phases.
    pub fn order_parameter(&self) -> (f64, f64) {
        order_parameter(&self.phases())
    }
}

fn last_values(oscillators: &[Oscillator]) -> Vec<f64> {
    oscillators
        .iter()
        .filter_map(Oscillator::last_value)
        .collect()
}

/// Description of a run, sent to sinks before the first frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunHeader {
    /// Number of coupled oscillators.
    pub oscillator_count: usize,

    /// Coupling constant K.
    pub coupling: f64,

    /// Coupling mode.
    pub coupling_mode: CouplingMode,

    /// Frames on the time axis.
    pub frames: usize,

    /// Whether reference traces are produced.
    pub reference: bool,
}

/// Outcome of a run, sent to sinks after the last frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Frames processed.
    pub frames: usize,

    /// Final synchronization level r.
    pub order_parameter: f64,

    /// Final mean phase ψ.
    pub mean_phase: f64,

    /// Final largest pairwise phase difference.
    pub phase_spread: f64,
}
