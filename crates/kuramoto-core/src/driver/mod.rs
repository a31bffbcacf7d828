//! Frame driver.
//!
//! [`FrameDriver`] owns the simulation state, the time axis and the optional
//! reference traces, and advances them one frame at a time. Each advance
//! performs exactly one coupling update and one sample per oscillator, then
//! yields a read-only [`Frame`] for rendering.
//!
//! # Example
//!
//! ```
//! use kuramoto_core::config::SimConfig;
//! use kuramoto_core::driver::FrameDriver;
//!
//! let mut config = SimConfig::default();
//! config.timeline.samples = 16;
//!
//! let mut driver = FrameDriver::from_config(&config).unwrap();
//! while let Some(frame) = driver.advance().unwrap() {
//!     assert_eq!(frame.values().len(), 3);
//! }
//! assert!(driver.is_finished());
//! assert_eq!(driver.state().history_len(), 16);
//! ```

mod frame;
mod state;


use tracing::{debug, info};

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::phase::{Oscillator, ReferenceGenerator};
use crate::render::FrameSink;
use crate::simulation::SimulationState;
use crate::timeline::TimeAxis;

pub use frame::{Frame, RunHeader, RunSummary};
pub use state::DriverState;

/// Single-threaded frame-advance loop over a fixed time axis.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    state: SimulationState,
    reference: Option<ReferenceGenerator>,
    axis: TimeAxis,
    status: DriverState,
}

impl FrameDriver {
    /// Create a driver over `axis`.
    ///
    /// `state` should be fresh; any history it already holds is kept.
    pub fn new(
        state: SimulationState,
        axis: TimeAxis,
        reference: Option<ReferenceGenerator>,
    ) -> Self {
        Self {
            state,
            reference,
            axis,
            status: DriverState::Idle,
        }
    }

    /// Build state, time axis and reference traces from a configuration.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let axis = config.timeline.axis()?;
        let state = SimulationState::from_config(config)?;
        let reference = if config.coupling.reference {
            Some(ReferenceGenerator::new(
                &config.coupling.preset.specs(),
                axis.len(),
            )?)
        } else {
            None
        };
        Ok(Self::new(state, axis, reference))
    }

    /// Process the next frame.
    ///
    /// Returns `Ok(None)` once the time axis is exhausted; the driver is then
    /// [`DriverState::Finished`] and further calls do nothing.
    pub fn advance(&mut self) -> SimResult<Option<Frame<'_>>> {
        let Some(index) = self.status.next_index() else {
            return Ok(None);
        };
        let Some(t) = self.axis.get(index) else {
            self.status = DriverState::Finished;
            debug!(frames = self.axis.len(), "Time axis exhausted");
            return Ok(None);
        };

        if let Some(reference) = &self.reference {
            reference.check_sample(t)?;
        }
        self.state.step(t)?;
        if let Some(reference) = self.reference.as_mut() {
            reference.sample(t);
        }
        self.status = DriverState::Running { frame_index: index };

        Ok(Some(self.frame_at(index, t)))
    }

    /// Drive the remaining frames into `sink`.
    ///
    /// Calls `begin` once, `frame` for every processed frame and `finish`
    /// with the summary. A sink error stops the run and is returned.
    pub fn run<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> SimResult<RunSummary> {
        let header = self.header();
        info!(
            oscillators = header.oscillator_count,
            coupling = header.coupling,
            mode = %header.coupling_mode,
            frames = header.frames,
            "Starting simulation run"
        );
        sink.begin(&header)?;

        while let Some(frame) = self.advance()? {
            sink.frame(&frame)?;
        }

        let summary = self.summary();
        info!(
            frames = summary.frames,
            order_parameter = summary.order_parameter,
            phase_spread = summary.phase_spread,
            "Simulation run finished"
        );
        sink.finish(&summary)?;
        Ok(summary)
    }

    /// The frame most recently processed, if the driver is running.
    pub fn current_frame(&self) -> Option<Frame<'_>> {
        match self.status {
            DriverState::Running { frame_index } => {
                let t = self.axis.get(frame_index)?;
                Some(self.frame_at(frame_index, t))
            }
            DriverState::Idle | DriverState::Finished => None,
        }
    }

    fn frame_at(&self, index: usize, time: f64) -> Frame<'_> {
        Frame {
            index,
            time,
            times: &self.axis.as_slice()[..=index],
            oscillators: self.state.oscillators(),
            reference: self.reference_traces(),
        }
    }

    /// Run description for sinks.
    pub fn header(&self) -> RunHeader {
        RunHeader {
            oscillator_count: self.state.len(),
            coupling: self.state.coupling(),
            coupling_mode: self.state.mode(),
            frames: self.axis.len(),
            reference: self.reference.is_some(),
        }
    }

    /// Synchronization figures for the current state.
    pub fn summary(&self) -> RunSummary {
        let (r, psi) = self.state.order_parameter();
        RunSummary {
            frames: self.frames_processed(),
            order_parameter: r,
            mean_phase: psi,
            phase_spread: self.state.phase_spread(),
        }
    }

    /// Current driver state.
    #[inline]
    pub fn status(&self) -> DriverState {
        self.status
    }

    /// True once the time axis is exhausted.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Frames processed so far.
    pub fn frames_processed(&self) -> usize {
        self.status.frames_processed(self.axis.len())
    }

    /// Sample times processed so far.
    pub fn processed_times(&self) -> &[f64] {
        &self.axis.as_slice()[..self.frames_processed()]
    }

    /// The simulation state.
    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The full time axis.
    #[inline]
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Reference traces, empty when disabled.
    pub fn reference_traces(&self) -> &[Oscillator] {
        match &self.reference {
            Some(reference) => reference.traces(),
            None => &[],
        }
    }
}
