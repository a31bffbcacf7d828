//! Uncoupled reference traces.
//!
//! The same oscillators replayed with coupling disabled, so every value is
//! `sin(c·t + θ₀)`. Drawn next to the coupled lines to show how far coupling
//! pulled each phase.

use crate::error::{SimError, SimResult};
use crate::timeline::TimeAxis;

use super::oscillator::{Oscillator, OscillatorSpec};
use super::sampling::sample_value;

/// Incremental reference generator, sampled once per frame alongside the
/// coupled oscillators.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceGenerator {
    traces: Vec<Oscillator>,
}

impl ReferenceGenerator {
    /// Create reference traces for `specs` with room for `frames` samples.
    pub fn new(specs: &[OscillatorSpec], frames: usize) -> SimResult<Self> {
        let traces = specs
            .iter()
            .map(|&spec| Oscillator::with_capacity(spec, frames))
            .collect::<SimResult<Vec<_>>>()?;
        Ok(Self { traces })
    }

    /// Sample every trace at time `t`. Phases are never touched.
    pub fn sample(&mut self, t: f64) {
        for trace in &mut self.traces {
            trace.sample(t);
        }
    }

    /// Check that sampling at `t` yields a finite value for every trace.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NonFinite` naming the first trace that overflows.
    pub fn check_sample(&self, t: f64) -> SimResult<()> {
        for (i, trace) in self.traces.iter().enumerate() {
            let value = trace.value_at(t);
            if !value.is_finite() {
                return Err(SimError::non_finite(format!("reference[{}].value", i), value));
            }
        }
        Ok(())
    }

    /// The reference traces.
    #[inline]
    pub fn traces(&self) -> &[Oscillator] {
        &self.traces
    }

    /// Samples taken so far per trace.
    pub fn history_len(&self) -> usize {
        self.traces.first().map_or(0, |t| t.history().len())
    }

    /// Clear every trace's history.
    pub fn reset(&mut self) {
        for trace in &mut self.traces {
            trace.reset();
        }
    }
}

/// Compute every reference trace over the whole time axis in one pass.
///
/// Produces exactly the values [`ReferenceGenerator::sample`] would
/// accumulate frame by frame.
pub fn precompute_reference(specs: &[OscillatorSpec], axis: &TimeAxis) -> Vec<Vec<f64>> {
    specs
        .iter()
        .map(|spec| {
            axis.iter()
                .map(|t| sample_value(t, spec.coefficient, spec.phase))
                .collect()
        })
        .collect()
}
