//! Core oscillator implementation.
//!
//! Construction, accessors and sampling for a single oscillator.

use crate::error::{SimError, SimResult};
use crate::phase::sampling::sample_value;

use super::types::{Oscillator, OscillatorSpec};

impl Oscillator {
    /// Create an oscillator from its initial values.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NonFinite` if the phase or coefficient is NaN or
    /// infinite.
    pub fn new(spec: OscillatorSpec) -> SimResult<Self> {
        Self::with_capacity(spec, 0)
    }

    /// Create an oscillator with room for `frames` history samples.
    pub fn with_capacity(spec: OscillatorSpec, frames: usize) -> SimResult<Self> {
        SimError::ensure_finite("phase", spec.phase)?;
        SimError::ensure_finite("coefficient", spec.coefficient)?;

        Ok(Self {
            initial_phase: spec.phase,
            phase: spec.phase,
            coefficient: spec.coefficient,
            history: Vec::with_capacity(frames),
        })
    }

    /// Current phase in radians.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase the oscillator started with.
    #[inline]
    pub fn initial_phase(&self) -> f64 {
        self.initial_phase
    }

    /// Total phase shift accumulated through coupling.
    #[inline]
    pub fn phase_shift(&self) -> f64 {
        self.phase - self.initial_phase
    }

    /// Angular frequency multiplier.
    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The initial values this oscillator was built from.
    pub fn spec(&self) -> OscillatorSpec {
        OscillatorSpec::new(self.initial_phase, self.coefficient)
    }

    /// Sampled values so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Most recent sampled value.
    pub fn last_value(&self) -> Option<f64> {
        self.history.last().copied()
    }

    /// Value this oscillator would output at time `t` with its current phase.
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        sample_value(t, self.coefficient, self.phase)
    }

    /// Sample the waveform at time `t` and append it to the history.
    ///
    /// Call once per frame, after the frame's coupling update.
    pub fn sample(&mut self, t: f64) -> f64 {
        let value = self.value_at(t);
        self.history.push(value);
        value
    }

    /// Restore the initial phase and clear the history.
    pub fn reset(&mut self) {
        self.phase = self.initial_phase;
        self.history.clear();
    }

    /// Move the phase by `delta` radians.
    #[inline]
    pub(crate) fn shift_phase(&mut self, delta: f64) {
        self.phase += delta;
    }
}
