//! Owned simulation state.
//!
//! [`SimulationState`] owns the oscillator collection for a run. Each frame
//! advance borrows it mutably, applies one coupling update and samples every
//! oscillator once, so all histories stay in lockstep.

use tracing::trace;

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::phase::{
    apply_coupling, order_parameter, phase_spread, CouplingMode, Oscillator, OscillatorSpec,
};

/// Coupled oscillators plus the coupling constant they share.
#[derive(Debug, Clone)]
pub struct SimulationState {
    oscillators: Vec<Oscillator>,
    coupling: f64,
    mode: CouplingMode,
    /// Phase snapshot reused by every coupling step.
    snapshot: Vec<f64>,
    /// Phases before the current step, restored if the step is rejected.
    rollback: Vec<f64>,
    steps: usize,
}

impl SimulationState {
    /// Create a state for `specs` coupled with constant `k`.
    ///
    /// # Errors
    ///
    /// - `SimError::EmptyInput` if `specs` is empty
    /// - `SimError::InvalidCoupling` if `k` is not finite
    /// - `SimError::NonFinite` if any initial phase or coefficient is not finite
    pub fn new(specs: &[OscillatorSpec], k: f64, mode: CouplingMode) -> SimResult<Self> {
        Self::with_capacity(specs, k, mode, 0)
    }

    /// Like [`SimulationState::new`], reserving history for `frames` samples.
    pub fn with_capacity(
        specs: &[OscillatorSpec],
        k: f64,
        mode: CouplingMode,
        frames: usize,
    ) -> SimResult<Self> {
        if specs.is_empty() {
            return Err(SimError::EmptyInput);
        }
        if !k.is_finite() {
            return Err(SimError::invalid_coupling(k, "must be a finite number"));
        }

        let oscillators = specs
            .iter()
            .enumerate()
            .map(|(i, &spec)| {
                SimError::ensure_finite(&format!("oscillators[{}].phase", i), spec.phase)?;
                SimError::ensure_finite(
                    &format!("oscillators[{}].coefficient", i),
                    spec.coefficient,
                )?;
                Oscillator::with_capacity(spec, frames)
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self {
            snapshot: Vec::with_capacity(oscillators.len()),
            rollback: Vec::with_capacity(oscillators.len()),
            oscillators,
            coupling: k,
            mode,
            steps: 0,
        })
    }

    /// Build the state described by a validated configuration.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        config.coupling.validate()?;
        Self::with_capacity(
            &config.coupling.preset.specs(),
            config.coupling.strength,
            config.coupling.mode,
            config.timeline.samples,
        )
    }

    /// Apply one coupling update to every phase.
    pub fn couple(&mut self) {
        apply_coupling(
            &mut self.oscillators,
            self.coupling,
            self.mode,
            &mut self.snapshot,
        );
    }

    /// Sample every oscillator at time `t`.
    pub(crate) fn sample(&mut self, t: f64) {
        for osc in &mut self.oscillators {
            osc.sample(t);
        }
    }

    /// Process one frame: couple, then sample at `t`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NonFinite` if `t` is NaN or infinite, or if the
    /// updated phases or sampled values overflow (large coefficients or K).
    /// A rejected step leaves phases and histories untouched.
    pub fn step(&mut self, t: f64) -> SimResult<()> {
        SimError::ensure_finite("t", t)?;

        self.rollback.clear();
        self.rollback
            .extend(self.oscillators.iter().map(Oscillator::phase));
        self.couple();

        if let Err(err) = self.check_frame(t) {
            for (osc, &phase) in self.oscillators.iter_mut().zip(&self.rollback) {
                osc.phase = phase;
            }
            return Err(err);
        }

        self.sample(t);
        self.steps += 1;

        debug_assert!(
            self.oscillators
                .iter()
                .all(|o| o.history().len() == self.history_len()),
            "histories out of lockstep"
        );
        trace!(step = self.steps, t, "frame processed");
        Ok(())
    }

    fn check_frame(&self, t: f64) -> SimResult<()> {
        for (i, osc) in self.oscillators.iter().enumerate() {
            let phase = osc.phase();
            if !phase.is_finite() {
                return Err(SimError::non_finite(
                    format!("oscillators[{}].phase", i),
                    phase,
                ));
            }
            let value = osc.value_at(t);
            if !value.is_finite() {
                return Err(SimError::non_finite(
                    format!("oscillators[{}].value", i),
                    value,
                ));
            }
        }
        Ok(())
    }

    /// The oscillators, in index order.
    #[inline]
    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    /// Current phases, in index order.
    pub fn phases(&self) -> Vec<f64> {
        self.oscillators.iter().map(Oscillator::phase).collect()
    }

    /// Number of oscillators.
    #[inline]
    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    /// Always false; construction rejects empty sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }

    /// Coupling constant K.
    #[inline]
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Coupling mode.
    #[inline]
    pub fn mode(&self) -> CouplingMode {
        self.mode
    }

    /// Frames processed through [`SimulationState::step`].
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// History length shared by every oscillator.
    pub fn history_len(&self) -> usize {
        self.oscillators.first().map_or(0, |o| o.history().len())
    }

    /// Kuramoto order parameter `(r, ψ)` of the current phases.
    pub fn order_parameter(&self) -> (f64, f64) {
        order_parameter(&self.phases())
    }

    /// Largest pairwise phase difference of the current phases.
    pub fn phase_spread(&self) -> f64 {
        phase_spread(&self.phases())
    }

    /// Restore initial phases and clear every history.
    pub fn reset(&mut self) {
        for osc in &mut self.oscillators {
            osc.reset();
        }
        self.steps = 0;
    }
}
