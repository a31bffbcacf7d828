//! Helper functions: deterministic oscillator sets and runs.

use std::f64::consts::PI;

use kuramoto_core::phase::{phase_spread, CouplingMode, OscillatorSpec};
use kuramoto_core::simulation::SimulationState;
use kuramoto_core::timeline::TimeAxis;

/// The three-line preset: phases `0`, `π/2`, `0.75π`, unit coefficients.
pub fn three_lines() -> Vec<OscillatorSpec> {
    specs_from_phases(&[0.0, PI / 2.0, 0.75 * PI])
}

/// Unit-coefficient oscillators at the given phases.
pub fn specs_from_phases(phases: &[f64]) -> Vec<OscillatorSpec> {
    phases.iter().map(|&p| OscillatorSpec::new(p, 1.0)).collect()
}

/// Default axis shape with a custom number of samples.
pub fn axis(samples: usize) -> TimeAxis {
    TimeAxis::linspace(0.0, 8.0 * PI, samples).expect("valid axis")
}

/// Run `steps` frames and return the final state.
pub fn run_steps(
    specs: &[OscillatorSpec],
    k: f64,
    mode: CouplingMode,
    steps: usize,
) -> SimulationState {
    let mut state = SimulationState::with_capacity(specs, k, mode, steps).expect("valid state");
    for t in axis(steps).iter() {
        state.step(t).expect("finite time");
    }
    state
}

/// Phase spread after every step, initial spread first.
pub fn spread_trajectory(
    specs: &[OscillatorSpec],
    k: f64,
    mode: CouplingMode,
    steps: usize,
) -> Vec<f64> {
    let mut state = SimulationState::new(specs, k, mode).expect("valid state");
    let mut spreads = vec![phase_spread(&state.phases())];
    for t in axis(steps).iter() {
        state.step(t).expect("finite time");
        spreads.push(state.phase_spread());
    }
    spreads
}

/// Assert two slices agree element-wise within `tol`.
pub fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {}: {} vs {} (tolerance {})",
            i,
            a,
            e,
            tol
        );
    }
}
