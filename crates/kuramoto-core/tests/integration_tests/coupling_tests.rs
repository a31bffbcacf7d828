//! Coupling behaviour tests.

use std::f64::consts::PI;

use kuramoto_core::phase::{next_phases, order_parameter, CouplingMode};
use kuramoto_core::simulation::SimulationState;

use super::helpers::{run_steps, specs_from_phases, spread_trajectory, three_lines};

#[test]
fn test_zero_coupling_keeps_phases() {
    for mode in [CouplingMode::Synchronous, CouplingMode::Sequential] {
        let specs = three_lines();
        let state = run_steps(&specs, 0.0, mode, 1000);

        for (osc, spec) in state.oscillators().iter().zip(&specs) {
            assert_eq!(
                osc.phase().to_bits(),
                spec.phase.to_bits(),
                "{:?}: phase moved without coupling",
                mode
            );
        }
    }
}

#[test]
fn test_zero_coupling_after_every_step() {
    let specs = specs_from_phases(&[0.3, 2.0, -1.0, 5.5]);
    let mut state = SimulationState::new(&specs, 0.0, CouplingMode::Synchronous).unwrap();
    let initial = state.phases();

    for i in 0..200 {
        state.step(i as f64 * 0.05).unwrap();
        assert_eq!(state.phases(), initial, "step {}", i);
    }
}

#[test]
fn test_small_coupling_synchronizes() {
    let specs = specs_from_phases(&[0.0, PI / 2.0, PI]);
    let spreads = spread_trajectory(&specs, 0.05, CouplingMode::Synchronous, 500);

    let initial = spreads[0];
    let last = *spreads.last().unwrap();
    assert!((initial - PI).abs() < 1e-12);
    assert!(last < 1e-6, "spread should collapse, got {}", last);

    for (i, pair) in spreads.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0] + 1e-12,
            "spread grew at step {}: {} -> {}",
            i,
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_small_coupling_synchronizes_sequential() {
    let specs = specs_from_phases(&[0.0, PI / 2.0, PI]);
    let spreads = spread_trajectory(&specs, 0.05, CouplingMode::Sequential, 500);

    let last = *spreads.last().unwrap();
    assert!(last < spreads[0] / 100.0, "spread should shrink, got {}", last);
}

#[test]
fn test_order_parameter_rises_with_coupling() {
    let specs = specs_from_phases(&[0.0, PI / 2.0, PI]);
    let initial: Vec<f64> = specs.iter().map(|s| s.phase).collect();
    let (r0, _) = order_parameter(&initial);

    let state = run_steps(&specs, 0.05, CouplingMode::Synchronous, 500);
    let (r, psi) = state.order_parameter();

    assert!(r > r0);
    assert!(r > 0.999, "expected near-full synchronization, got r = {}", r);
    // Symmetric start around π/2 keeps the mean phase there
    assert!((psi - PI / 2.0).abs() < 1e-9);
}

#[test]
fn test_middle_oscillator_is_fixed_point() {
    // θ₁ = π/2 sits exactly between its partners: its delta stays zero
    let specs = specs_from_phases(&[0.0, PI / 2.0, PI]);
    let state = run_steps(&specs, 0.05, CouplingMode::Synchronous, 100);
    assert!((state.oscillators()[1].phase() - PI / 2.0).abs() < 1e-12);
}

#[test]
fn test_state_matches_repeated_next_phases() {
    let specs = three_lines();
    let k = 0.02;
    let state = run_steps(&specs, k, CouplingMode::Synchronous, 50);

    let mut phases: Vec<f64> = specs.iter().map(|s| s.phase).collect();
    for _ in 0..50 {
        phases = next_phases(&phases, k);
    }

    assert_eq!(state.phases(), phases);
}

#[test]
fn test_modes_diverge_for_asymmetric_start() {
    let specs = three_lines();
    let synchronous = run_steps(&specs, 0.05, CouplingMode::Synchronous, 10);
    let sequential = run_steps(&specs, 0.05, CouplingMode::Sequential, 10);

    assert_ne!(synchronous.phases(), sequential.phases());
    assert_ne!(
        synchronous.oscillators()[2].history(),
        sequential.oscillators()[2].history()
    );
}

#[test]
fn test_phases_are_not_wrapped() {
    // Phases accumulate without reduction modulo 2π
    let specs = specs_from_phases(&[10.0 * PI, 10.5 * PI]);
    let state = run_steps(&specs, 0.01, CouplingMode::Synchronous, 20);
    assert!(state.phases().iter().all(|&p| p > 2.0 * PI));
}
