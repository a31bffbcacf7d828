//! Invalid input and boundary tests.

use std::f64::consts::PI;

use kuramoto_core::config::SimConfig;
use kuramoto_core::driver::{DriverState, FrameDriver};
use kuramoto_core::error::SimError;
use kuramoto_core::phase::{CouplingMode, OscillatorSpec, ReferenceGenerator};
use kuramoto_core::simulation::SimulationState;
use kuramoto_core::timeline::TimeAxis;

use super::helpers::three_lines;

#[test]
fn test_non_finite_coupling_rejected() {
    for k in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = SimulationState::new(&three_lines(), k, CouplingMode::Synchronous).unwrap_err();
        assert!(matches!(err, SimError::InvalidCoupling { .. }), "k = {}", k);
    }
}

#[test]
fn test_non_finite_phase_rejected() {
    let specs = vec![
        OscillatorSpec::new(0.0, 1.0),
        OscillatorSpec::new(f64::NAN, 1.0),
    ];
    let err = SimulationState::new(&specs, 0.01, CouplingMode::Synchronous).unwrap_err();
    match err {
        SimError::NonFinite { name, .. } => assert_eq!(name, "oscillators[1].phase"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_non_finite_coefficient_rejected() {
    let specs = vec![OscillatorSpec::new(0.0, f64::INFINITY)];
    let err = SimulationState::new(&specs, 0.01, CouplingMode::Synchronous).unwrap_err();
    assert!(matches!(err, SimError::NonFinite { .. }));
    assert!(ReferenceGenerator::new(&specs, 4).is_err());
}

#[test]
fn test_empty_oscillator_set() {
    let err = SimulationState::new(&[], 0.01, CouplingMode::Synchronous).unwrap_err();
    assert!(matches!(err, SimError::EmptyInput));
}

#[test]
fn test_single_oscillator_is_uncoupled() {
    let specs = vec![OscillatorSpec::new(0.3, 2.0)];
    let mut state = SimulationState::new(&specs, 0.9, CouplingMode::Synchronous).unwrap();
    for t in [0.0, 1.0, 2.0] {
        state.step(t).unwrap();
    }
    assert_eq!(state.oscillators()[0].phase(), 0.3);
    assert_eq!(state.history_len(), 3);
}

#[test]
fn test_non_finite_time_appends_nothing() {
    let mut state = SimulationState::new(&three_lines(), 0.01, CouplingMode::Synchronous).unwrap();
    state.step(0.0).unwrap();
    let phases = state.phases();

    assert!(state.step(f64::NAN).is_err());
    assert!(state.step(f64::INFINITY).is_err());
    assert_eq!(state.history_len(), 1);
    assert_eq!(state.steps(), 1);
    assert_eq!(state.phases(), phases);
}

#[test]
fn test_out_of_range_config_rejected() {
    for k in [-0.5, 1.5, f64::NAN] {
        let mut config = SimConfig::default();
        config.coupling.strength = k;
        let err = FrameDriver::from_config(&config).unwrap_err();
        assert!(matches!(err, SimError::InvalidCoupling { .. }), "k = {}", k);
        assert!(err.is_input_error());
    }
}

#[test]
fn test_coupling_range_bounds_accepted() {
    for k in [0.0, 1.0] {
        let mut config = SimConfig::default();
        config.coupling.strength = k;
        config.timeline.samples = 4;
        assert!(FrameDriver::from_config(&config).is_ok(), "k = {}", k);
    }
}

#[test]
fn test_empty_axis_finishes_immediately() {
    let state = SimulationState::new(&three_lines(), 0.01, CouplingMode::Synchronous).unwrap();
    let mut driver = FrameDriver::new(state, TimeAxis::default(), None);

    assert!(driver.advance().unwrap().is_none());
    assert_eq!(driver.status(), DriverState::Finished);
    assert_eq!(driver.state().history_len(), 0);
    assert_eq!(driver.state().steps(), 0);
}

#[test]
fn test_single_sample_axis() {
    let axis = TimeAxis::linspace(0.0, 8.0 * PI, 1).unwrap();
    let state = SimulationState::new(&three_lines(), 0.01, CouplingMode::Synchronous).unwrap();
    let mut driver = FrameDriver::new(state, axis, None);

    let frame = driver.advance().unwrap().unwrap();
    assert_eq!(frame.time, 0.0);
    assert!(driver.advance().unwrap().is_none());
    assert_eq!(driver.frames_processed(), 1);
}

#[test]
fn test_invalid_axes_rejected() {
    assert!(TimeAxis::linspace(1.0, 0.0, 10).is_err());
    assert!(TimeAxis::linspace(0.0, f64::NAN, 10).is_err());
    assert!(TimeAxis::from_times(vec![0.0, 1.0, 1.0]).is_err());
    assert!(TimeAxis::from_times(vec![0.0, f64::INFINITY]).is_err());
}

#[test]
fn test_large_coupling_stays_finite() {
    let specs = vec![
        OscillatorSpec::new(0.0, 1.0),
        OscillatorSpec::new(2.0, 1.0),
        OscillatorSpec::new(4.0, 1.0),
        OscillatorSpec::new(5.5, 1.0),
    ];
    let mut state = SimulationState::new(&specs, 1.0, CouplingMode::Sequential).unwrap();
    for i in 0..1000 {
        state.step(i as f64 * 0.01).unwrap();
    }
    assert!(state.phases().iter().all(|p| p.is_finite()));
}

#[test]
fn test_overflowing_sample_appends_nothing() {
    let specs = vec![
        OscillatorSpec::new(0.0, 1e308),
        OscillatorSpec::new(1.0, 1.0),
    ];
    for mode in [CouplingMode::Synchronous, CouplingMode::Sequential] {
        let mut state = SimulationState::new(&specs, 0.01, mode).unwrap();
        let phases = state.phases();

        let err = state.step(8.0).unwrap_err();
        assert!(matches!(err, SimError::NonFinite { .. }));
        assert!(err.is_input_error());
        assert_eq!(state.history_len(), 0);
        assert_eq!(state.phases(), phases);
    }
}

#[test]
fn test_driver_stops_on_overflow() {
    let specs = vec![
        OscillatorSpec::new(0.0, 1e308),
        OscillatorSpec::new(1.0, 1.0),
    ];
    let state = SimulationState::new(&specs, 0.01, CouplingMode::Synchronous).unwrap();
    let reference = ReferenceGenerator::new(&specs, 4).unwrap();
    let axis = TimeAxis::from_times(vec![0.0, 1e-300, 8.0]).unwrap();
    let mut driver = FrameDriver::new(state, axis, Some(reference));

    assert!(driver.advance().unwrap().is_some());
    assert!(driver.advance().unwrap().is_some());
    assert!(driver.advance().is_err());

    assert_eq!(driver.status(), DriverState::Running { frame_index: 1 });
    assert_eq!(driver.state().history_len(), 2);
    for trace in driver.reference_traces() {
        assert_eq!(trace.history().len(), 2);
    }
    for osc in driver.state().oscillators().iter().chain(driver.reference_traces()) {
        assert!(osc.history().iter().all(|v| v.is_finite()));
    }
}
