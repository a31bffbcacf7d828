//! Frame driver tests against the lockstep invariant.

use kuramoto_core::config::{Preset, SimConfig};
use kuramoto_core::driver::{DriverState, FrameDriver};
use kuramoto_core::phase::CouplingMode;

fn config(preset: Preset, samples: usize, mode: CouplingMode) -> SimConfig {
    let mut config = SimConfig::default();
    config.coupling.preset = preset;
    config.coupling.mode = mode;
    config.coupling.strength = 0.05;
    config.timeline.samples = samples;
    config
}

#[test]
fn test_lockstep_every_frame() {
    for preset in Preset::all() {
        for mode in [CouplingMode::Synchronous, CouplingMode::Sequential] {
            let mut driver = FrameDriver::from_config(&config(preset, 100, mode)).unwrap();
            let mut processed = 0;

            while let Some(frame) = driver.advance().unwrap() {
                processed += 1;
                assert_eq!(frame.times.len(), processed);
                for osc in frame.oscillators.iter().chain(frame.reference) {
                    assert_eq!(osc.history().len(), processed);
                }
            }

            assert_eq!(processed, 100);
            assert_eq!(driver.state().oscillators().len(), preset.oscillator_count());
        }
    }
}

#[test]
fn test_early_stop_keeps_partial_histories() {
    let mut driver =
        FrameDriver::from_config(&config(Preset::FourLines, 100, CouplingMode::Synchronous))
            .unwrap();

    for _ in 0..40 {
        driver.advance().unwrap();
    }

    assert_eq!(driver.status(), DriverState::Running { frame_index: 39 });
    assert_eq!(driver.frames_processed(), 40);
    assert_eq!(driver.processed_times().len(), 40);
    assert_eq!(driver.state().history_len(), 40);
}

#[test]
fn test_frame_times_follow_axis() {
    let mut driver =
        FrameDriver::from_config(&config(Preset::ThreeLines, 9, CouplingMode::Synchronous))
            .unwrap();
    let expected = driver.axis().as_slice().to_vec();

    let mut seen = Vec::new();
    while let Some(frame) = driver.advance().unwrap() {
        seen.push(frame.time);
    }
    assert_eq!(seen, expected);
}

#[test]
fn test_summary_reports_synchronization() {
    let mut driver =
        FrameDriver::from_config(&config(Preset::ThreeLines, 500, CouplingMode::Synchronous))
            .unwrap();
    let before = driver.summary();
    while driver.advance().unwrap().is_some() {}
    let after = driver.summary();

    assert_eq!(before.frames, 0);
    assert_eq!(after.frames, 500);
    assert!(after.order_parameter > before.order_parameter);
    assert!(after.phase_spread < before.phase_spread);
}
