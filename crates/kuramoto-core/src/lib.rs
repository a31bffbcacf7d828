//! Kuramoto simulation engine for synchronizing sine functions.
//!
//! N sine lines `yᵢ(t) = sin(cᵢ t + θᵢ)` whose phases attract each other
//! through the discrete Kuramoto rule
//!
//! ```text
//! θᵢ ← θᵢ + K Σ_{j≠i} sin(θⱼ − θᵢ)
//! ```
//!
//! applied once per frame before sampling.
//!
//! # Modules
//!
//! - [`config`]: Configuration types and layered loading
//! - [`error`]: Error types and result aliases
//! - [`phase`]: Oscillators, coupling update, sampling, reference traces, order parameter
//! - [`timeline`]: Sample-time axis
//! - [`simulation`]: Owned simulation state
//! - [`driver`]: Frame driver state machine
//! - [`render`]: Frame sinks and recordings
//!
//! # Example
//!
//! ```
//! use kuramoto_core::{FrameDriver, SimConfig};
//!
//! let mut config = SimConfig::default();
//! config.coupling.strength = 0.05;
//! config.timeline.samples = 64;
//!
//! let mut driver = FrameDriver::from_config(&config).unwrap();
//! while driver.advance().unwrap().is_some() {}
//!
//! let summary = driver.summary();
//! assert_eq!(summary.frames, 64);
//! assert!(summary.order_parameter > 0.0 && summary.order_parameter <= 1.0);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod phase;
pub mod render;
pub mod simulation;
pub mod timeline;

pub use config::{Preset, SimConfig};
pub use driver::{DriverState, Frame, FrameDriver, RunHeader, RunSummary};
pub use error::{SimError, SimResult};
pub use phase::{CouplingMode, Oscillator, OscillatorSpec};
pub use render::{FrameSink, JsonLinesSink, Recording, TracingSink};
pub use simulation::SimulationState;
pub use timeline::TimeAxis;
