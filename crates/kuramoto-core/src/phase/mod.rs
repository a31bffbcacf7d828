//! Phase oscillation module.
//!
//! Implements the discrete Kuramoto coupling rule and waveform sampling:
//! - [`Oscillator`]: phase, coefficient and sampled history of one line
//! - Coupling update (`θᵢ ← θᵢ + K Σ_{j≠i} sin(θⱼ − θᵢ)`, Euler step of 1)
//! - Sampling (`yᵢ(t) = sin(cᵢ t + θᵢ)`)
//! - Uncoupled reference traces for comparison
//! - Order parameter and phase spread
//!
//! # Example
//!
//! ```
//! use kuramoto_core::phase::{next_phases, sample_value};
//! use std::f64::consts::PI;
//!
//! let phases = [0.0, PI / 2.0, PI];
//! let next = next_phases(&phases, 0.05);
//!
//! // The outer phases move toward the middle one
//! assert!(next[0] > phases[0]);
//! assert!(next[2] < phases[2]);
//!
//! let y = sample_value(1.0, 1.0, next[0]);
//! assert!((-1.0..=1.0).contains(&y));
//! ```

mod order;
mod oscillator;
mod reference;
mod sampling;

pub use order::{order_parameter, phase_difference, phase_spread};
pub use oscillator::{next_phases, CouplingMode, Oscillator, OscillatorSpec};
pub use reference::{precompute_reference, ReferenceGenerator};
pub use sampling::sample_value;

pub(crate) use oscillator::apply_coupling;
