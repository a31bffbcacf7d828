//! Oscillator type definitions.

use serde::{Deserialize, Serialize};

/// Initial values for one oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSpec {
    /// Initial phase offset (radians).
    pub phase: f64,

    /// Angular frequency multiplier applied to time.
    pub coefficient: f64,
}

impl OscillatorSpec {
    /// Create a spec from an initial phase and coefficient.
    pub fn new(phase: f64, coefficient: f64) -> Self {
        Self { phase, coefficient }
    }
}

/// One sine line being animated.
///
/// The phase is never wrapped; `sin` wraps it implicitly when sampling.
/// The history is append-only and holds one value per processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    /// Phase at creation (radians).
    pub(crate) initial_phase: f64,

    /// Current phase (radians), the running sum of all coupling updates.
    pub(crate) phase: f64,

    /// Angular frequency multiplier.
    pub(crate) coefficient: f64,

    /// Sampled output values, one per frame.
    pub(crate) history: Vec<f64>,
}
