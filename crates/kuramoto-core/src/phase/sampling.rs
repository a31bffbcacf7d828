//! Waveform sampling.

/// Instantaneous output of an oscillator: `sin(c·t + p)`.
///
/// Pure and bit-reproducible for identical inputs.
#[inline]
pub fn sample_value(t: f64, coefficient: f64, phase: f64) -> f64 {
    (coefficient * t + phase).sin()
}
