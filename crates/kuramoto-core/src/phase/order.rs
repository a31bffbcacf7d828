//! Synchronization measures.
//!
//! The order parameter follows the usual definition:
//!
//! ```text
//! r · e^(iψ) = (1/N) Σⱼ e^(iθⱼ)
//! ```
//!
//! When r → 1, all oscillators are in phase (synchronized).
//! When r → 0, phases are spread around the circle (incoherent).

use std::f64::consts::{PI, TAU};

/// Compute the Kuramoto order parameter `(r, ψ)`.
///
/// `r ∈ [0, 1]` is the synchronization level and `ψ ∈ [0, 2π)` the mean
/// phase. An empty slice yields `(0, 0)`.
pub fn order_parameter(phases: &[f64]) -> (f64, f64) {
    if phases.is_empty() {
        return (0.0, 0.0);
    }
    let n = phases.len() as f64;

    let (sum_sin, sum_cos) = phases
        .iter()
        .fold((0.0, 0.0), |(s, c), &theta| (s + theta.sin(), c + theta.cos()));

    let avg_sin = sum_sin / n;
    let avg_cos = sum_cos / n;

    let r = (avg_cos * avg_cos + avg_sin * avg_sin).sqrt().clamp(0.0, 1.0);
    let psi = avg_sin.atan2(avg_cos).rem_euclid(TAU);

    (r, psi)
}

/// Smallest angle between two phases, in `[0, π]`.
pub fn phase_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}

/// Largest pairwise [`phase_difference`] in the set.
pub fn phase_spread(phases: &[f64]) -> f64 {
    let mut spread: f64 = 0.0;
    for (i, &a) in phases.iter().enumerate() {
        for &b in &phases[i + 1..] {
            spread = spread.max(phase_difference(a, b));
        }
    }
    spread
}
