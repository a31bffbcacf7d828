//! Coupled phase oscillator.
//!
//! `types` holds the data, `core` the per-oscillator operations and
//! `coupling` the collective phase update.

mod core;
mod coupling;
mod types;


pub use coupling::{next_phases, CouplingMode};
pub use types::{Oscillator, OscillatorSpec};

pub(crate) use coupling::{apply_coupling, coupling_sum};
