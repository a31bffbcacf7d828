//! Coupling settings and the fixed oscillator presets.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::phase::{CouplingMode, OscillatorSpec};

/// Smallest accepted coupling constant.
pub const MIN_COUPLING: f64 = 0.0;

/// Largest accepted coupling constant.
///
/// With four oscillators a single Euler step may already move a phase by
/// `3 * K` radians, so anything above 1 no longer reads as gradual
/// synchronization.
pub const MAX_COUPLING: f64 = 1.0;

/// The fixed oscillator sets a run may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Three unit-frequency lines at phases `0`, `π/2`, `0.75π`.
    #[default]
    ThreeLines,
    /// Four unit-frequency lines at phases `0`, `π/2`, `0.75π`, `π`.
    FourLines,
}

impl Preset {
    /// All presets.
    pub fn all() -> [Preset; 2] {
        [Preset::ThreeLines, Preset::FourLines]
    }

    /// Initial phases and coefficients for this preset.
    pub fn specs(self) -> Vec<OscillatorSpec> {
        let phases: &[f64] = match self {
            Preset::ThreeLines => &[0.0, PI / 2.0, 0.75 * PI],
            Preset::FourLines => &[0.0, PI / 2.0, 0.75 * PI, PI],
        };
        phases
            .iter()
            .map(|&phase| OscillatorSpec::new(phase, 1.0))
            .collect()
    }

    /// Number of oscillators in this preset.
    pub fn oscillator_count(self) -> usize {
        match self {
            Preset::ThreeLines => 3,
            Preset::FourLines => 4,
        }
    }

    /// Stable name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::ThreeLines => "three-lines",
            Preset::FourLines => "four-lines",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "three-lines" | "3" => Ok(Preset::ThreeLines),
            "four-lines" | "4" => Ok(Preset::FourLines),
            other => Err(SimError::invalid_param(
                "preset",
                other,
                "Expected 'three-lines' or 'four-lines'",
            )),
        }
    }
}

/// Coupling settings shared read-only by every oscillator during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouplingConfig {
    /// Coupling constant K.
    /// Range: `[0.0, 1.0]`
    pub strength: f64,

    /// How phases are read while a step is applied.
    pub mode: CouplingMode,

    /// Which fixed oscillator set to simulate.
    pub preset: Preset,

    /// Also produce the uncoupled reference traces.
    pub reference: bool,
}

impl Default for CouplingConfig {
    fn default() -> Self {
        Self {
            strength: 0.006,
            mode: CouplingMode::default(),
            preset: Preset::default(),
            reference: true,
        }
    }
}

impl CouplingConfig {
    /// Validate the coupling configuration.
    pub fn validate(&self) -> SimResult<()> {
        validate_strength(self.strength).map(|_| ())
    }
}

/// Check a coupling constant against the accepted range.
pub(crate) fn validate_strength(k: f64) -> SimResult<f64> {
    if !k.is_finite() {
        return Err(SimError::invalid_coupling(k, "must be a finite number"));
    }
    if !(MIN_COUPLING..=MAX_COUPLING).contains(&k) {
        return Err(SimError::invalid_coupling(
            k,
            format!("must be in [{}, {}]", MIN_COUPLING, MAX_COUPLING),
        ));
    }
    Ok(k)
}
