//! Time axis settings.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::timeline::TimeAxis;

/// Evenly spaced sample times, both endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// First sample time.
    pub start: f64,

    /// Last sample time.
    /// Default: `8π`
    pub end: f64,

    /// Number of samples (one frame per sample).
    pub samples: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 8.0 * PI,
            samples: 512,
        }
    }
}

impl TimelineConfig {
    /// Validate the timeline configuration.
    pub fn validate(&self) -> SimResult<()> {
        SimError::ensure_finite("timeline.start", self.start)?;
        SimError::ensure_finite("timeline.end", self.end)?;
        if self.end <= self.start {
            return Err(SimError::invalid_param(
                "timeline.end",
                self.end,
                format!("Must be greater than timeline.start ({})", self.start),
            ));
        }
        if self.samples == 0 {
            return Err(SimError::invalid_param(
                "timeline.samples",
                self.samples,
                "At least one sample is required",
            ));
        }
        Ok(())
    }

    /// Build the time axis described by this configuration.
    pub fn axis(&self) -> SimResult<TimeAxis> {
        self.validate()?;
        TimeAxis::linspace(self.start, self.end, self.samples)
    }
}
