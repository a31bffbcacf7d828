//! Recording destination and encoder settings.
//!
//! The simulator never encodes video itself. The encoder settings travel with
//! every recording so the external renderer produces the same stream the
//! animation was tuned for.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Settings handed to the external video encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Output frame rate.
    pub fps: u32,

    /// Target bitrate in bits per second.
    pub bitrate: u64,

    /// Minimum encoder rate, in encoder notation (`650k`).
    pub min_rate: String,

    /// Maximum encoder rate, in encoder notation (`1M`).
    pub max_rate: String,

    /// Delay between frames when previewing (milliseconds).
    pub frame_interval_ms: u64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            fps: 40,
            bitrate: 250_000,
            min_rate: "650k".to_string(),
            max_rate: "1M".to_string(),
            frame_interval_ms: 25,
        }
    }
}

impl EncoderConfig {
    /// Validate the encoder configuration.
    pub fn validate(&self) -> SimResult<()> {
        if self.fps == 0 {
            return Err(SimError::invalid_param("encoder.fps", self.fps, "Must be > 0"));
        }
        if self.bitrate == 0 {
            return Err(SimError::invalid_param(
                "encoder.bitrate",
                self.bitrate,
                "Must be > 0",
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(SimError::invalid_param(
                "encoder.frame_interval_ms",
                self.frame_interval_ms,
                "Must be > 0",
            ));
        }
        let min = parse_rate(&self.min_rate).ok_or_else(|| {
            SimError::invalid_param("encoder.min_rate", &self.min_rate, "Expected e.g. '650k'")
        })?;
        let max = parse_rate(&self.max_rate).ok_or_else(|| {
            SimError::invalid_param("encoder.max_rate", &self.max_rate, "Expected e.g. '1M'")
        })?;
        if min > max {
            return Err(SimError::invalid_param(
                "encoder.min_rate",
                &self.min_rate,
                format!("Must not exceed encoder.max_rate ({})", self.max_rate),
            ));
        }
        Ok(())
    }
}

/// Parse an encoder rate such as `650k`, `1M` or `250000` into bits per second.
pub fn parse_rate(rate: &str) -> Option<u64> {
    let rate = rate.trim();
    let (digits, multiplier) = match rate.chars().last()? {
        'k' | 'K' => (&rate[..rate.len() - 1], 1_000),
        'm' | 'M' => (&rate[..rate.len() - 1], 1_000_000),
        _ => (rate, 1),
    };
    digits.parse::<u64>().ok()?.checked_mul(multiplier)
}

/// Where recordings go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory recordings are written into (created on demand).
    pub directory: PathBuf,

    /// Encoder settings stored in each recording.
    pub encoder: EncoderConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("recordings"),
            encoder: EncoderConfig::default(),
        }
    }
}

impl OutputConfig {
    /// Validate the output configuration.
    pub fn validate(&self) -> SimResult<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(SimError::ConfigError(
                "output.directory must not be empty".into(),
            ));
        }
        self.encoder.validate()
    }

    /// Recording file name, encoding oscillator count and K: `3lines-0.006.json`.
    pub fn recording_file_name(oscillators: usize, k: f64) -> String {
        format!("{}lines-{}.json", oscillators, k)
    }

    /// Video file name the external encoder should produce: `3lines-0.006.mp4`.
    pub fn video_file_name(oscillators: usize, k: f64) -> String {
        format!("{}lines-{}.mp4", oscillators, k)
    }

    /// Output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
