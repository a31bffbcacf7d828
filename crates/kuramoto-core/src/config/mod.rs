//! Simulator configuration types.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables prefixed with `KURAMOTO_` (nested keys use
//! `__`, e.g. `KURAMOTO_COUPLING__STRENGTH=0.05`). Command-line flags are
//! applied on top by the CLI.
//!
//! # Example
//!
//! ```
//! use kuramoto_core::config::SimConfig;
//!
//! let config = SimConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.timeline.samples, 512);
//! ```

mod coupling;
mod output;
mod timeline;


use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimError, SimResult};

pub use coupling::{CouplingConfig, Preset, MAX_COUPLING, MIN_COUPLING};
pub use output::{parse_rate, EncoderConfig, OutputConfig};
pub use timeline::TimelineConfig;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "KURAMOTO";

/// Top-level simulator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Coupling constant, update mode and oscillator preset.
    pub coupling: CouplingConfig,

    /// Sample times for the run.
    pub timeline: TimelineConfig,

    /// Recording destination and encoder settings.
    pub output: OutputConfig,
}

impl SimConfig {
    /// Load configuration from defaults, an optional TOML file and the
    /// environment, then validate it.
    ///
    /// A `path` that is given but missing is an error.
    pub fn load(path: Option<&Path>) -> SimResult<Self> {
        let config = Self::load_layers(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge defaults, an optional TOML file and the environment without
    /// validating.
    ///
    /// Callers that apply further overrides (command-line flags) validate
    /// once after applying them.
    pub fn load_layers(path: Option<&Path>) -> SimResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "Loading configuration file");
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from a TOML file without consulting the environment.
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> SimResult<Self> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> SimResult<()> {
        self.coupling.validate()?;
        self.timeline.validate()?;
        self.output.validate()?;
        Ok(())
    }

    /// Name of the recording file this configuration produces.
    pub fn recording_file_name(&self) -> String {
        OutputConfig::recording_file_name(
            self.coupling.preset.oscillator_count(),
            self.coupling.strength,
        )
    }
}
