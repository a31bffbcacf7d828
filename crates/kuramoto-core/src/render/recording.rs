//! Complete run recording.
//!
//! A [`Recording`] is what the external encoder turns into a video: the time
//! axis, every coupled and reference trace, and the encoder settings. The file
//! name encodes the oscillator count and K (`3lines-0.006.json`).

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::{EncoderConfig, OutputConfig};
use crate::driver::{FrameDriver, RunSummary};
use crate::error::{SimError, SimResult};
use crate::phase::{CouplingMode, Oscillator};

/// One line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Phase at the start of the run.
    pub initial_phase: f64,

    /// Phase after the last processed frame.
    pub final_phase: f64,

    /// Angular frequency multiplier.
    pub coefficient: f64,

    /// Sampled values, one per processed frame.
    pub values: Vec<f64>,
}

impl From<&Oscillator> for TraceRecord {
    fn from(osc: &Oscillator) -> Self {
        Self {
            initial_phase: osc.initial_phase(),
            final_phase: osc.phase(),
            coefficient: osc.coefficient(),
            values: osc.history().to_vec(),
        }
    }
}

/// A finished (or stopped) run, ready for the encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Unique id of this run.
    pub run_id: Uuid,

    /// When the recording was captured.
    pub created_at: DateTime<Utc>,

    /// Number of coupled oscillators.
    pub oscillator_count: usize,

    /// Coupling constant K.
    pub coupling: f64,

    /// Coupling mode used.
    pub coupling_mode: CouplingMode,

    /// Settings for the encoder.
    pub encoder: EncoderConfig,

    /// File name the encoder should write, e.g. `3lines-0.006.mp4`.
    pub video_target: String,

    /// Processed sample times (x values).
    pub times: Vec<f64>,

    /// Coupled traces.
    pub coupled: Vec<TraceRecord>,

    /// Uncoupled reference traces; empty when disabled.
    pub reference: Vec<TraceRecord>,

    /// Synchronization at the end of the run.
    pub summary: RunSummary,
}

impl Recording {
    /// Capture everything the driver has processed so far.
    pub fn capture(driver: &FrameDriver, output: &OutputConfig) -> Self {
        let state = driver.state();
        Self {
            run_id: Uuid::new_v4(),
            created_at: Utc::now(),
            oscillator_count: state.len(),
            coupling: state.coupling(),
            coupling_mode: state.mode(),
            encoder: output.encoder.clone(),
            video_target: OutputConfig::video_file_name(state.len(), state.coupling()),
            times: driver.processed_times().to_vec(),
            coupled: state.oscillators().iter().map(TraceRecord::from).collect(),
            reference: driver
                .reference_traces()
                .iter()
                .map(TraceRecord::from)
                .collect(),
            summary: driver.summary(),
        }
    }

    /// Recording file name, e.g. `3lines-0.006.json`.
    pub fn file_name(&self) -> String {
        OutputConfig::recording_file_name(self.oscillator_count, self.coupling)
    }

    /// Write the recording into `directory`, creating it if needed.
    ///
    /// Returns the path written.
    pub fn write_to(&self, directory: &Path) -> SimResult<PathBuf> {
        fs::create_dir_all(directory)?;
        let path = directory.join(self.file_name());

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;

        info!(
            path = %path.display(),
            frames = self.times.len(),
            run_id = %self.run_id,
            "Recording written"
        );
        Ok(path)
    }

    /// Read a recording back from disk.
    pub fn read_from(path: &Path) -> SimResult<Self> {
        let file = File::open(path).map_err(|e| {
            SimError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open recording {}: {}", path.display(), e),
            ))
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
