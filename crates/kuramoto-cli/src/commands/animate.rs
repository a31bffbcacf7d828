//! Run the simulation and hand the frames to a sink.
//!
//! # Usage
//!
//! ```bash
//! # Write recordings/3lines-0.006.json
//! kuramoto-cli 0.006
//!
//! # Stream frames to a live renderer instead
//! kuramoto-cli --debug 0.05 | plotter
//!
//! # Four lines, sequential coupling, 1024 frames
//! kuramoto-cli --preset four-lines --coupling-mode sequential --frames 1024 0.01
//! ```

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::{debug, info};

use kuramoto_core::{
    CouplingMode, FrameDriver, JsonLinesSink, Preset, Recording, SimConfig, TracingSink,
};

use crate::error::{CliError, CliExitCode};

/// Fixed oscillator sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Phases 0, π/2, 0.75π
    ThreeLines,
    /// Phases 0, π/2, 0.75π, π
    FourLines,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::ThreeLines => Preset::ThreeLines,
            PresetArg::FourLines => Preset::FourLines,
        }
    }
}

/// Order in which phases are updated within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CouplingModeArg {
    /// Every oscillator sees the phases from the start of the frame
    Synchronous,
    /// Oscillators see updates made earlier in the same frame
    Sequential,
}

impl From<CouplingModeArg> for CouplingMode {
    fn from(arg: CouplingModeArg) -> Self {
        match arg {
            CouplingModeArg::Synchronous => CouplingMode::Synchronous,
            CouplingModeArg::Sequential => CouplingMode::Sequential,
        }
    }
}

/// Arguments for a simulation run.
#[derive(Args, Debug)]
pub struct AnimateArgs {
    /// Coupling constant K, in [0, 1]
    #[arg(allow_negative_numbers = true)]
    pub coupling: f64,

    /// Stream frames to stdout as JSON lines instead of writing a recording
    #[arg(short, long)]
    pub debug: bool,

    /// Oscillator set to simulate
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Number of frames on the time axis
    #[arg(long)]
    pub frames: Option<usize>,

    /// Phase update order
    #[arg(long, value_enum)]
    pub coupling_mode: Option<CouplingModeArg>,

    /// Skip the uncoupled reference traces
    #[arg(long)]
    pub no_reference: bool,

    /// Directory recordings are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl AnimateArgs {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut SimConfig) {
        config.coupling.strength = self.coupling;
        if let Some(preset) = self.preset {
            config.coupling.preset = preset.into();
        }
        if let Some(mode) = self.coupling_mode {
            config.coupling.mode = mode.into();
        }
        if let Some(frames) = self.frames {
            config.timeline.samples = frames;
        }
        if self.no_reference {
            config.coupling.reference = false;
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
    }
}

/// Execute a run and return the process exit code.
pub fn handle_animate(args: AnimateArgs) -> i32 {
    match run(&args) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            debug!(error = ?e, "Run failed");
            eprintln!("Error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(args: &AnimateArgs) -> Result<(), CliError> {
    let mut config = SimConfig::load_layers(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;
    debug!(?config, "Effective configuration");

    let mut driver = FrameDriver::from_config(&config)?;
    info!(
        oscillators = config.coupling.preset.oscillator_count(),
        k = config.coupling.strength,
        mode = %config.coupling.mode,
        frames = config.timeline.samples,
        "Starting simulation"
    );

    if args.debug {
        let stdout = io::stdout();
        let mut sinks = (
            JsonLinesSink::new(BufWriter::new(stdout.lock())),
            TracingSink::default(),
        );
        driver.run(&mut sinks)?;
        return Ok(());
    }

    driver.run(&mut TracingSink::default())?;
    let recording = Recording::capture(&driver, &config.output);
    let path = recording.write_to(config.output.directory())?;
    println!("{}", path.display());
    Ok(())
}
