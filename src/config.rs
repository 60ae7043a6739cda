use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::error::LanderError;
use crate::pilot::{Autopilot, FullThrust, NoThrust, Pilot};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("touchdown speed must be a positive number, got {0}")]
    TouchdownSpeed(f64),
    #[error("braking margin must be zero or more, got {0}")]
    Margin(f64),
    #[error("max_steps must be at least 1")]
    MaxSteps,
    #[error("tick_ms must be at least 1")]
    Tick,
    #[error("{0} only applies to the autopilot")]
    AutopilotOnly(&'static str),
}

// ---------------------------------------------------------------------------
// Pilot selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PilotConfig {
    None,
    Full,
    Autopilot {
        #[serde(default = "default_touchdown_speed")]
        touchdown_speed: f64,
        #[serde(default = "default_margin")]
        margin: f64,
    },
}

fn default_touchdown_speed() -> f64 {
    Autopilot::default().touchdown_speed
}

fn default_margin() -> f64 {
    Autopilot::default().margin
}

impl Default for PilotConfig {
    fn default() -> Self {
        PilotConfig::Autopilot {
            touchdown_speed: default_touchdown_speed(),
            margin: default_margin(),
        }
    }
}

/// Pilot choice as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PilotKind {
    None,
    Full,
    Autopilot,
}

impl PilotConfig {
    pub fn kind(&self) -> PilotKind {
        match self {
            PilotConfig::None => PilotKind::None,
            PilotConfig::Full => PilotKind::Full,
            PilotConfig::Autopilot { .. } => PilotKind::Autopilot,
        }
    }

    pub fn build(&self) -> Box<dyn Pilot> {
        match *self {
            PilotConfig::None => Box::new(NoThrust),
            PilotConfig::Full => Box::new(FullThrust),
            PilotConfig::Autopilot { touchdown_speed, margin } => {
                Box::new(Autopilot::new(touchdown_speed, margin))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Run config
// ---------------------------------------------------------------------------

/// Driver settings. Physics constants are fixed and not part of this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub pilot: PilotConfig,
    pub max_steps: usize,
    /// Pace steps against the wall clock instead of running flat out.
    pub realtime: bool,
    pub tick_ms: u64,
    pub csv: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub print_log: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pilot: PilotConfig::default(),
            max_steps: 10_000,
            realtime: false,
            tick_ms: 100,
            csv: None,
            summary: None,
            print_log: false,
        }
    }
}

/// Settings given on the command line. `None` / `false` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub pilot: Option<PilotKind>,
    pub touchdown_speed: Option<f64>,
    pub margin: Option<f64>,
    pub max_steps: Option<usize>,
    pub realtime: bool,
    pub tick_ms: Option<u64>,
    pub csv: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub print_log: bool,
}

impl RunConfig {
    /// Layer command-line settings over this config, then validate.
    ///
    /// Autopilot tuning given for a pilot that is not the autopilot is an
    /// error rather than being dropped.
    pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<(), ConfigError> {
        let kind = overrides.pilot.unwrap_or_else(|| self.pilot.kind());

        match kind {
            PilotKind::Autopilot => {
                let base = match self.pilot {
                    PilotConfig::Autopilot { touchdown_speed, margin } => Autopilot::new(touchdown_speed, margin),
                    _ => Autopilot::default(),
                };
                self.pilot = PilotConfig::Autopilot {
                    touchdown_speed: overrides.touchdown_speed.unwrap_or(base.touchdown_speed),
                    margin: overrides.margin.unwrap_or(base.margin),
                };
            }
            PilotKind::None | PilotKind::Full => {
                if overrides.touchdown_speed.is_some() {
                    return Err(ConfigError::AutopilotOnly("touchdown_speed"));
                }
                if overrides.margin.is_some() {
                    return Err(ConfigError::AutopilotOnly("margin"));
                }
                self.pilot = if kind == PilotKind::None { PilotConfig::None } else { PilotConfig::Full };
            }
        }

        if let Some(n) = overrides.max_steps {
            self.max_steps = n;
        }
        if let Some(ms) = overrides.tick_ms {
            self.tick_ms = ms;
        }
        self.realtime |= overrides.realtime;
        self.print_log |= overrides.print_log;
        if overrides.csv.is_some() {
            self.csv = overrides.csv;
        }
        if overrides.summary.is_some() {
            self.summary = overrides.summary;
        }

        self.validate()
    }

    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LanderError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, LanderError> {
        let config: RunConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let PilotConfig::Autopilot { touchdown_speed, margin } = self.pilot {
            if !(touchdown_speed.is_finite() && touchdown_speed > 0.0) {
                return Err(ConfigError::TouchdownSpeed(touchdown_speed));
            }
            if !(margin.is_finite() && margin >= 0.0) {
                return Err(ConfigError::Margin(margin));
            }
        }
        if self.max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Tick);
        }
        Ok(())
    }
}
