use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::LanderError;
use crate::sim::engine::SimulationEngine;
use crate::sim::event::Outcome;

/// Summary statistics of one run.
#[derive(Debug, Clone, Serialize)]
pub struct LandingSummary {
    /// `None` while the lander is still in the air.
    pub outcome: Option<Outcome>,
    pub touchdown_velocity: f64,
    pub flight_time: f64,
    pub fuel_remaining: f64,
    pub max_descent_speed: f64,
    pub steps: usize,
}

impl LandingSummary {
    /// Compute summary from the engine's current state and motion log.
    pub fn from_engine(engine: &SimulationEngine) -> Self {
        let log = engine.motion_log();
        let max_descent_speed = log
            .iter()
            .map(|s| -s.velocity)
            .fold(0.0_f64, f64::max);

        LandingSummary {
            outcome: engine.outcome(),
            touchdown_velocity: engine.velocity(),
            flight_time: engine.elapsed_time(),
            fuel_remaining: engine.fuel(),
            max_descent_speed,
            steps: log.len(),
        }
    }
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary<W: Write>(writer: &mut W, summary: &LandingSummary) -> Result<(), LanderError> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the summary JSON to a file.
pub fn write_summary_file(path: impl AsRef<Path>, summary: &LandingSummary) -> Result<(), LanderError> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_summary(&mut file, summary)?;
    file.flush()?;
    Ok(())
}
