use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lunar_lander::config::{Overrides, PilotKind, RunConfig};
use lunar_lander::io::{self, LandingSummary};
use lunar_lander::sim::{self, SimulationEngine};
use lunar_lander::LanderError;

/// Fly a 500 m powered descent onto the Moon and report how it ended.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON run configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Who flies the lander
    #[arg(long, value_enum)]
    pilot: Option<PilotKind>,

    /// Autopilot target descent speed at touchdown (m/s)
    #[arg(long)]
    touchdown_speed: Option<f64>,

    /// Autopilot braking margin above ground (m)
    #[arg(long)]
    margin: Option<f64>,

    /// Give up after this many steps
    #[arg(long)]
    max_steps: Option<usize>,

    /// Pace steps against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Wall-clock interval between steps in realtime mode (ms)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Write the motion log as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON landing summary
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Print the motion log table after the run
    #[arg(long)]
    print_log: bool,
}

impl Cli {
    fn into_config(self) -> Result<RunConfig, LanderError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };

        config.apply_overrides(Overrides {
            pilot: self.pilot,
            touchdown_speed: self.touchdown_speed,
            margin: self.margin,
            max_steps: self.max_steps,
            realtime: self.realtime,
            tick_ms: self.tick_ms,
            csv: self.csv,
            summary: self.summary,
            print_log: self.print_log,
        })?;
        Ok(config)
    }
}

fn main() -> Result<(), LanderError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_config()?;
    let mut pilot = config.pilot.build();
    let mut engine = SimulationEngine::new();
    let tick = Duration::from_millis(config.tick_ms);

    let flight = sim::fly_with(&mut engine, pilot.as_mut(), config.max_steps, |e| {
        if config.realtime {
            println!(
                "  t={:>6.1}s   height={:>8.2}m   vel={:>7.2}m/s   fuel={:>5.1}%",
                e.elapsed_time(),
                e.height(),
                e.velocity(),
                e.fuel()
            );
            thread::sleep(tick);
        }
    });

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  LUNAR LANDER — pilot: {}", pilot.name());
    println!("====================================================================");
    match flight.outcome {
        Some(outcome) => println!("  {}", outcome.message()),
        None => println!("  Still airborne after {} steps.", flight.steps),
    }
    println!(
        "  Time:     {:>8.1} s      Steps:    {:>8}",
        engine.elapsed_time(),
        flight.steps
    );
    println!(
        "  Velocity: {:>8.2} m/s    Fuel:     {:>8.1} %",
        engine.velocity(),
        engine.fuel()
    );
    println!("====================================================================");
    println!();

    if config.print_log {
        let stdout = std::io::stdout();
        io::report::write_motion_log(&mut stdout.lock(), engine.motion_log())?;
    }
    if let Some(path) = &config.csv {
        io::csv::write_motion_log_file(path, engine.motion_log())?;
        tracing::info!(path = %path.display(), "motion log written");
    }
    if let Some(path) = &config.summary {
        io::json::write_summary_file(path, &LandingSummary::from_engine(&engine))?;
        tracing::info!(path = %path.display(), "summary written");
    }

    Ok(())
}
