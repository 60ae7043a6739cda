use tracing::{info, warn};

use super::engine::SimulationEngine;
use super::event::Outcome;
use crate::pilot::{NoThrust, Pilot};

// ---------------------------------------------------------------------------
// Headless driver
// ---------------------------------------------------------------------------

/// Result of driving one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    /// Number of `step` calls made.
    pub steps: usize,
    /// `None` if the step cap was hit before touchdown.
    pub outcome: Option<Outcome>,
}

impl Flight {
    pub fn landed(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Reset `engine` and fly it with `pilot`, calling `on_step` after every step.
pub fn fly_with<F>(
    engine: &mut SimulationEngine,
    pilot: &mut dyn Pilot,
    max_steps: usize,
    mut on_step: F,
) -> Flight
where
    F: FnMut(&SimulationEngine),
{
    engine.reset();
    pilot.reset();

    let mut steps = 0;
    while steps < max_steps {
        let thrust = pilot.thrust(&engine.state());
        let touchdown = engine.step(thrust);
        steps += 1;
        on_step(engine);

        if touchdown {
            let outcome = Outcome::classify(engine.velocity());
            info!(
                pilot = pilot.name(),
                outcome = %outcome,
                velocity = engine.velocity(),
                fuel = engine.fuel(),
                t = engine.elapsed_time(),
                "touchdown"
            );
            return Flight { steps, outcome: Some(outcome) };
        }
    }

    warn!(
        pilot = pilot.name(),
        max_steps,
        height = engine.height(),
        "step limit reached before touchdown"
    );
    Flight { steps, outcome: None }
}

/// Reset `engine` and fly it with `pilot` until touchdown or `max_steps`.
pub fn fly(engine: &mut SimulationEngine, pilot: &mut dyn Pilot, max_steps: usize) -> Flight {
    fly_with(engine, pilot, max_steps, |_| {})
}

/// Unpowered descent (convenience wrapper).
pub fn free_fall(engine: &mut SimulationEngine, max_steps: usize) -> Flight {
    fly(engine, &mut NoThrust, max_steps)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
