use crate::sim::state::LanderState;

/// Source of the thrust input, queried once per simulation step.
///
/// Implement this to fly the lander from code: scripted inputs, guidance
/// laws, or a bridge to a human at a keyboard.
pub trait Pilot {
    /// Whether the engine should fire for the next step.
    fn thrust(&mut self, state: &LanderState) -> bool;

    /// Clear per-run state before a new descent.
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Never fires the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThrust;

impl Pilot for NoThrust {
    fn thrust(&mut self, _state: &LanderState) -> bool {
        false
    }

    fn name(&self) -> &str {
        "no-thrust"
    }
}

/// Holds the throttle open for the whole run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullThrust;

impl Pilot for FullThrust {
    fn thrust(&mut self, _state: &LanderState) -> bool {
        true
    }

    fn name(&self) -> &str {
        "full-thrust"
    }
}
