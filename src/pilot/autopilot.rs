use tracing::debug;

use crate::sim::state::LanderState;
use super::guidance::braking_speed;
use super::controller::Pilot;

// ---------------------------------------------------------------------------
// Autopilot: bang-bang tracking of the braking curve
// ---------------------------------------------------------------------------

/// Free-falls until the descent speed reaches the braking curve, then fires
/// whenever it is above it. The engine is on/off, so the lander chatters
/// around the curve down to `touchdown_speed`.
#[derive(Debug, Clone)]
pub struct Autopilot {
    pub touchdown_speed: f64, // m/s, target descent speed at the margin
    pub margin: f64,          // m, height where the curve bottoms out
    ignited: bool,
}

impl Autopilot {
    pub fn new(touchdown_speed: f64, margin: f64) -> Self {
        Self { touchdown_speed, margin, ignited: false }
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        // Lands at ~1.8 m/s with about a third of the tank left.
        Self::new(2.0, 1.0)
    }
}

impl Pilot for Autopilot {
    fn thrust(&mut self, state: &LanderState) -> bool {
        let limit = braking_speed(state.height, self.touchdown_speed, self.margin);
        let fire = state.descent_speed() > limit;
        if fire && !self.ignited {
            self.ignited = true;
            debug!(height = state.height, velocity = state.velocity, "braking burn start");
        }
        fire
    }

    fn reset(&mut self) {
        self.ignited = false;
    }

    fn name(&self) -> &str {
        "autopilot"
    }
}
