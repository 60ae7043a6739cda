// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Lunar surface gravity (m/s^2). Negative = down.
pub const GRAVITY: f64 = -1.622;
/// Acceleration from the descent engine while firing (m/s^2).
pub const THRUST: f64 = 5.0;
/// Height at which every run starts (m).
pub const INITIAL_HEIGHT: f64 = 500.0;
/// Downward speed at or above which touchdown is a crash (m/s).
pub const SAFE_LANDING_SPEED: f64 = 5.0;
/// Fixed simulation step (s).
pub const TIME_STEP: f64 = 0.1;
/// Fuel burned per thrusting step is `THRUST / FUEL_BURN_DIVISOR` percent.
pub const FUEL_BURN_DIVISOR: f64 = 7.5;
/// Full tank, in percent.
pub const FULL_TANK: f64 = 100.0;

// ---------------------------------------------------------------------------
// 1D lander state: height, velocity, fuel, clock
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LanderState {
    pub time: f64,      // s since reset
    pub height: f64,    // m above ground, never negative
    pub velocity: f64,  // m/s, positive = up
    pub fuel: f64,      // percent, 0..=100
}

impl LanderState {
    /// State at the start of a run.
    pub fn initial() -> Self {
        Self {
            time: 0.0,
            height: INITIAL_HEIGHT,
            velocity: 0.0,
            fuel: FULL_TANK,
        }
    }

    /// A run is active while the lander is above ground.
    pub fn is_running(&self) -> bool {
        self.height > 0.0
    }

    pub fn phase(&self) -> Phase {
        if self.is_running() {
            Phase::Active
        } else {
            Phase::Landed
        }
    }

    /// Downward speed (m/s). Zero or negative while climbing.
    pub fn descent_speed(&self) -> f64 {
        -self.velocity
    }
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Landed,
}
