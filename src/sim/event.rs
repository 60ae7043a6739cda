use std::fmt;

use serde::Serialize;

use super::state::SAFE_LANDING_SPEED;

// ---------------------------------------------------------------------------
// Touchdown outcome
// ---------------------------------------------------------------------------

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    SafeLanding,
    Crash,
}

impl Outcome {
    /// Classify a touchdown by its final velocity (m/s, negative = down).
    /// The threshold itself counts as a crash.
    pub fn classify(velocity: f64) -> Self {
        if -velocity < SAFE_LANDING_SPEED {
            Outcome::SafeLanding
        } else {
            Outcome::Crash
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Outcome::SafeLanding)
    }

    /// Message shown to the pilot at touchdown.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::SafeLanding => "Congratulations, you landed successfully!",
            Outcome::Crash => "You crashed!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::SafeLanding => write!(f, "safe landing"),
            Outcome::Crash => write!(f, "crash"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_under_threshold_is_safe() {
        assert_eq!(Outcome::classify(-4.999), Outcome::SafeLanding);
    }

    #[test]
    fn threshold_is_crash() {
        assert_eq!(Outcome::classify(-5.0), Outcome::Crash);
        assert_eq!(Outcome::classify(-5.001), Outcome::Crash);
        assert_eq!(Outcome::classify(-40.0), Outcome::Crash);
    }

    #[test]
    fn upward_touchdown_is_safe() {
        // Only reachable if the caller classifies arbitrary velocities.
        assert!(Outcome::classify(0.5).is_safe());
    }
}
