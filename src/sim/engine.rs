use tracing::{debug, trace};

use super::event::Outcome;
use super::log::{LogSample, MotionLog};
use super::state::{
    LanderState, Phase, FUEL_BURN_DIVISOR, GRAVITY, THRUST, TIME_STEP,
};

// ---------------------------------------------------------------------------
// Simulation engine: physics state + motion log
// ---------------------------------------------------------------------------

/// Owns one lander run. Construct once and `reset` before each run.
///
/// A new engine is inert (height 0) until the first `reset`, so a driver that
/// polls `step` on a timer before the pilot presses start gets no-ops.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    state: LanderState,
    log: MotionLog,
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh run. Discards the previous motion log.
    pub fn reset(&mut self) {
        self.state = LanderState::initial();
        self.log.clear();
        debug!(height = self.state.height, fuel = self.state.fuel, "lander reset");
    }

    /// Advance one `TIME_STEP`. Returns true only on the step that touches down.
    ///
    /// Thrust is applied only while fuel remains. Once landed the engine
    /// ignores further steps until `reset`.
    pub fn step(&mut self, thrust_requested: bool) -> bool {
        let s = &mut self.state;
        if s.height <= 0.0 {
            return false;
        }

        let actual_thrust = if s.fuel > 0.0 && thrust_requested { THRUST } else { 0.0 };
        if actual_thrust > 0.0 {
            s.fuel = (s.fuel - actual_thrust / FUEL_BURN_DIVISOR).max(0.0);
        }

        s.velocity += (GRAVITY + actual_thrust) * TIME_STEP;
        s.height += s.velocity * TIME_STEP;
        s.time += TIME_STEP;

        let touchdown = s.height <= 0.0;
        if touchdown {
            s.height = 0.0;
        }

        self.log.push(LogSample::new(s.time, s.height, s.velocity));
        trace!(
            t = s.time,
            height = s.height,
            velocity = s.velocity,
            fuel = s.fuel,
            thrust = actual_thrust > 0.0,
            "step"
        );

        touchdown
    }

    pub fn height(&self) -> f64 {
        self.state.height
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    pub fn fuel(&self) -> f64 {
        self.state.fuel
    }

    pub fn elapsed_time(&self) -> f64 {
        self.state.time
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LanderState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Recorded history of the current run.
    pub fn motion_log(&self) -> &MotionLog {
        &self.log
    }

    /// Touchdown classification, once a run has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_running() || self.log.is_empty() {
            return None;
        }
        Some(Outcome::classify(self.state.velocity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{FULL_TANK, INITIAL_HEIGHT};
    use proptest::prelude::*;

    fn started() -> SimulationEngine {
        let mut e = SimulationEngine::new();
        e.reset();
        e
    }

    #[test]
    fn new_engine_is_inert_until_reset() {
        let mut e = SimulationEngine::new();
        assert!(!e.step(true));
        assert_eq!(e.phase(), Phase::Landed);
        assert!(e.motion_log().is_empty());
        assert_eq!(e.elapsed_time(), 0.0);
        assert!(e.outcome().is_none());
    }

    #[test]
    fn reset_sets_initial_conditions() {
        let e = started();
        assert_eq!(e.height(), INITIAL_HEIGHT);
        assert_eq!(e.velocity(), 0.0);
        assert_eq!(e.fuel(), FULL_TANK);
        assert_eq!(e.elapsed_time(), 0.0);
        assert!(e.motion_log().is_empty());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut once = started();
        let mut twice = started();
        twice.reset();
        assert_eq!(once.state(), twice.state());
        assert_eq!(once.motion_log().len(), twice.motion_log().len());

        // Also after a partially flown run.
        for _ in 0..20 {
            once.step(true);
        }
        once.reset();
        once.reset();
        assert_eq!(once.state(), LanderState::initial());
        assert!(once.motion_log().is_empty());
    }

    #[test]
    fn free_fall_accelerates_down_and_crashes() {
        let mut e = started();
        let mut steps = 0;
        let mut prev_vel = e.velocity();
        loop {
            steps += 1;
            let done = e.step(false);
            assert!(
                (prev_vel - e.velocity() - 0.1622).abs() < 1e-9,
                "velocity should drop 0.1622 per step, step {}",
                steps
            );
            prev_vel = e.velocity();
            if done {
                break;
            }
            assert!(steps < 1_000, "free fall never reached the ground");
        }

        assert_eq!(steps, 248);
        assert_eq!(e.height(), 0.0);
        assert!(e.velocity() < 0.0);
        assert!((e.velocity() + 40.2256).abs() < 1e-6);
        assert_eq!(e.outcome(), Some(Outcome::Crash));
    }

    #[test]
    fn free_fall_height_follows_velocity() {
        let mut e = started();
        for _ in 0..10 {
            let h0 = e.height();
            e.step(false);
            assert!((e.height() - (h0 + e.velocity() * TIME_STEP)).abs() < 1e-9);
        }
    }

    #[test]
    fn fuel_runs_out_after_150_thrusting_steps() {
        let mut e = started();
        let burn = THRUST / FUEL_BURN_DIVISOR;
        for i in 1..=150 {
            let before = e.fuel();
            e.step(true);
            if i < 150 {
                assert!((before - e.fuel() - burn).abs() < 1e-9, "step {}", i);
            }
        }
        assert_eq!(e.fuel(), 0.0);

        // Thrust requests on an empty tank do nothing.
        let vel = e.velocity();
        e.step(true);
        assert_eq!(e.fuel(), 0.0);
        assert!((e.velocity() - (vel + GRAVITY * TIME_STEP)).abs() < 1e-9);
    }

    #[test]
    fn thrust_acts_on_the_same_step() {
        let mut e = started();
        e.step(true);
        assert!((e.velocity() - (GRAVITY + THRUST) * TIME_STEP).abs() < 1e-12);
        assert!(e.height() > INITIAL_HEIGHT);
    }

    #[test]
    fn landed_engine_ignores_steps() {
        let mut e = started();
        while !e.step(false) {}
        let frozen = e.state();
        let len = e.motion_log().len();

        for thrust in [false, true, true, false] {
            assert!(!e.step(thrust));
        }
        assert_eq!(e.state(), frozen);
        assert_eq!(e.motion_log().len(), len);
    }

    #[test]
    fn log_has_one_sample_per_step_and_ends_at_ground() {
        let mut e = started();
        let mut calls = 0;
        loop {
            calls += 1;
            if e.step(calls % 3 == 0) {
                break;
            }
        }
        let log = e.motion_log();
        assert_eq!(log.len(), calls);
        assert_eq!(log.last().map(|s| s.height), Some(0.0));
        assert_eq!(log.last().map(|s| s.velocity), Some(e.velocity()));

        let first = log.get(0).unwrap();
        assert!((first.time - TIME_STEP).abs() < 1e-12);
    }

    #[test]
    fn reset_discards_previous_log() {
        let mut e = started();
        while !e.step(false) {}
        assert!(!e.motion_log().is_empty());
        e.reset();
        assert!(e.motion_log().is_empty());
        assert!(e.is_running());
        assert!(e.outcome().is_none());
    }

    proptest! {
        #[test]
        fn state_stays_in_bounds(thrusts in proptest::collection::vec(any::<bool>(), 0..600)) {
            let mut e = started();
            let mut landed = false;
            for thrust in thrusts {
                let before = e.state();
                let len = e.motion_log().len();
                let done = e.step(thrust);

                prop_assert!(e.height() >= 0.0);
                prop_assert!(e.fuel() >= 0.0 && e.fuel() <= FULL_TANK);

                if landed {
                    prop_assert!(!done);
                    prop_assert_eq!(e.state(), before);
                    prop_assert_eq!(e.motion_log().len(), len);
                } else {
                    prop_assert!((e.elapsed_time() - before.time - TIME_STEP).abs() < 1e-9);
                    prop_assert_eq!(e.motion_log().len(), len + 1);
                    prop_assert!(e.fuel() <= before.fuel);
                }
                if done {
                    prop_assert_eq!(e.height(), 0.0);
                    landed = true;
                }
            }
        }
    }
}
