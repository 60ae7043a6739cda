use crate::sim::state::LanderState;
use super::controller::Pilot;

/// Replays a recorded sequence of thrust inputs, one per step.
/// Steps past the end of the recording coast.
#[derive(Debug, Clone, Default)]
pub struct ThrustSchedule {
    inputs: Vec<bool>,
    cursor: usize,
}

impl ThrustSchedule {
    pub fn new(inputs: Vec<bool>) -> Self {
        Self { inputs, cursor: 0 }
    }

    /// `burn` steps of thrust after `coast` steps without.
    pub fn coast_then_burn(coast: usize, burn: usize) -> Self {
        let mut inputs = vec![false; coast];
        inputs.extend(std::iter::repeat(true).take(burn));
        Self::new(inputs)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl Pilot for ThrustSchedule {
    fn thrust(&mut self, _state: &LanderState) -> bool {
        let fire = self.inputs.get(self.cursor).copied().unwrap_or(false);
        self.cursor += 1;
        fire
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn name(&self) -> &str {
        "schedule"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_coasts() {
        let s = LanderState::initial();
        let mut p = ThrustSchedule::new(vec![true, false, true]);
        let got: Vec<bool> = (0..5).map(|_| p.thrust(&s)).collect();
        assert_eq!(got, vec![true, false, true, false, false]);
    }

    #[test]
    fn reset_rewinds() {
        let s = LanderState::initial();
        let mut p = ThrustSchedule::coast_then_burn(1, 1);
        assert!(!p.thrust(&s));
        assert!(p.thrust(&s));
        p.reset();
        assert!(!p.thrust(&s));
        assert_eq!(p.len(), 2);
    }
}
