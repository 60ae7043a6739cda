use std::slice::Iter;

use serde::Serialize;

/// One recorded sample of the motion history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogSample {
    pub time: f64,
    pub height: f64,
    pub velocity: f64,
}

impl LogSample {
    pub fn new(time: f64, height: f64, velocity: f64) -> Self {
        Self { time, height, velocity }
    }
}

/// Append-only motion history, in step order.
///
/// Only the owning engine can push to or clear it; callers get a shared
/// borrow and can read but never rewrite past samples.
#[derive(Debug, Clone, Default)]
pub struct MotionLog {
    samples: Vec<LogSample>,
}

impl MotionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, sample: LogSample) {
        self.samples.push(sample);
    }

    pub(crate) fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&LogSample> {
        self.samples.get(idx)
    }

    pub fn last(&self) -> Option<&LogSample> {
        self.samples.last()
    }

    pub fn iter(&self) -> Iter<'_, LogSample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a MotionLog {
    type Item = &'a LogSample;
    type IntoIter = Iter<'a, LogSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut log = MotionLog::new();
        log.push(LogSample::new(0.1, 499.0, -0.2));
        log.push(LogSample::new(0.2, 498.0, -0.3));
        log.push(LogSample::new(0.2, 498.0, -0.3)); // duplicates are kept

        let times: Vec<f64> = log.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.1, 0.2, 0.2]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.last().map(|s| s.height), Some(498.0));
    }

    #[test]
    fn clear_empties_log() {
        let mut log = MotionLog::new();
        log.push(LogSample::new(0.1, 1.0, -1.0));
        log.clear();
        assert!(log.is_empty());
        assert!(log.get(0).is_none());
    }
}
