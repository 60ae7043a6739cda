use crate::sim::state::{GRAVITY, THRUST};

// ---------------------------------------------------------------------------
// Guidance: braking curve
// ---------------------------------------------------------------------------

/// Net upward acceleration with the engine firing (m/s^2).
pub const BRAKING_ACCEL: f64 = THRUST + GRAVITY;

/// Highest descent speed (m/s) at `height` from which a full burn still
/// slows the lander to `touchdown_speed` before reaching `margin` metres.
///
/// v^2 = v_td^2 + 2 a h, with h measured above the margin.
pub fn braking_speed(height: f64, touchdown_speed: f64, margin: f64) -> f64 {
    let h = (height - margin).max(0.0);
    (touchdown_speed.powi(2) + 2.0 * BRAKING_ACCEL * h).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_margin_equals_touchdown_speed() {
        assert!((braking_speed(1.0, 2.0, 1.0) - 2.0).abs() < 1e-12);
        // Below the margin the curve stays flat.
        assert!((braking_speed(0.2, 2.0, 1.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn grows_with_height() {
        let low = braking_speed(10.0, 2.0, 1.0);
        let high = braking_speed(400.0, 2.0, 1.0);
        assert!(high > low);
        // Full-stop case: v = sqrt(2 a h)
        let v = braking_speed(100.0, 0.0, 0.0);
        assert!((v - (2.0 * BRAKING_ACCEL * 100.0).sqrt()).abs() < 1e-12);
    }
}
