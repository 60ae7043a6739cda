use std::io::{self, Write};

use crate::sim::log::MotionLog;

/// Print the motion log as a table, rounded to three decimals.
pub fn write_motion_log<W: Write>(writer: &mut W, log: &MotionLog) -> io::Result<()> {
    writeln!(writer, "Motion log of the lunar lander")?;
    writeln!(writer, "  {:>9}  {:>11}  {:>13}", "time", "height", "velocity")?;
    writeln!(writer, "  {}", "─".repeat(37))?;

    for s in log {
        writeln!(
            writer,
            "  {:>7.3} s  {:>9.3} m  {:>9.3} m/s",
            s.time, s.height, s.velocity
        )?;
    }

    writeln!(writer, "  {} samples", log.len())
}
