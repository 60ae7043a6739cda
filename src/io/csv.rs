use std::io::{self, Write};
use std::path::Path;

use crate::sim::log::MotionLog;

/// Write the motion log as CSV.
///
/// Columns: time, height, velocity
pub fn write_motion_log<W: Write>(writer: &mut W, log: &MotionLog) -> io::Result<()> {
    writeln!(writer, "time,height,velocity")?;

    for s in log {
        writeln!(writer, "{:.4},{:.4},{:.4}", s.time, s.height, s.velocity)?;
    }

    Ok(())
}

/// Write the motion log to a CSV file at the given path.
pub fn write_motion_log_file(path: impl AsRef<Path>, log: &MotionLog) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_motion_log(&mut file, log)?;
    file.flush()
}
