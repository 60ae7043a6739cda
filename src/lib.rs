pub mod sim;
pub mod pilot;
pub mod io;
pub mod config;
pub mod error;

pub use error::LanderError;
pub use sim::{LanderState, LogSample, MotionLog, Outcome, SimulationEngine};
