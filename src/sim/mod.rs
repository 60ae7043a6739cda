pub mod state;
pub mod log;
pub mod engine;
pub mod event;
pub mod runner;

pub use engine::SimulationEngine;
pub use event::Outcome;
pub use log::{LogSample, MotionLog};
pub use runner::{fly, fly_with, free_fall, Flight};
pub use state::{LanderState, Phase};
