pub mod controller;
pub mod guidance;
pub mod autopilot;
pub mod schedule;

pub use controller::{FullThrust, NoThrust, Pilot};
pub use guidance::braking_speed;
pub use autopilot::Autopilot;
pub use schedule::ThrustSchedule;
