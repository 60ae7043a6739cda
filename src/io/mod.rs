pub mod csv;
pub mod json;
pub mod report;

pub use json::LandingSummary;
