pub mod config;
pub mod error;
pub mod ministry;
pub mod telemetry;
