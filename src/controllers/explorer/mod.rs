pub mod state;
pub mod telemetry;
