pub mod escape_time;
pub mod presets;
