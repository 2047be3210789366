pub mod errors;
pub mod render_controller;
pub mod render_options;
