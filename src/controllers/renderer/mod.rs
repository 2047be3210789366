pub mod errors;
pub mod fractal_renderer;
