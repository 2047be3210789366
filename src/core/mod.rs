pub mod actions;
pub mod data;
pub mod formula;
pub mod fractals;
pub mod palettes;
pub mod util;
