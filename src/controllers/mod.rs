pub mod cli;
pub mod description;
pub mod explorer;
pub mod interactive;
pub mod ports;
pub mod renderer;
