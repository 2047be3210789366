pub mod presenter_port;
pub mod text_generator;
