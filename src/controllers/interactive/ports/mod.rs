//! Port definitions for the interactive controller.
//!
//! Contains the trait the presentation layer implements to receive frames
//! and render failures from the background worker.

pub mod presenter_port;
