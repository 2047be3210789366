//! Natural-language descriptions of the current view.
//!
//! Describers only ever see the viewport's centre and zoom. Failures are
//! swallowed at this boundary and replaced with a fixed fallback text.

mod controller;
pub mod describer;
pub mod errors;
pub mod geometric;
pub mod ports;
pub mod prompt;

pub use controller::{Description, DescriptionController};
