//! Interactive controller for real-time fractal rendering.
//!
//! A background worker renders the most recent `RenderRequest` and hands
//! the result to the presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `RenderRequest` snapshots of viewport, config and frame size
//! - **Output**: `InteractiveControllerPresenterPort` receiving `RenderEvent`s
//! - **Core**: a `FractalRenderer` owned by the worker thread
//!
//! Submitting a request bumps a generation counter. An in-flight pass for an
//! older generation is cancelled and its result dropped without an event.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
