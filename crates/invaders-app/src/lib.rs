//! Headless driver for the invaders simulation.
//!
//! Runs the `Game` on its own thread at a fixed frame rate, feeds it input
//! from an autopilot, and traces the render walk instead of drawing.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod state;
pub mod trace_canvas;

pub use invaders_core as core;
