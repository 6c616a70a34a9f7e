//! Simulation engine for INVADERS.
//!
//! Owns the `Game` aggregate, runs the per-frame systems in a fixed order,
//! and produces `FrameSnapshot`s for an external renderer.

pub mod engine;
pub mod flock;
pub mod render;
pub mod systems;
pub mod tuning;
pub mod world_setup;

pub use engine::{Game, GameConfig};
pub use invaders_core as core;
