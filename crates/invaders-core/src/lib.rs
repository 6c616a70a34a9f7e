//! Core types and definitions for the INVADERS simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, timed state, entity components, input frames, events,
//! snapshot views and constants. It has no dependency on any windowing,
//! input or drawing framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod timed_state;
pub mod types;

#[cfg(test)]
mod tests;
