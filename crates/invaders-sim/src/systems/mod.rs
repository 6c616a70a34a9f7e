//! Per-frame systems.
//!
//! Systems are plain functions over the pieces of the `Game` they touch.
//! They do not own state; the engine calls them in a fixed order.

pub mod enemy_lifecycle;
pub mod flock_motion;
pub mod phase;
pub mod ping_pong;
pub mod player;
pub mod projectile;
pub mod snapshot;
