//! Events emitted by the simulation for UI feedback and logging.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, TuningParam};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player's projectile left the ship.
    ProjectileFired { x: f32, y: f32 },
    /// The projectile reached the top of the play field without a hit.
    ProjectileMissed,
    /// The projectile struck an enemy.
    EnemyHit { slot: usize, row: usize, score: u32 },
    /// A dying enemy finished its dying timer.
    EnemyDestroyed { slot: usize },
    /// An enemy reached the bottom of the play field.
    Invaded { slot: usize },
    /// The flock was rebuilt at a new anchor.
    FlockReseeded { anchor: Vec2 },
    /// A tuning parameter changed.
    TuningChanged { param: TuningParam, value: f32 },
    /// The game entered a new phase.
    PhaseChanged { phase: GamePhase },
    /// The game was rebuilt from its configuration.
    Restarted,
}
