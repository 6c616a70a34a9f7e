//! Entity data for the player, its projectile and the enemies.
//!
//! Components are plain data. Game logic lives in the simulation systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::timed_state::TimedState;
use crate::types::Rect;

/// The player's single, reusable projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Rect,
    pub state: TimedState<ProjectileState>,
}

/// The player ship. Owns its projectile for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Rect,
    pub projectile: Projectile,
    pub state: TimedState<PlayerState>,
    /// Remaining lives, 0..=PLAYER_MAX_LIVES.
    pub lives: u32,
    /// Never decreases; capped at PLAYER_MAX_SCORE.
    pub score: u32,
}

/// One slot of the enemy flock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Arena slot, `row * cols + col`.
    pub slot: usize,
    pub row: usize,
    pub col: usize,
    /// Centre of the body. The body rectangle is always derived from this.
    pub position: Vec2,
    pub size: Vec2,
    /// Current velocity (px/s), steered toward the direction's cruise speed.
    pub velocity: Vec2,
    pub state: TimedState<EnemyState>,
    pub dir: MoveDirection,
    /// Horizontal direction held before the current descent.
    pub previous_dir: MoveDirection,
    /// Anchor of the current leg; descent distance is measured from here.
    pub move_start: Vec2,
    /// Distance from `move_start` as of the last update.
    pub distance_traveled: f32,
}

impl Enemy {
    pub fn body(&self) -> Rect {
        Rect::from_center(self.position, self.size)
    }

    /// Active enemies move and can be hit.
    pub fn is_active(&self) -> bool {
        self.state.is(EnemyState::Active)
    }

    /// Anything not yet `Dead` is still updated and drawn.
    pub fn is_live(&self) -> bool {
        !self.state.is(EnemyState::Dead)
    }
}
