//! Frame snapshot: the read-only view handed to the renderer after each update.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{FrameTime, Rect};

/// Complete visible state after one update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: FrameTime,
    pub phase: GamePhase,
    pub mode: FlockMode,
    /// Play-field boundary.
    pub boundary: Rect,
    /// UI strip below the play field.
    pub ui_panel: Rect,
    pub player: PlayerView,
    pub projectile: ProjectileView,
    /// Live (non-`Dead`) enemies in draw order: highest slot first.
    pub enemies: Vec<EnemyView>,
    /// Flock-wide horizontal direction hint.
    pub flock_direction: MoveDirection,
    /// Current tuning values; only present in the tunable mode.
    pub tuning: Option<TuningView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub body: Rect,
    pub state: PlayerState,
    pub lives: u32,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub body: Rect,
    pub state: ProjectileState,
}

impl ProjectileView {
    /// Only in-flight and exploding projectiles are drawn.
    pub fn is_visible(&self) -> bool {
        matches!(
            self.state,
            ProjectileState::Active | ProjectileState::Exploding
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub slot: usize,
    pub row: usize,
    pub body: Rect,
    /// Logical centre, where the renderer puts the marker circle.
    pub center: Vec2,
    pub state: EnemyState,
    pub dir: MoveDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningView {
    pub max_h_speed: f32,
    pub max_v_speed: f32,
    pub awareness_distance: f32,
    pub max_force: f32,
}

impl FrameSnapshot {
    /// The UI status line, e.g. `Lives 3 Score 0040`.
    /// The tunable mode appends the live parameter values.
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "Lives {} Score {:04}",
            self.player.lives, self.player.score
        );
        if let Some(tuning) = &self.tuning {
            line.push_str(&format!(
                " | H {:.0} V {:.0} Aware {:.0} Force {:.0}",
                tuning.max_h_speed,
                tuning.max_v_speed,
                tuning.awareness_distance,
                tuning.max_force
            ));
        }
        line
    }
}
