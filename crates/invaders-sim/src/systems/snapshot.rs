//! Snapshot system: builds the read-only `FrameSnapshot` for the renderer.
//!
//! This system never modifies the game.

use invaders_core::components::{Enemy, Player};
use invaders_core::enums::{FlockMode, GamePhase};
use invaders_core::events::GameEvent;
use invaders_core::state::*;
use invaders_core::types::{FrameTime, Rect};

use crate::flock::Flock;
use crate::tuning::FlockTuning;

/// Build a complete snapshot from the current game state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &FrameTime,
    phase: GamePhase,
    mode: FlockMode,
    boundary: &Rect,
    ui_panel: &Rect,
    player: &Player,
    flock: &Flock,
    tuning: &FlockTuning,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        mode,
        boundary: *boundary,
        ui_panel: *ui_panel,
        player: build_player(player),
        projectile: ProjectileView {
            body: player.projectile.body,
            state: player.projectile.state.value(),
        },
        enemies: flock.draw_order().map(build_enemy).collect(),
        flock_direction: flock.move_direction(),
        tuning: mode.is_tunable().then(|| tuning.view()),
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        body: player.body,
        state: player.state.value(),
        lives: player.lives,
        score: player.score,
    }
}

fn build_enemy(enemy: &Enemy) -> EnemyView {
    EnemyView {
        slot: enemy.slot,
        row: enemy.row,
        body: enemy.body(),
        center: enemy.position,
        state: enemy.state.value(),
        dir: enemy.dir,
    }
}
