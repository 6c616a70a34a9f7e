//! Projectile flight, first-hit collision against the flock, and scoring.
//!
//! Runs after the player system (which may have just fired) and before the
//! enemy systems, so enemies are tested against this frame's final
//! projectile position.

use tracing::debug;

use invaders_core::components::{Enemy, Player};
use invaders_core::constants::*;
use invaders_core::enums::{EnemyState, ProjectileState};
use invaders_core::events::GameEvent;
use invaders_core::types::{FrameTime, Rect};

use crate::flock::Flock;

/// Advance the player's projectile by one frame.
pub fn run(
    player: &mut Player,
    flock: &mut Flock,
    boundary: &Rect,
    time: &FrameTime,
    events: &mut Vec<GameEvent>,
) {
    match player.projectile.state.value() {
        ProjectileState::Inactive => {}
        ProjectileState::Active => {
            player.projectile.body.y -= PROJECTILE_SPEED * time.dt;

            if let Some(enemy) = first_hit(flock, &player.projectile.body) {
                enemy.state.set(EnemyState::Dying, time.now);
                player.projectile.state.set(ProjectileState::Exploding, time.now);
                player.score = award(player.score);
                events.push(GameEvent::EnemyHit {
                    slot: enemy.slot,
                    row: enemy.row,
                    score: player.score,
                });
                debug!(slot = enemy.slot, row = enemy.row, score = player.score, "enemy hit");
                return;
            }

            if player.projectile.body.y <= boundary.y {
                player.projectile.body.y = boundary.y;
                player.projectile.state.set(ProjectileState::Inactive, time.now);
                events.push(GameEvent::ProjectileMissed);
            }
        }
        ProjectileState::Exploding => {
            if player.projectile.state.elapsed() >= PROJECTILE_EXPLOSION_DURATION {
                player.projectile.state.set(ProjectileState::Inactive, time.now);
            }
        }
    }
}

/// The first active enemy, in slot order, overlapping `body`.
/// Later overlaps in the same frame are ignored.
pub fn first_hit<'a>(flock: &'a mut Flock, body: &Rect) -> Option<&'a mut Enemy> {
    flock
        .iter_mut()
        .find(|enemy| enemy.is_active() && enemy.body().overlaps(body))
}

/// Score after one kill, capped to the display width.
pub fn award(score: u32) -> u32 {
    score.saturating_add(KILL_SCORE).min(PLAYER_MAX_SCORE)
}
