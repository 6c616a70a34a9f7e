//! Enemy state clocks and the `Dying → Dead` transition.

use glam::Vec2;
use tracing::debug;

use invaders_core::constants::ENEMY_DYING_DURATION;
use invaders_core::enums::EnemyState;
use invaders_core::events::GameEvent;
use invaders_core::types::FrameTime;

use crate::flock::Flock;

/// Tick every live enemy's state and retire finished dying ones.
/// `Dead` slots are skipped entirely.
pub fn run(flock: &mut Flock, time: &FrameTime, events: &mut Vec<GameEvent>) {
    for enemy in flock.iter_mut().filter(|enemy| enemy.is_live()) {
        enemy.state.tick(time.now);

        if enemy.state.is(EnemyState::Dying) && enemy.state.elapsed() >= ENEMY_DYING_DURATION {
            enemy.state.set(EnemyState::Dead, time.now);
            enemy.velocity = Vec2::ZERO;
            events.push(GameEvent::EnemyDestroyed { slot: enemy.slot });
            debug!(slot = enemy.slot, "enemy destroyed");
        }
    }
}
