//! Game phase evaluation: invasion ends the game, an empty flock clears it.

use tracing::info;

use invaders_core::components::Player;
use invaders_core::enums::GamePhase;
use invaders_core::events::GameEvent;

use crate::flock::Flock;

/// Evaluate the end-of-frame phase. `invaders` holds the slots that reached
/// the bottom of the play field this frame.
pub fn run(
    phase: &mut GamePhase,
    player: &mut Player,
    flock: &Flock,
    invaders: &[usize],
    events: &mut Vec<GameEvent>,
) {
    if phase.is_terminal() {
        return;
    }

    if !invaders.is_empty() {
        events.extend(invaders.iter().map(|&slot| GameEvent::Invaded { slot }));
        player.lives = 0;
        enter(phase, GamePhase::GameOver, events);
        info!(
            invaders = invaders.len(),
            score = player.score,
            "flock reached the ground, game over"
        );
    } else if flock.all_dead() {
        enter(phase, GamePhase::Cleared, events);
        info!(score = player.score, "flock cleared");
    }
}

fn enter(phase: &mut GamePhase, next: GamePhase, events: &mut Vec<GameEvent>) {
    *phase = next;
    events.push(GameEvent::PhaseChanged { phase: next });
}
