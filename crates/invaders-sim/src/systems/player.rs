//! Player movement, firing and boundary clamping.

use tracing::debug;

use invaders_core::commands::InputFrame;
use invaders_core::components::Player;
use invaders_core::constants::PLAYER_SPEED;
use invaders_core::enums::{PlayerState, ProjectileState};
use invaders_core::events::GameEvent;
use invaders_core::types::{FrameTime, Rect};

use crate::world_setup;

/// Run one frame of player control.
pub fn run(
    player: &mut Player,
    input: &InputFrame,
    boundary: &Rect,
    time: &FrameTime,
    events: &mut Vec<GameEvent>,
) {
    let step = PLAYER_SPEED * time.dt;
    let previous_x = player.body.x;
    let mut x = previous_x;
    if input.left {
        x -= step;
    }
    if input.right {
        x += step;
    }

    // State follows the requested motion, even when the clamp below undoes it.
    let state = if x != previous_x {
        PlayerState::Moving
    } else {
        PlayerState::Idle
    };
    player.state.set(state, time.now);

    player.body.x = x;
    player.body.clamp_x_within(boundary);

    if input.fire && player.projectile.state.is(ProjectileState::Inactive) {
        player.projectile.body = world_setup::launch_rect(&player.body);
        player.projectile.state.set(ProjectileState::Active, time.now);
        events.push(GameEvent::ProjectileFired {
            x: player.projectile.body.x,
            y: player.projectile.body.y,
        });
        debug!(x = player.projectile.body.x, "projectile fired");
    }

    player.state.tick(time.now);
    // An in-flight projectile's clock is never consulted.
    if !player.projectile.state.is(ProjectileState::Active) {
        player.projectile.state.tick(time.now);
    }
}
