//! Ping-pong enemy motion.
//!
//! Enemies sweep right until the boundary, drop a fixed step, then sweep
//! back. The body edges drive every decision; the centre is written back
//! after each move.

use glam::Vec2;

use invaders_core::components::Enemy;
use invaders_core::constants::PING_PONG_DESCENT_STEP;
use invaders_core::enums::MoveDirection;
use invaders_core::types::{FrameTime, Rect};

use crate::flock::Flock;
use crate::tuning::FlockTuning;

/// Move every active enemy one frame. Slots whose body reaches the bottom
/// of the play field are pushed into `invaders`.
pub fn run(
    flock: &mut Flock,
    boundary: &Rect,
    tuning: &FlockTuning,
    time: &FrameTime,
    invaders: &mut Vec<usize>,
) {
    for enemy in flock.iter_mut().filter(|enemy| enemy.is_active()) {
        if step_enemy(enemy, boundary, tuning, time.dt) {
            invaders.push(enemy.slot);
        }
    }
}

/// Returns `true` when the enemy reached the bottom boundary.
fn step_enemy(enemy: &mut Enemy, boundary: &Rect, tuning: &FlockTuning, dt: f32) -> bool {
    let mut body = enemy.body();
    let mut landed = false;

    match enemy.dir {
        MoveDirection::Right => {
            enemy.velocity = Vec2::new(tuning.max_h_speed, 0.0);
            body.x += tuning.max_h_speed * dt;
            if body.right() >= boundary.right() {
                body.x = boundary.right() - body.width;
                begin_descent(enemy, &body, MoveDirection::Right);
            }
        }
        MoveDirection::Left => {
            enemy.velocity = Vec2::new(-tuning.max_h_speed, 0.0);
            body.x -= tuning.max_h_speed * dt;
            if body.x <= boundary.x {
                body.x = boundary.x;
                begin_descent(enemy, &body, MoveDirection::Left);
            }
        }
        MoveDirection::Down => {
            enemy.velocity = Vec2::new(0.0, tuning.max_v_speed);
            body.y += tuning.max_v_speed * dt;
            if body.bottom() >= boundary.bottom() {
                body.y = boundary.bottom() - body.height;
                landed = true;
            } else if body.center().distance(enemy.move_start) >= PING_PONG_DESCENT_STEP {
                enemy.dir = if body.x <= boundary.x {
                    MoveDirection::Right
                } else {
                    MoveDirection::Left
                };
                enemy.move_start = body.center();
            }
        }
    }

    enemy.position = body.center();
    enemy.distance_traveled = enemy.position.distance(enemy.move_start);
    landed
}

fn begin_descent(enemy: &mut Enemy, body: &Rect, from: MoveDirection) {
    enemy.previous_dir = from;
    enemy.dir = MoveDirection::Down;
    enemy.move_start = body.center();
}
