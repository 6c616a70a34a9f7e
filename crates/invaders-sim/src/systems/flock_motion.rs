//! Row-descent flock motion.
//!
//! Every enemy scans its row independently: it cruises sideways until its
//! body comes within `PIVOT_MARGIN` of a side boundary, descends one row
//! pitch measured from the pivot point, then cruises back the other way.
//! Velocity is steered toward the direction's cruise velocity, with the
//! per-frame change capped by `max_force`, and enemies inside each
//! other's awareness radius ease off their horizontal speed.

use glam::Vec2;

use invaders_core::components::Enemy;
use invaders_core::constants::{ENEMY_ROW_GAP, PIVOT_MARGIN, SEPARATION_MIN_CRUISE};
use invaders_core::enums::MoveDirection;
use invaders_core::types::{FrameTime, Rect};

use crate::flock::Flock;
use crate::tuning::FlockTuning;

/// Move every active enemy one frame.
///
/// `neighbours` is a scratch buffer holding the start-of-frame centres of
/// the active enemies, so every enemy reacts to the same picture of the
/// flock regardless of slot order. Slots whose body reaches the bottom of
/// the play field are pushed into `invaders`.
pub fn run(
    flock: &mut Flock,
    boundary: &Rect,
    tuning: &FlockTuning,
    time: &FrameTime,
    neighbours: &mut Vec<(usize, Vec2)>,
    invaders: &mut Vec<usize>,
) {
    neighbours.clear();
    neighbours.extend(
        flock
            .iter()
            .filter(|enemy| enemy.is_active())
            .map(|enemy| (enemy.slot, enemy.position)),
    );

    for enemy in flock.iter_mut().filter(|enemy| enemy.is_active()) {
        let push = separation(enemy, neighbours, tuning.awareness_distance);
        if step_enemy(enemy, boundary, tuning, push, time.dt) {
            invaders.push(enemy.slot);
        }
    }
}

/// Returns `true` when the enemy reached the bottom boundary.
fn step_enemy(
    enemy: &mut Enemy,
    boundary: &Rect,
    tuning: &FlockTuning,
    push: f32,
    dt: f32,
) -> bool {
    let desired = desired_velocity(enemy.dir, tuning, push);
    let steer = (desired - enemy.velocity).clamp_length_max(tuning.max_force);
    enemy.velocity += steer;
    enemy.position += enemy.velocity * dt;

    let half = enemy.size / 2.0;
    enemy.position.x = enemy
        .position
        .x
        .min(boundary.right() - half.x)
        .max(boundary.x + half.x);

    if enemy.position.y + half.y >= boundary.bottom() {
        enemy.position.y = boundary.bottom() - half.y;
        enemy.distance_traveled = enemy.position.distance(enemy.move_start);
        return true;
    }

    enemy.distance_traveled = enemy.position.distance(enemy.move_start);
    let body = enemy.body();

    match enemy.dir {
        MoveDirection::Right => {
            if body.right() >= boundary.right() - PIVOT_MARGIN {
                begin_descent(enemy, MoveDirection::Right);
            }
        }
        MoveDirection::Left => {
            if body.x <= boundary.x + PIVOT_MARGIN {
                begin_descent(enemy, MoveDirection::Left);
            }
        }
        MoveDirection::Down => {
            if enemy.distance_traveled >= enemy.size.y + ENEMY_ROW_GAP {
                enemy.dir = enemy.previous_dir.opposite();
                enemy.move_start = enemy.position;
                enemy.distance_traveled = 0.0;
            }
        }
    }

    false
}

/// Pivot into a descent; the current centre anchors the descent distance.
fn begin_descent(enemy: &mut Enemy, from: MoveDirection) {
    enemy.previous_dir = from;
    enemy.dir = MoveDirection::Down;
    enemy.move_start = enemy.position;
    enemy.distance_traveled = 0.0;
}

/// Cruise velocity for `dir`, with the horizontal component eased by the
/// separation push. Horizontal cruise never reverses and never drops below
/// `SEPARATION_MIN_CRUISE` of the tuned speed.
pub fn desired_velocity(dir: MoveDirection, tuning: &FlockTuning, push: f32) -> Vec2 {
    let cruise = tuning.max_h_speed;
    let floor = cruise * SEPARATION_MIN_CRUISE;
    match dir {
        MoveDirection::Right => Vec2::new((cruise + push * cruise).clamp(floor, cruise), 0.0),
        MoveDirection::Left => Vec2::new((-cruise + push * cruise).clamp(-cruise, -floor), 0.0),
        MoveDirection::Down => Vec2::new(0.0, tuning.max_v_speed),
    }
}

/// Horizontal push away from active neighbours closer than `awareness`,
/// weighted by how deep they sit inside the radius.
pub fn separation(enemy: &Enemy, neighbours: &[(usize, Vec2)], awareness: f32) -> f32 {
    if awareness <= 0.0 {
        return 0.0;
    }
    neighbours
        .iter()
        .filter(|(slot, _)| *slot != enemy.slot)
        .filter_map(|(_, center)| {
            let offset = enemy.position - *center;
            let distance = offset.length();
            (distance > 0.0 && distance < awareness)
                .then(|| offset.x / distance * (1.0 - distance / awareness))
        })
        .sum()
}
