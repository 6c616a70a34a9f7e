//! Factories for the play field, the player and the enemy grid.

use glam::Vec2;

use invaders_core::components::{Enemy, Player, Projectile};
use invaders_core::constants::*;
use invaders_core::enums::*;
use invaders_core::timed_state::TimedState;
use invaders_core::types::Rect;

/// The play-field boundary: the screen minus its margins.
pub fn play_field() -> Rect {
    Rect::new(
        SCREEN_LEFT_MARGIN,
        SCREEN_TOP_MARGIN,
        SCREEN_WIDTH - SCREEN_LEFT_MARGIN - SCREEN_RIGHT_MARGIN,
        SCREEN_HEIGHT - SCREEN_TOP_MARGIN - SCREEN_BOTTOM_MARGIN,
    )
}

/// The UI strip directly below the play field.
pub fn ui_panel(boundary: &Rect) -> Rect {
    Rect::new(
        SCREEN_LEFT_MARGIN,
        boundary.bottom(),
        SCREEN_WIDTH - SCREEN_LEFT_MARGIN - SCREEN_RIGHT_MARGIN,
        SCREEN_BOTTOM_MARGIN,
    )
}

/// Spawn the player at the bottom-left of the play field with a parked projectile.
pub fn spawn_player(boundary: &Rect, now: f64) -> Player {
    let body = Rect::new(
        boundary.x,
        boundary.bottom() - PLAYER_HEIGHT,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
    );
    Player {
        body,
        projectile: Projectile {
            body: launch_rect(&body),
            state: TimedState::new(ProjectileState::Inactive, now),
        },
        state: TimedState::new(PlayerState::Idle, now),
        lives: PLAYER_MAX_LIVES,
        score: 0,
    }
}

/// Where a projectile fired from `player_body` starts: horizontally centred,
/// its bottom edge a fixed gap above the player's top edge.
pub fn launch_rect(player_body: &Rect) -> Rect {
    Rect::new(
        player_body.x + player_body.width / 2.0 - PROJECTILE_WIDTH / 2.0,
        player_body.y - PROJECTILE_HEIGHT - PROJECTILE_OFFSET_FROM_PLAYER,
        PROJECTILE_WIDTH,
        PROJECTILE_HEIGHT,
    )
}

/// Body size of one enemy for the given mode.
pub fn enemy_size(mode: FlockMode) -> Vec2 {
    match mode {
        FlockMode::PingPong => Vec2::splat(PING_PONG_ENEMY_SIZE),
        FlockMode::RowDescent => Vec2::splat(FLOCK_ENEMY_SIZE),
    }
}

/// Overall size of a `rows` x `cols` grid of `size` enemies.
pub fn grid_extent(rows: usize, cols: usize, size: Vec2) -> Vec2 {
    let cells = Vec2::new(cols as f32, rows as f32);
    let gaps = Vec2::new(
        cols.saturating_sub(1) as f32,
        rows.saturating_sub(1) as f32,
    );
    cells * size + gaps * ENEMY_ROW_GAP
}

/// Pull a grid anchor back so the whole grid lies inside `boundary`.
pub fn clamp_anchor(anchor: Vec2, extent: Vec2, boundary: &Rect) -> Vec2 {
    let max_x = boundary.right() - extent.x;
    let max_y = boundary.bottom() - extent.y;
    Vec2::new(
        anchor.x.min(max_x).max(boundary.x),
        anchor.y.min(max_y).max(boundary.y),
    )
}

/// Centre of the grid cell at (`row`, `col`) for a grid whose first body
/// has its top-left corner at `anchor`.
pub fn grid_cell_center(anchor: Vec2, size: Vec2, row: usize, col: usize) -> Vec2 {
    let pitch = size + Vec2::splat(ENEMY_ROW_GAP);
    anchor + Vec2::new(col as f32, row as f32) * pitch + size / 2.0
}

/// Spawn a fresh, rightward-moving enemy centred at `center`.
pub fn spawn_enemy(
    slot: usize,
    row: usize,
    col: usize,
    center: Vec2,
    size: Vec2,
    cruise_speed: f32,
    now: f64,
) -> Enemy {
    Enemy {
        slot,
        row,
        col,
        position: center,
        size,
        velocity: Vec2::new(cruise_speed, 0.0),
        state: TimedState::new(EnemyState::Active, now),
        dir: MoveDirection::Right,
        previous_dir: MoveDirection::Right,
        move_start: center,
        distance_traveled: 0.0,
    }
}
