//! Fixed-capacity enemy arena.
//!
//! Slots are allocated once (`rows * cols`) and never removed. A `Dead`
//! state marks logical deletion; iteration order is slot order, and the
//! draw order is its exact reverse.

use glam::Vec2;

use invaders_core::components::Enemy;
use invaders_core::enums::{EnemyState, MoveDirection};
use invaders_core::types::Rect;

use crate::world_setup;

#[derive(Debug, Clone)]
pub struct Flock {
    enemies: Vec<Enemy>,
    rows: usize,
    cols: usize,
    size: Vec2,
    /// Flock-wide horizontal direction hint.
    move_direction: MoveDirection,
}

impl Flock {
    /// Seed a `rows` x `cols` grid anchored at `anchor`.
    pub fn new(
        rows: usize,
        cols: usize,
        size: Vec2,
        anchor: Vec2,
        boundary: &Rect,
        cruise_speed: f32,
        now: f64,
    ) -> Self {
        let mut flock = Self {
            enemies: Vec::with_capacity(rows * cols),
            rows,
            cols,
            size,
            move_direction: MoveDirection::Right,
        };
        flock.reseed(anchor, boundary, cruise_speed, now);
        flock
    }

    /// Rebuild every slot as a fresh grid at `anchor`, discarding all
    /// scanning progress and reviving dead slots. Returns the anchor
    /// actually used after clamping the grid into `boundary`.
    pub fn reseed(&mut self, anchor: Vec2, boundary: &Rect, cruise_speed: f32, now: f64) -> Vec2 {
        let extent = world_setup::grid_extent(self.rows, self.cols, self.size);
        let anchor = world_setup::clamp_anchor(anchor, extent, boundary);

        self.enemies.clear();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let center = world_setup::grid_cell_center(anchor, self.size, row, col);
                self.enemies.push(world_setup::spawn_enemy(
                    row * self.cols + col,
                    row,
                    col,
                    center,
                    self.size,
                    cruise_speed,
                    now,
                ));
            }
        }
        self.move_direction = MoveDirection::Right;
        anchor
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Enemy> {
        self.enemies.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Enemy> {
        self.enemies.get_mut(slot)
    }

    /// All slots in slot order, dead ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.enemies.iter_mut()
    }

    /// Live (non-`Dead`) enemies, highest slot first.
    pub fn draw_order(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().rev().filter(|enemy| enemy.is_live())
    }

    pub fn active_count(&self) -> usize {
        self.enemies.iter().filter(|enemy| enemy.is_active()).count()
    }

    pub fn all_dead(&self) -> bool {
        self.enemies
            .iter()
            .all(|enemy| enemy.state.is(EnemyState::Dead))
    }

    pub fn move_direction(&self) -> MoveDirection {
        self.move_direction
    }

    /// Recompute the direction hint from the majority of active enemies
    /// travelling horizontally. Ties and all-descending flocks keep the
    /// previous hint.
    pub fn update_direction_hint(&mut self) {
        let (right, left) = self
            .enemies
            .iter()
            .filter(|enemy| enemy.is_active())
            .fold((0usize, 0usize), |(r, l), enemy| match enemy.dir {
                MoveDirection::Right => (r + 1, l),
                MoveDirection::Left => (r, l + 1),
                MoveDirection::Down => (r, l),
            });
        if right > left {
            self.move_direction = MoveDirection::Right;
        } else if left > right {
            self.move_direction = MoveDirection::Left;
        }
    }
}
