//! Render walk over a `FrameSnapshot`.
//!
//! Drawing itself belongs to the external renderer, which implements
//! `Canvas`. This module only decides what is drawn, in which order and
//! in which colour.

use glam::Vec2;

use invaders_core::constants::{ENEMY_MARKER_RADIUS, UI_FONT_SIZE, UI_TEXT_OFFSET};
use invaders_core::enums::{Color, EnemyState, FlockMode, GamePhase, ProjectileState};
use invaders_core::state::{EnemyView, FrameSnapshot};
use invaders_core::types::Rect;

/// Drawing primitives supplied by the renderer.
pub trait Canvas {
    /// Filled rectangle.
    fn rect(&mut self, rect: Rect, color: Color);
    /// Rectangle outline.
    fn rect_lines(&mut self, rect: Rect, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Text with its top-left corner at `position`.
    fn text(&mut self, text: &str, position: Vec2, size: f32, color: Color);
}

/// Draw one frame.
///
/// Enemies are drawn back to front (highest slot first) so the front rows
/// end up on top. The projectile is only drawn while in flight or
/// exploding.
pub fn render<C: Canvas>(snapshot: &FrameSnapshot, canvas: &mut C) {
    canvas.rect_lines(snapshot.boundary, Color::DarkBrown);

    for enemy in &snapshot.enemies {
        canvas.rect(enemy.body, enemy_color(snapshot.mode, enemy));
        if snapshot.mode.is_tunable() {
            canvas.circle(enemy.center, ENEMY_MARKER_RADIUS, Color::White);
        }
    }

    canvas.rect(snapshot.player.body, Color::Red);

    if snapshot.projectile.is_visible() {
        let color = match snapshot.projectile.state {
            ProjectileState::Exploding => Color::Orange,
            _ => Color::Yellow,
        };
        canvas.rect(snapshot.projectile.body, color);
    }

    let ui = snapshot.ui_panel;
    canvas.text(
        &snapshot.status_line(),
        Vec2::new(ui.x, ui.y + UI_TEXT_OFFSET),
        UI_FONT_SIZE,
        Color::Yellow,
    );

    if let Some(banner) = banner(snapshot.phase) {
        let center = snapshot.boundary.center();
        let half_width = banner.len() as f32 * UI_FONT_SIZE / 4.0;
        canvas.text(
            banner,
            Vec2::new(center.x - half_width, center.y),
            UI_FONT_SIZE * 2.0,
            Color::Yellow,
        );
    }
}

/// Row classification drives the flock palette: the top row stands out,
/// the next two share a colour, the rest share another.
pub fn row_color(row: usize) -> Color {
    match row {
        0 => Color::Magenta,
        1 | 2 => Color::Cyan,
        _ => Color::Green,
    }
}

fn enemy_color(mode: FlockMode, enemy: &EnemyView) -> Color {
    if enemy.state == EnemyState::Dying {
        return Color::White;
    }
    match mode {
        FlockMode::PingPong => Color::Red,
        FlockMode::RowDescent => row_color(enemy.row),
    }
}

fn banner(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Playing => None,
        GamePhase::GameOver => Some("GAME OVER"),
        GamePhase::Cleared => Some("FLOCK CLEARED"),
    }
}
