//! A `Canvas` that draws into the log.
//!
//! Every primitive is emitted at `trace` level; `finish` reports a one-line
//! summary of the frame at `debug`.

use glam::Vec2;
use tracing::{debug, trace};

use invaders_core::enums::Color;
use invaders_core::types::Rect;
use invaders_sim::render::Canvas;

#[derive(Debug, Default)]
pub struct TraceCanvas {
    pub rects: usize,
    pub outlines: usize,
    pub circles: usize,
    /// Text lines in draw order.
    pub texts: Vec<String>,
}

impl TraceCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(&self, frame: u64) {
        debug!(
            frame,
            rects = self.rects,
            outlines = self.outlines,
            circles = self.circles,
            status = self.texts.first().map(String::as_str).unwrap_or(""),
            "frame drawn"
        );
    }
}

impl Canvas for TraceCanvas {
    fn rect(&mut self, rect: Rect, color: Color) {
        self.rects += 1;
        trace!(x = rect.x, y = rect.y, w = rect.width, h = rect.height, ?color, "rect");
    }

    fn rect_lines(&mut self, rect: Rect, color: Color) {
        self.outlines += 1;
        trace!(x = rect.x, y = rect.y, w = rect.width, h = rect.height, ?color, "rect_lines");
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circles += 1;
        trace!(x = center.x, y = center.y, radius, ?color, "circle");
    }

    fn text(&mut self, text: &str, position: Vec2, size: f32, color: Color) {
        trace!(x = position.x, y = position.y, size, ?color, text, "text");
        self.texts.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_sim::render;
    use invaders_sim::{Game, GameConfig};

    #[test]
    fn test_counts_render_walk() {
        let game = Game::new(GameConfig::default());
        let snapshot = game.snapshot();

        let mut canvas = TraceCanvas::new();
        render::render(&snapshot, &mut canvas);

        assert_eq!(canvas.outlines, 1);
        // 55 enemies plus the player; the parked projectile is hidden.
        assert_eq!(canvas.rects, 56);
        assert_eq!(canvas.circles, 55);
        assert_eq!(canvas.texts, vec![snapshot.status_line()]);
    }

    #[test]
    fn test_ping_pong_has_no_markers() {
        let game = Game::new(GameConfig::ping_pong());
        let mut canvas = TraceCanvas::new();
        render::render(&game.snapshot(), &mut canvas);

        assert_eq!(canvas.circles, 0);
        assert_eq!(canvas.texts, vec!["Lives 3 Score 0000".to_string()]);
    }
}
