//! Fundamental geometric and timing types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in play-field coordinates.
/// Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centred on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let top_left = center - size / 2.0;
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Strict AABB overlap. Rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Clamp `x` so the rectangle lies horizontally inside `boundary`.
    pub fn clamp_x_within(&mut self, boundary: &Rect) {
        let max_x = boundary.right() - self.width;
        self.x = self.x.max(boundary.x).min(max_x);
    }
}

/// Per-frame clock handed in by the loop driver.
///
/// `now` is a monotonic timestamp in seconds used to stamp state
/// transitions; `dt` is the elapsed frame time used for motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Frame counter (increments by 1 each frame).
    pub frame: u64,
    /// Monotonic time in seconds.
    pub now: f64,
    /// Seconds since the previous frame.
    pub dt: f32,
}

impl FrameTime {
    pub fn new(frame: u64, now: f64, dt: f32) -> Self {
        Self { frame, now, dt }
    }

    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.now += dt as f64;
        self.dt = dt;
    }
}
