//! Simulation constants and tuning parameters.

// --- Screen layout ---

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: f32 = 800.0;

pub const SCREEN_LEFT_MARGIN: f32 = 10.0;
pub const SCREEN_RIGHT_MARGIN: f32 = 10.0;
pub const SCREEN_TOP_MARGIN: f32 = 10.0;

/// Bottom margin doubles as the height of the UI strip.
pub const SCREEN_BOTTOM_MARGIN: f32 = 50.0;

/// Vertical offset of the status line inside the UI strip.
pub const UI_TEXT_OFFSET: f32 = 10.0;

/// Font size of the status line.
pub const UI_FONT_SIZE: f32 = 20.0;

// --- Player ---

/// Horizontal speed (px/s).
pub const PLAYER_SPEED: f32 = 200.0;

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 50.0;

pub const PLAYER_MAX_LIVES: u32 = 3;

/// Score is bounded to four display digits.
pub const PLAYER_MAX_SCORE: u32 = 9999;

/// Score awarded for each enemy knocked out of the `Active` state.
pub const KILL_SCORE: u32 = 10;

// --- Projectile ---

/// Upward speed (px/s).
pub const PROJECTILE_SPEED: f32 = 600.0;

pub const PROJECTILE_WIDTH: f32 = 5.0;
pub const PROJECTILE_HEIGHT: f32 = 20.0;

/// Gap between the player's top edge and a freshly fired projectile.
pub const PROJECTILE_OFFSET_FROM_PLAYER: f32 = 10.0;

/// Seconds a projectile stays in `Exploding` before it can be fired again.
pub const PROJECTILE_EXPLOSION_DURATION: f64 = 0.5;

// --- Enemies ---

/// Body size of a ping-pong enemy.
pub const PING_PONG_ENEMY_SIZE: f32 = 50.0;

/// Body size of a flock enemy.
pub const FLOCK_ENEMY_SIZE: f32 = 40.0;

/// Gap between neighbouring enemies in a freshly seeded grid, and the extra
/// descent a flock enemy makes on top of its own height.
pub const ENEMY_ROW_GAP: f32 = 22.0;

/// Horizontal speed (px/s).
pub const ENEMY_HORIZONTAL_SPEED: f32 = 150.0;

/// Descent speed (px/s).
pub const ENEMY_VERTICAL_SPEED: f32 = 500.0;

/// Vertical distance a ping-pong enemy drops per edge hit.
pub const PING_PONG_DESCENT_STEP: f32 = 25.0;

/// Seconds an enemy spends `Dying` before it is `Dead`.
pub const ENEMY_DYING_DURATION: f64 = 0.5;

/// Distance from a side boundary at which a flock enemy starts descending.
pub const PIVOT_MARGIN: f32 = 5.0;

// --- Flock grid ---

pub const FLOCK_ROWS: usize = 5;
pub const FLOCK_COLS: usize = 11;

/// Radius of the marker circle drawn at each flock enemy's centre.
pub const ENEMY_MARKER_RADIUS: f32 = 3.0;

// --- Flock tuning ---

/// Default radius inside which flock enemies push away from each other.
/// Kept below the grid pitch so an undisturbed grid feels no push.
pub const DEFAULT_AWARENESS_DISTANCE: f32 = 40.0;

/// Default cap on per-frame velocity change (px/s).
/// Large enough that every default direction change is instantaneous.
pub const DEFAULT_MAX_FORCE: f32 = 600.0;

/// Fraction of the horizontal speed an enemy keeps while being pushed.
pub const SEPARATION_MIN_CRUISE: f32 = 0.25;

pub const MIN_H_SPEED: f32 = 10.0;
pub const MIN_V_SPEED: f32 = 10.0;
pub const MIN_AWARENESS_DISTANCE: f32 = 0.0;
pub const MIN_MAX_FORCE: f32 = 1.0;

pub const SPEED_TUNING_STEP: f32 = 10.0;
pub const AWARENESS_TUNING_STEP: f32 = 5.0;
pub const FORCE_TUNING_STEP: f32 = 10.0;
