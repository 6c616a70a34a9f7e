//! Game engine, the core of the simulation.
//!
//! `Game` aggregates the player, the flock and the play field, handles the
//! per-frame input, runs all systems, and produces `FrameSnapshot`s.
//! Completely headless, enabling deterministic testing.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use invaders_core::commands::InputFrame;
use invaders_core::components::Player;
use invaders_core::constants::{FLOCK_COLS, FLOCK_ROWS, SCREEN_LEFT_MARGIN, SCREEN_TOP_MARGIN};
use invaders_core::enums::{FlockMode, GamePhase};
use invaders_core::events::GameEvent;
use invaders_core::state::FrameSnapshot;
use invaders_core::types::{FrameTime, Rect};

use crate::flock::Flock;
use crate::systems;
use crate::tuning::FlockTuning;
use crate::world_setup;

/// Configuration for starting a new game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: FlockMode,
    pub rows: usize,
    pub cols: usize,
    /// Top-left corner of the first enemy's body.
    pub anchor: Vec2,
    /// Initial tuning. Ping-pong mode reads its speeds from here.
    pub tuning: FlockTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: FlockMode::RowDescent,
            rows: FLOCK_ROWS,
            cols: FLOCK_COLS,
            anchor: Vec2::new(SCREEN_LEFT_MARGIN, SCREEN_TOP_MARGIN),
            tuning: FlockTuning::default(),
        }
    }
}

impl GameConfig {
    /// A single ping-pong enemy in the top-left corner.
    pub fn ping_pong() -> Self {
        Self {
            mode: FlockMode::PingPong,
            rows: 1,
            cols: 1,
            ..Default::default()
        }
    }
}

/// The game. Owns every entity and all per-frame state.
pub struct Game {
    config: GameConfig,
    pub(crate) boundary: Rect,
    pub(crate) ui_panel: Rect,
    pub(crate) player: Player,
    pub(crate) flock: Flock,
    pub(crate) tuning: FlockTuning,
    pub(crate) phase: GamePhase,
    time: FrameTime,
    /// Events raised by the most recent update.
    events: Vec<GameEvent>,
    invaders: Vec<usize>,
    neighbours: Vec<(usize, Vec2)>,
}

impl Game {
    /// Create a new game with the given config, stamped at time zero.
    pub fn new(config: GameConfig) -> Self {
        let boundary = world_setup::play_field();
        let tuning = config.tuning.clamped();
        Self {
            config,
            boundary,
            ui_panel: world_setup::ui_panel(&boundary),
            player: world_setup::spawn_player(&boundary, 0.0),
            flock: build_flock(&config, &tuning, &boundary, 0.0),
            tuning,
            phase: GamePhase::Playing,
            time: FrameTime::default(),
            events: Vec::new(),
            invaders: Vec::new(),
            neighbours: Vec::with_capacity(config.rows * config.cols),
        }
    }

    /// Advance one frame and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputFrame, time: FrameTime) -> FrameSnapshot {
        self.update(input, time);
        self.snapshot()
    }

    /// Advance one frame.
    ///
    /// Order is part of the contract:
    /// 1. input handling (restart, tuning, reseed),
    /// 2. player: movement, state, clamp, firing,
    /// 3. projectile: flight, first-hit collision, scoring,
    /// 4. enemy clocks and `Dying → Dead`,
    /// 5. enemy motion for the configured mode,
    /// 6. phase evaluation.
    ///
    /// The projectile's position for the frame is final before any enemy
    /// is tested against it. A terminal phase freezes everything after
    /// step 1.
    pub fn update(&mut self, input: &InputFrame, time: FrameTime) {
        self.events.clear();
        self.time = time;

        self.handle_input(input);

        if self.phase.is_terminal() {
            return;
        }

        // 1. Player
        systems::player::run(
            &mut self.player,
            input,
            &self.boundary,
            &time,
            &mut self.events,
        );
        // 2. Projectile vs flock
        systems::projectile::run(
            &mut self.player,
            &mut self.flock,
            &self.boundary,
            &time,
            &mut self.events,
        );
        // 3. Enemy clocks
        systems::enemy_lifecycle::run(&mut self.flock, &time, &mut self.events);
        // 4. Enemy motion
        self.invaders.clear();
        match self.config.mode {
            FlockMode::PingPong => systems::ping_pong::run(
                &mut self.flock,
                &self.boundary,
                &self.tuning,
                &time,
                &mut self.invaders,
            ),
            FlockMode::RowDescent => systems::flock_motion::run(
                &mut self.flock,
                &self.boundary,
                &self.tuning,
                &time,
                &mut self.neighbours,
                &mut self.invaders,
            ),
        }
        self.flock.update_direction_hint();
        // 5. Phase
        systems::phase::run(
            &mut self.phase,
            &mut self.player,
            &self.flock,
            &self.invaders,
            &mut self.events,
        );
    }

    /// Snapshot of the current state, carrying the last update's events.
    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(
            &self.time,
            self.phase,
            self.config.mode,
            &self.boundary,
            &self.ui_panel,
            &self.player,
            &self.flock,
            &self.tuning,
            self.events.clone(),
        )
    }

    /// Rebuild the game from its config, keeping the clock.
    pub fn restart(&mut self) {
        let now = self.time.now;
        self.tuning = self.config.tuning.clamped();
        self.player = world_setup::spawn_player(&self.boundary, now);
        self.flock = build_flock(&self.config, &self.tuning, &self.boundary, now);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        info!(mode = ?self.config.mode, "game restarted");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }

    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn tuning(&self) -> &FlockTuning {
        &self.tuning
    }

    /// Events raised by the most recent update.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// The designated input-handling step: the only place tuning changes
    /// and the flock is reseeded.
    fn handle_input(&mut self, input: &InputFrame) {
        if input.restart {
            self.restart();
        }

        if !self.config.mode.is_tunable() {
            return;
        }

        for adjustment in &input.tuning {
            let value = self.tuning.apply(*adjustment);
            self.events.push(GameEvent::TuningChanged {
                param: adjustment.param,
                value,
            });
            debug!(param = ?adjustment.param, value, "tuning changed");
        }

        if let Some(anchor) = input.reseed_at {
            if !self.phase.is_terminal() {
                let anchor = self.flock.reseed(
                    anchor,
                    &self.boundary,
                    self.tuning.max_h_speed,
                    self.time.now,
                );
                self.events.push(GameEvent::FlockReseeded { anchor });
                debug!(x = anchor.x, y = anchor.y, "flock reseeded");
            }
        }
    }
}

fn build_flock(config: &GameConfig, tuning: &FlockTuning, boundary: &Rect, now: f64) -> Flock {
    Flock::new(
        config.rows,
        config.cols,
        world_setup::enemy_size(config.mode),
        config.anchor,
        boundary,
        tuning.max_h_speed,
        now,
    )
}
