//! Live-tunable flock movement parameters.
//!
//! One value owned by the `Game` and passed explicitly into the flock
//! systems each frame. Only the input-handling step mutates it.

use serde::{Deserialize, Serialize};

use invaders_core::commands::TuningAdjustment;
use invaders_core::constants::*;
use invaders_core::enums::{TuningParam, TuningStep};
use invaders_core::state::TuningView;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlockTuning {
    /// Horizontal cruise speed (px/s).
    pub max_h_speed: f32,
    /// Descent speed (px/s).
    pub max_v_speed: f32,
    /// Radius inside which flock enemies push away from each other.
    pub awareness_distance: f32,
    /// Cap on the velocity change applied in one frame (px/s).
    pub max_force: f32,
}

impl Default for FlockTuning {
    fn default() -> Self {
        Self {
            max_h_speed: ENEMY_HORIZONTAL_SPEED,
            max_v_speed: ENEMY_VERTICAL_SPEED,
            awareness_distance: DEFAULT_AWARENESS_DISTANCE,
            max_force: DEFAULT_MAX_FORCE,
        }
    }
}

impl FlockTuning {
    pub fn get(&self, param: TuningParam) -> f32 {
        match param {
            TuningParam::MaxHSpeed => self.max_h_speed,
            TuningParam::MaxVSpeed => self.max_v_speed,
            TuningParam::AwarenessDistance => self.awareness_distance,
            TuningParam::MaxForce => self.max_force,
        }
    }

    /// Apply one step and return the parameter's new value.
    /// Values never go below their floor.
    pub fn apply(&mut self, adjustment: TuningAdjustment) -> f32 {
        let (value, step, floor) = match adjustment.param {
            TuningParam::MaxHSpeed => (&mut self.max_h_speed, SPEED_TUNING_STEP, MIN_H_SPEED),
            TuningParam::MaxVSpeed => (&mut self.max_v_speed, SPEED_TUNING_STEP, MIN_V_SPEED),
            TuningParam::AwarenessDistance => (
                &mut self.awareness_distance,
                AWARENESS_TUNING_STEP,
                MIN_AWARENESS_DISTANCE,
            ),
            TuningParam::MaxForce => (&mut self.max_force, FORCE_TUNING_STEP, MIN_MAX_FORCE),
        };
        let delta = match adjustment.step {
            TuningStep::Increase => step,
            TuningStep::Decrease => -step,
        };
        *value = (*value + delta).max(floor);
        *value
    }

    /// Pull every parameter up to its floor.
    pub fn clamped(mut self) -> Self {
        self.max_h_speed = self.max_h_speed.max(MIN_H_SPEED);
        self.max_v_speed = self.max_v_speed.max(MIN_V_SPEED);
        self.awareness_distance = self.awareness_distance.max(MIN_AWARENESS_DISTANCE);
        self.max_force = self.max_force.max(MIN_MAX_FORCE);
        self
    }

    pub fn view(&self) -> TuningView {
        TuningView {
            max_h_speed: self.max_h_speed,
            max_v_speed: self.max_v_speed,
            awareness_distance: self.awareness_distance,
            max_force: self.max_force,
        }
    }
}
