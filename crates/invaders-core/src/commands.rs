//! Per-frame input snapshot sent from the loop driver to the simulation.
//!
//! Held controls are sampled once per frame. Edge-triggered controls
//! (tuning keys, reseed click, restart) carry one press each and are
//! consumed by the frame they arrive in.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{TuningParam, TuningStep};

/// One step applied to a tunable flock parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningAdjustment {
    pub param: TuningParam,
    pub step: TuningStep,
}

impl TuningAdjustment {
    pub fn increase(param: TuningParam) -> Self {
        Self {
            param,
            step: TuningStep::Increase,
        }
    }

    pub fn decrease(param: TuningParam) -> Self {
        Self {
            param,
            step: TuningStep::Decrease,
        }
    }
}

/// Everything the simulation reads from the input collaborator in one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Move-left is held.
    pub left: bool,
    /// Move-right is held.
    pub right: bool,
    /// Fire is held.
    pub fire: bool,
    /// Tuning keys pressed this frame, in press order.
    #[serde(default)]
    pub tuning: Vec<TuningAdjustment>,
    /// Reseed trigger with the anchor point (mouse position) it was fired at.
    #[serde(default)]
    pub reseed_at: Option<Vec2>,
    /// Restart pressed this frame.
    #[serde(default)]
    pub restart: bool,
}

impl InputFrame {
    /// Carry held controls forward and fold in the edge-triggered presses
    /// of a newer frame. Used by drivers that sample input faster than
    /// they step the simulation.
    pub fn merge(&mut self, newer: InputFrame) {
        self.left = newer.left;
        self.right = newer.right;
        self.fire = newer.fire;
        self.tuning.extend(newer.tuning);
        if newer.reseed_at.is_some() {
            self.reseed_at = newer.reseed_at;
        }
        self.restart |= newer.restart;
    }

    /// Drop the edge-triggered presses once a frame has consumed them.
    pub fn clear_edges(&mut self) {
        self.tuning.clear();
        self.reseed_at = None;
        self.restart = false;
    }
}
