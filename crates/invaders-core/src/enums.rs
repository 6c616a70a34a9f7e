//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player ship state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Idle,
    Moving,
}

/// Projectile lifecycle: `Inactive → Active → Exploding → Inactive`.
/// A miss goes straight from `Active` back to `Inactive`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileState {
    /// Parked, waiting to be fired. Not drawn, not moved.
    #[default]
    Inactive,
    /// In flight.
    Active,
    /// Struck an enemy; holds position until the explosion times out.
    Exploding,
}

/// Enemy lifecycle. `Dead` is permanent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Active,
    Dying,
    Dead,
}

/// Enemy travel direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    #[default]
    Right,
    Down,
    Left,
}

impl MoveDirection {
    /// Horizontal reversal. `Down` has no opposite and is returned as is.
    pub fn opposite(self) -> Self {
        match self {
            MoveDirection::Right => MoveDirection::Left,
            MoveDirection::Left => MoveDirection::Right,
            MoveDirection::Down => MoveDirection::Down,
        }
    }
}

/// How enemies move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlockMode {
    /// Linear ping-pong with edge-triggered descent steps.
    PingPong,
    /// Independent row-descent with steering and live tuning.
    #[default]
    RowDescent,
}

impl FlockMode {
    /// Whether this mode accepts tuning adjustments and reseeding.
    pub fn is_tunable(self) -> bool {
        matches!(self, FlockMode::RowDescent)
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// An enemy reached the bottom of the play field.
    GameOver,
    /// Every enemy in the flock is dead.
    Cleared,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Live-tunable flock parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuningParam {
    MaxHSpeed,
    MaxVSpeed,
    AwarenessDistance,
    MaxForce,
}

/// Direction of a tuning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuningStep {
    Increase,
    Decrease,
}

/// Colours the render walk asks the canvas for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Magenta,
    DarkBrown,
}
