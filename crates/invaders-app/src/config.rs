use std::{env, time::Duration};

use invaders_core::enums::FlockMode;
use invaders_sim::GameConfig;

// Runtime/driver settings (not gameplay tuning).

pub const DEFAULT_TARGET_FPS: u32 = 60;
pub const MAX_TARGET_FPS: u32 = 240;
pub const DEFAULT_DEMO_SECS: u64 = 30;

/// `INVADERS_MODE`: `ping-pong` or `row-descent` (default).
pub fn flock_mode() -> FlockMode {
    env::var("INVADERS_MODE")
        .ok()
        .and_then(|value| parse_mode(&value))
        .unwrap_or_default()
}

pub fn parse_mode(value: &str) -> Option<FlockMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "ping-pong" | "pingpong" | "single" => Some(FlockMode::PingPong),
        "row-descent" | "rowdescent" | "flock" => Some(FlockMode::RowDescent),
        _ => None,
    }
}

/// Game setup for the configured mode. `INVADERS_ROWS` and `INVADERS_COLS`
/// override the mode's default grid.
pub fn game_config() -> GameConfig {
    let base = match flock_mode() {
        FlockMode::PingPong => GameConfig::ping_pong(),
        FlockMode::RowDescent => GameConfig::default(),
    };
    GameConfig {
        rows: env_usize("INVADERS_ROWS").unwrap_or(base.rows).max(1),
        cols: env_usize("INVADERS_COLS").unwrap_or(base.cols).max(1),
        ..base
    }
}

pub fn target_fps() -> u32 {
    env::var("INVADERS_TARGET_FPS")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(DEFAULT_TARGET_FPS)
        .clamp(1, MAX_TARGET_FPS)
}

/// Wall-clock budget of one frame at the target rate.
pub fn frame_duration() -> Duration {
    frame_duration_for(target_fps())
}

pub fn frame_duration_for(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)))
}

/// How long the headless demo runs before shutting down.
pub fn demo_duration() -> Duration {
    let secs = env::var("INVADERS_DEMO_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(DEFAULT_DEMO_SECS);
    Duration::from_secs(secs)
}

fn env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("ping-pong"), Some(FlockMode::PingPong));
        assert_eq!(parse_mode(" Row-Descent "), Some(FlockMode::RowDescent));
        assert_eq!(parse_mode("flock"), Some(FlockMode::RowDescent));
        assert_eq!(parse_mode("sideways"), None);
    }

    #[test]
    fn test_frame_duration_for() {
        assert_eq!(frame_duration_for(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_duration_for(1), Duration::from_secs(1));
        // A zero rate falls back to one frame per second.
        assert_eq!(frame_duration_for(0), Duration::from_secs(1));
    }
}
