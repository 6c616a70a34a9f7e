//! Game loop thread: steps the `Game` at a fixed rate and publishes snapshots.
//!
//! The game is created inside this thread so it never crosses a thread
//! boundary. Input arrives via an `mpsc` channel and is folded into one
//! `InputFrame` per step; the latest snapshot is stored in shared state for
//! polling.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use invaders_core::commands::InputFrame;
use invaders_core::types::FrameTime;
use invaders_sim::{Game, GameConfig};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Longest frame handed to the simulation. A stalled thread resumes with a
/// normal step instead of teleporting entities across the field.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle so the caller can join
/// after sending `Shutdown`.
pub fn spawn_game_loop(
    config: GameConfig,
    frame_duration: Duration,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            run_game_loop(config, frame_duration, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: GameConfig,
    frame_duration: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut game = Game::new(config);
    let mut input = InputFrame::default();
    let mut clock = FrameTime::default();
    let started = Instant::now();
    let mut next_frame_time = started;

    info!(mode = ?config.mode, rows = config.rows, cols = config.cols, "game loop started");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut input) {
            info!(frame = clock.frame, "game loop stopped");
            return;
        }

        // 2. Advance one frame on the wall clock
        clock = next_clock(clock, started.elapsed().as_secs_f64());
        let snapshot = game.tick(&input, clock);
        input.clear_edges();

        if !snapshot.events.is_empty() {
            debug!(frame = clock.frame, events = ?snapshot.events, "frame events");
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

/// Fold every queued command into `input`. Returns `false` when the loop
/// should stop.
pub fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, input: &mut InputFrame) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Input(frame)) => input.merge(frame),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The clock for the frame starting at `now` (seconds since the loop
/// started). `now` never runs backwards and `dt` is capped.
pub fn next_clock(previous: FrameTime, now: f64) -> FrameTime {
    let now = now.max(previous.now);
    let dt = ((now - previous.now) as f32).min(MAX_FRAME_DT);
    FrameTime::new(previous.frame + 1, now, dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use invaders_core::commands::TuningAdjustment;
    use invaders_core::enums::{FlockMode, TuningParam};

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputFrame {
            left: true,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Input(InputFrame { left: true, .. })
        ));
        assert!(matches!(commands[1], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_merges_inputs() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Input(InputFrame {
            right: true,
            tuning: vec![TuningAdjustment::increase(TuningParam::MaxForce)],
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Input(InputFrame {
            fire: true,
            tuning: vec![TuningAdjustment::decrease(TuningParam::MaxForce)],
            ..Default::default()
        }))
        .unwrap();

        let mut input = InputFrame::default();
        assert!(drain_commands(&rx, &mut input));

        // Held keys come from the newest sample, presses accumulate.
        assert!(!input.right);
        assert!(input.fire);
        assert_eq!(input.tuning.len(), 2);
    }

    #[test]
    fn test_drain_stops_on_shutdown_and_disconnect() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let mut input = InputFrame::default();

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&rx, &mut input));

        drop(tx);
        assert!(!drain_commands(&rx, &mut input));
    }

    #[test]
    fn test_next_clock_is_monotonic_and_capped() {
        let first = next_clock(FrameTime::default(), 0.016);
        assert_eq!(first.frame, 1);
        assert!((first.dt - 0.016).abs() < 1e-6);

        let stalled = next_clock(first, 5.0);
        assert_eq!(stalled.frame, 2);
        assert_eq!(stalled.now, 5.0);
        assert_eq!(stalled.dt, MAX_FRAME_DT);

        let backwards = next_clock(stalled, 4.0);
        assert_eq!(backwards.now, 5.0);
        assert_eq!(backwards.dt, 0.0);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            GameConfig::default(),
            Duration::from_millis(1),
            Arc::clone(&latest),
        )
        .unwrap();

        tx.send(GameLoopCommand::Input(InputFrame {
            right: true,
            ..Default::default()
        }))
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while latest.lock().unwrap().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().expect("no snapshot published");
        assert_eq!(snapshot.mode, FlockMode::RowDescent);
        assert!(snapshot.time.frame >= 1);
    }
}
