//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use invaders_core::commands::InputFrame;
use invaders_core::state::FrameSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Input sampled by the driver. Held keys replace the previous sample;
    /// edge presses accumulate until the next frame consumes them.
    Input(InputFrame),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop thread.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

pub struct AppState {
    /// Channel sender to the game loop thread. `None` until it is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each frame.
    pub latest_snapshot: SharedSnapshot,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the most recent snapshot, if any frame has run yet.
    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }

    /// Forward a command to the game loop. Returns `false` when the loop is
    /// not running or has hung up.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(tx) = self.command_tx.lock() else {
            return false;
        };
        match tx.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest().is_none());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send(GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_send_reaches_receiver() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(GameLoopCommand::Input(InputFrame {
            fire: true,
            ..Default::default()
        })));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::Input(InputFrame { fire: true, .. }))
        ));

        drop(rx);
        assert!(!state.send(GameLoopCommand::Shutdown));
    }
}
