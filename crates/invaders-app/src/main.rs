use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use invaders_app::autopilot;
use invaders_app::config;
use invaders_app::game_loop;
use invaders_app::state::{AppState, GameLoopCommand};
use invaders_app::trace_canvas::TraceCanvas;
use invaders_sim::render;

/// Render one frame in this many through the trace canvas.
const TRACE_EVERY_FRAMES: u64 = 60;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> std::io::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let game_config = config::game_config();
    let frame_duration = config::frame_duration();
    let demo_duration = config::demo_duration();
    info!(
        mode = ?game_config.mode,
        rows = game_config.rows,
        cols = game_config.cols,
        fps = config::target_fps(),
        demo_secs = demo_duration.as_secs(),
        "starting headless demo"
    );

    let state = AppState::new();
    let (command_tx, handle) = game_loop::spawn_game_loop(
        game_config,
        frame_duration,
        Arc::clone(&state.latest_snapshot),
    )?;
    if let Ok(mut tx) = state.command_tx.lock() {
        *tx = Some(command_tx);
    }

    let deadline = Instant::now() + demo_duration;
    let mut last_traced = 0;
    while Instant::now() < deadline {
        std::thread::sleep(frame_duration);
        let Some(snapshot) = state.latest() else {
            continue;
        };
        if snapshot.phase.is_terminal() {
            info!(phase = ?snapshot.phase, frame = snapshot.time.frame, "game finished");
            break;
        }

        if snapshot.time.frame >= last_traced + TRACE_EVERY_FRAMES {
            let mut canvas = TraceCanvas::new();
            render::render(&snapshot, &mut canvas);
            canvas.finish(snapshot.time.frame);
            last_traced = snapshot.time.frame;
        }

        if !state.send(GameLoopCommand::Input(autopilot::steer(&snapshot))) {
            warn!("game loop hung up");
            break;
        }
    }

    state.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        error!("game loop thread panicked");
    }

    match state.latest() {
        Some(snapshot) => {
            info!(
                phase = ?snapshot.phase,
                score = snapshot.player.score,
                lives = snapshot.player.lives,
                enemies_left = snapshot.enemies.len(),
                status = %snapshot.status_line(),
                "final state"
            );
            match serde_json::to_string(&snapshot) {
                Ok(json) => info!(bytes = json.len(), snapshot = %json, "final snapshot"),
                Err(e) => error!(error = %e, "failed to serialize final snapshot"),
            }
        }
        None => warn!("no frame was simulated"),
    }

    Ok(())
}
