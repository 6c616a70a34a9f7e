//! Scripted input source for the headless demo.
//!
//! Reads the last snapshot and holds the keys a player would: slide under
//! the lowest enemy and fire whenever the projectile is free.

use invaders_core::commands::InputFrame;
use invaders_core::enums::{EnemyState, ProjectileState};
use invaders_core::state::{EnemyView, FrameSnapshot};

/// Horizontal slack (px) before the autopilot bothers moving.
pub const AIM_DEADBAND: f32 = 4.0;

/// Input for the frame after `snapshot`.
pub fn steer(snapshot: &FrameSnapshot) -> InputFrame {
    if snapshot.phase.is_terminal() {
        return InputFrame::default();
    }

    let player_x = snapshot.player.body.center().x;
    let Some(target) = pick_target(&snapshot.enemies, player_x) else {
        return InputFrame::default();
    };

    let offset = target.center.x - player_x;
    let aligned = offset.abs() <= target.body.width / 2.0;
    InputFrame {
        left: offset < -AIM_DEADBAND,
        right: offset > AIM_DEADBAND,
        fire: aligned && snapshot.projectile.state == ProjectileState::Inactive,
        ..Default::default()
    }
}

/// The active enemy closest to the ground, nearest the player on ties.
fn pick_target(enemies: &[EnemyView], player_x: f32) -> Option<&EnemyView> {
    enemies
        .iter()
        .filter(|enemy| enemy.state == EnemyState::Active)
        .min_by(|a, b| {
            b.body
                .bottom()
                .total_cmp(&a.body.bottom())
                .then_with(|| {
                    let da = (a.center.x - player_x).abs();
                    let db = (b.center.x - player_x).abs();
                    da.total_cmp(&db)
                })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use invaders_core::enums::{GamePhase, MoveDirection};
    use invaders_core::state::{PlayerView, ProjectileView};
    use invaders_core::types::Rect;

    fn enemy(slot: usize, center: Vec2, state: EnemyState) -> EnemyView {
        EnemyView {
            slot,
            row: 0,
            body: Rect::from_center(center, Vec2::splat(40.0)),
            center,
            state,
            dir: MoveDirection::Right,
        }
    }

    fn snapshot_with(player_x: f32, enemies: Vec<EnemyView>) -> FrameSnapshot {
        FrameSnapshot {
            player: PlayerView {
                body: Rect::new(player_x, 700.0, 50.0, 50.0),
                lives: 3,
                ..Default::default()
            },
            projectile: ProjectileView::default(),
            enemies,
            ..Default::default()
        }
    }

    #[test]
    fn test_moves_toward_lowest_enemy() {
        let snapshot = snapshot_with(
            10.0,
            vec![
                enemy(1, Vec2::new(60.0, 30.0), EnemyState::Active),
                enemy(12, Vec2::new(400.0, 92.0), EnemyState::Active),
            ],
        );

        let input = steer(&snapshot);
        assert!(input.right);
        assert!(!input.left);
        assert!(!input.fire);
    }

    #[test]
    fn test_fires_when_aligned_and_free() {
        let snapshot = snapshot_with(
            375.0,
            vec![enemy(12, Vec2::new(402.0, 92.0), EnemyState::Active)],
        );

        let input = steer(&snapshot);
        assert!(input.fire);
        assert!(!input.left && !input.right);
    }

    #[test]
    fn test_holds_fire_while_projectile_busy() {
        let mut snapshot = snapshot_with(
            375.0,
            vec![enemy(12, Vec2::new(400.0, 92.0), EnemyState::Active)],
        );
        snapshot.projectile.state = ProjectileState::Exploding;

        assert!(!steer(&snapshot).fire);
    }

    #[test]
    fn test_ignores_dying_enemies() {
        let snapshot = snapshot_with(
            375.0,
            vec![
                enemy(40, Vec2::new(100.0, 300.0), EnemyState::Dying),
                enemy(12, Vec2::new(400.0, 92.0), EnemyState::Active),
            ],
        );

        let input = steer(&snapshot);
        assert!(!input.left);
        assert!(input.fire);
    }

    #[test]
    fn test_idle_when_game_over() {
        let mut snapshot = snapshot_with(
            375.0,
            vec![enemy(12, Vec2::new(400.0, 92.0), EnemyState::Active)],
        );
        snapshot.phase = GamePhase::GameOver;

        assert_eq!(steer(&snapshot), InputFrame::default());
    }
}
