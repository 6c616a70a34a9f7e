#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{InputFrame, TuningAdjustment};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{FrameSnapshot, PlayerView, TuningView};
    use crate::timed_state::TimedState;
    use crate::types::{FrameTime, Rect};

    // ---- Timed state ----

    #[test]
    fn test_timed_state_set_restarts_clock_on_change() {
        let mut state = TimedState::new(ProjectileState::Inactive, 1.0);
        assert!(state.set(ProjectileState::Active, 2.5));
        assert_eq!(state.value(), ProjectileState::Active);
        assert_eq!(state.start_time(), 2.5);
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_timed_state_reentry_does_not_reset_clock() {
        let mut state = TimedState::new(EnemyState::Dying, 1.0);
        state.tick(1.25);
        assert!(!state.set(EnemyState::Dying, 1.25));
        assert!(!state.set(EnemyState::Dying, 1.4));
        assert_eq!(state.start_time(), 1.0);
        state.tick(1.5);
        assert_eq!(state.elapsed(), 0.5);
    }

    #[test]
    fn test_timed_state_elapsed_never_negative() {
        let mut state = TimedState::new(PlayerState::Idle, 10.0);
        state.tick(9.0);
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_timed_state_elapsed_monotonic_within_occupancy() {
        let mut state = TimedState::new(PlayerState::Moving, 0.0);
        let mut last = 0.0;
        for i in 1..=20 {
            state.tick(i as f64 * 0.1);
            assert!(state.elapsed() >= last);
            last = state.elapsed();
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 1.0, 1.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_rect_from_center() {
        let r = Rect::from_center(Vec2::new(30.0, 30.0), Vec2::new(40.0, 20.0));
        assert_eq!(r, Rect::new(10.0, 20.0, 40.0, 20.0));
        assert_eq!(r.center(), Vec2::new(30.0, 30.0));
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.bottom(), 40.0);
    }

    #[test]
    fn test_rect_clamp_x_within() {
        let boundary = Rect::new(10.0, 10.0, 780.0, 740.0);
        let mut r = Rect::new(-5.0, 0.0, 50.0, 50.0);
        r.clamp_x_within(&boundary);
        assert_eq!(r.x, 10.0);
        r.x = 900.0;
        r.clamp_x_within(&boundary);
        assert_eq!(r.x, 740.0);
        r.x = 300.0;
        r.clamp_x_within(&boundary);
        assert_eq!(r.x, 300.0);
    }

    #[test]
    fn test_frame_time_advance() {
        let mut time = FrameTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.frame, 2);
        assert_eq!(time.now, 0.75);
        assert_eq!(time.dt, 0.25);
    }

    // ---- Enums ----

    #[test]
    fn test_move_direction_opposite() {
        assert_eq!(MoveDirection::Right.opposite(), MoveDirection::Left);
        assert_eq!(MoveDirection::Left.opposite(), MoveDirection::Right);
        assert_eq!(MoveDirection::Down.opposite(), MoveDirection::Down);
    }

    #[test]
    fn test_phase_terminal() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Cleared.is_terminal());
    }

    // ---- Input frames ----

    #[test]
    fn test_input_merge_keeps_latest_held_and_accumulates_edges() {
        let mut pending = InputFrame {
            left: true,
            tuning: vec![TuningAdjustment::increase(TuningParam::MaxHSpeed)],
            ..Default::default()
        };
        pending.merge(InputFrame {
            right: true,
            fire: true,
            tuning: vec![TuningAdjustment::decrease(TuningParam::MaxForce)],
            reseed_at: Some(Vec2::new(100.0, 50.0)),
            ..Default::default()
        });

        assert!(!pending.left);
        assert!(pending.right);
        assert!(pending.fire);
        assert_eq!(pending.tuning.len(), 2);
        assert_eq!(pending.reseed_at, Some(Vec2::new(100.0, 50.0)));

        pending.clear_edges();
        assert!(pending.tuning.is_empty());
        assert!(pending.reseed_at.is_none());
        assert!(pending.right, "held controls survive clear_edges");
    }

    #[test]
    fn test_input_frame_serde() {
        let input = InputFrame {
            left: true,
            fire: true,
            tuning: vec![TuningAdjustment::increase(TuningParam::AwarenessDistance)],
            reseed_at: Some(Vec2::new(10.0, 10.0)),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: InputFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }

    #[test]
    fn test_input_frame_edges_default_when_missing() {
        let back: InputFrame =
            serde_json::from_str(r#"{"left":false,"right":true,"fire":false}"#).unwrap();
        assert!(back.right);
        assert!(back.tuning.is_empty());
        assert!(back.reseed_at.is_none());
        assert!(!back.restart);
    }

    #[test]
    fn test_game_event_serde_is_tagged() {
        let event = GameEvent::EnemyHit {
            slot: 3,
            row: 0,
            score: 10,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"EnemyHit""#));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    // ---- Snapshot ----

    #[test]
    fn test_status_line_plain() {
        let snapshot = FrameSnapshot {
            player: PlayerView {
                lives: 3,
                score: 40,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(snapshot.status_line(), "Lives 3 Score 0040");
    }

    #[test]
    fn test_status_line_with_tuning() {
        let snapshot = FrameSnapshot {
            player: PlayerView {
                lives: 2,
                score: 120,
                ..Default::default()
            },
            tuning: Some(TuningView {
                max_h_speed: 150.0,
                max_v_speed: 500.0,
                awareness_distance: 40.0,
                max_force: 600.0,
            }),
            ..Default::default()
        };
        assert_eq!(
            snapshot.status_line(),
            "Lives 2 Score 0120 | H 150 V 500 Aware 40 Force 600"
        );
    }
}
