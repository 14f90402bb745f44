//! Full-session checks through the public API

use brick_drop::{GameConfig, GameEvent, PhysicsWorldController, Score};
use glam::Vec2;
use proptest::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn test_render_loop_session() {
    let mut game = PhysicsWorldController::default();
    let mut hits = 0;

    for _ in 0..(60 * 10) {
        if !game.ball_in_play() {
            game.launch_ball();
        }
        game.update(FRAME);
        hits += game
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickHit { .. }))
            .count() as u32;

        let p = game.get_object_positions();
        assert!(p.ball.x.is_finite() && p.ball.y.is_finite());
        assert_eq!(p.brick.pos(), Vec2::new(400.0, 550.0));
    }

    // Straight up from under the brick: every serve scores once the brick is up
    assert!(hits >= 2);
    assert_eq!(game.score().player, hits);
    assert_eq!(game.score().ai, 0);
}

#[test]
fn test_config_from_json_drives_world() {
    let config = GameConfig::from_json(
        r#"{
            "ball_pos": [200.0, 300.0],
            "player_pos": [200.0, 50.0],
            "brick_wait": 0.0
        }"#,
    )
    .unwrap();
    let mut game = PhysicsWorldController::new(config).unwrap();

    let p = game.get_object_positions();
    assert_eq!(p.ball.pos(), Vec2::new(200.0, 300.0));
    assert_eq!(p.player.pos(), Vec2::new(200.0, 50.0));

    game.update(FRAME);
    assert!(game.brick_visible());
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig {
        brick_size: Vec2::new(0.0, 10.0),
        ..GameConfig::default()
    };
    assert!(PhysicsWorldController::new(config).is_err());
}

#[test]
fn test_flat_buffer_tracks_bodies() {
    let mut game = PhysicsWorldController::default();
    game.move_player(-40.0);
    game.launch_ball();
    game.update(0.5);

    let p = game.get_object_positions();
    let floats = p.as_floats();
    assert_eq!(floats[0], p.ball.x);
    assert_eq!(floats[1], p.ball.y);
    assert_eq!(floats[3], 400.0);
    assert_eq!(floats[4], 550.0);
    assert_eq!(floats[6], 360.0);
    assert_eq!(floats[7], 100.0);
    assert_eq!(p.ball_outline(game.config().ball_render_segments).len(), 128);
}

#[test]
fn test_reset_clears_score() {
    let mut game = PhysicsWorldController::default();
    game.launch_ball();
    for _ in 0..120 {
        game.update(FRAME);
    }
    assert_eq!(game.score().player, 1);
    game.reset();
    assert_eq!(game.score(), Score::default());
    assert!(!game.brick_visible());
}

proptest! {
    #[test]
    fn prop_move_player_is_exact_or_clamped(deltas in prop::collection::vec(-500.0f32..500.0, 1..20)) {
        let mut game = PhysicsWorldController::default();
        let (min_x, max_x) = game.config().player_x_range();
        for delta in deltas {
            let before = game.get_object_positions().player;
            game.move_player(delta);
            let after = game.get_object_positions().player;

            let expected = (before.x + delta).clamp(min_x, max_x);
            prop_assert!((after.x - expected).abs() < 1e-3);
            prop_assert_eq!(after.y, before.y);
        }
    }

    #[test]
    fn prop_zero_step_after_step_is_noop(dt in 0.0f32..2.0, launch in any::<bool>()) {
        let mut game = PhysicsWorldController::default();
        if launch {
            game.launch_ball();
        }
        game.update(dt);
        let once = game.get_object_positions();
        let score = game.score();
        game.update(0.0);
        prop_assert_eq!(game.get_object_positions(), once);
        prop_assert_eq!(game.score(), score);
    }
}
