//! Headless Brick Drop session
//!
//! Drives the controller the way a render loop would (input, update,
//! read positions) and logs what happens. Pass a JSON config path as the
//! first argument to override the defaults.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_drop::{GameConfig, GameEvent, PhysicsWorldController};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Drop (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut game = match PhysicsWorldController::new(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    const FRAME: f32 = 1.0 / 60.0;
    const FRAMES: u32 = 60 * 12;

    for frame in 0..FRAMES {
        // Scripted input: serve whenever the ball is parked, sweep the paddle
        if !game.ball_in_play() {
            game.launch_ball();
        }
        let sweep = (frame as f32 * FRAME * 2.0).sin() * 3.0;
        game.move_player(sweep);

        game.update(FRAME);

        for event in game.drain_events() {
            match event {
                GameEvent::BrickHit { player_score } => {
                    log::info!("frame {frame}: brick hit (player {player_score})")
                }
                GameEvent::BallLost { ai_score } => {
                    log::info!("frame {frame}: ball lost (AI {ai_score})")
                }
                other => log::debug!("frame {frame}: {other:?}"),
            }
        }

        if frame % 60 == 0 {
            let p = game.get_object_positions();
            log::info!(
                "t={:.2}s ball=({:.1}, {:.1}) brick=({:.1}, {:.1}){} player=({:.1}, {:.1})",
                game.elapsed(),
                p.ball.x,
                p.ball.y,
                p.brick.x,
                p.brick.y,
                if p.brick_visible { "" } else { " [hidden]" },
                p.player.x,
                p.player.y
            );
        }
    }

    let score = game.score();
    log::info!("Final score - Player: {} AI: {}", score.player, score.ai);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedders drive the library directly on wasm
}
