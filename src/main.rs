//! Brickbreak entry point
//!
//! The real game embeds the sim behind a windowing/input adapter. Without
//! one, this binary runs a headless scripted session and logs how it went.

use std::time::{SystemTime, UNIX_EPOCH};

use brickbreak::GameConfig;
use brickbreak::sim::{GameState, LevelLayout, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let config = GameConfig::default();
    let layout = LevelLayout::standard();
    let mut state = GameState::new(config, &layout, seed);
    log::info!(
        "brickbreak starting (seed {seed}, {} blocks, {} ball)",
        state.blocks.len(),
        state.balls.len()
    );

    // Sweep the paddle side to side for thirty seconds of game time,
    // standing in for the input adapter.
    let frames = state.config.fps as u64 * 30;
    for frame in 0..frames {
        let right = (frame / state.config.fps as u64) % 2 == 0;
        let input = TickInput {
            left: !right,
            right,
        };
        tick(&mut state, &input);
    }

    let snapshot = state.snapshot();
    log::info!(
        "after {frames} frames: {} blocks left, {} balls, {} capsules in flight{}",
        snapshot.blocks.len(),
        snapshot.balls.len(),
        snapshot.powerups.len(),
        if state.cleared() { " - field cleared" } else { "" }
    );
}
