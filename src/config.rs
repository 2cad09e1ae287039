//! Game configuration
//!
//! One immutable struct constructed at startup and handed to the engine,
//! instead of module-level globals. `Default` reproduces the classic tuning.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Immutable game tuning, threaded into [`crate::sim::GameState`] once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play field width (pixels)
    pub field_width: f32,
    /// Play field height (pixels)
    pub field_height: f32,
    /// Frames per second; also the unit for all frame-counted timers
    pub fps: u32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the bottom edge of the field to the top of the paddle
    pub paddle_bottom_offset: f32,
    /// Speed the paddle returns to when no direction is held
    pub paddle_base_speed: f32,
    /// Speed gained per frame while a single direction is held
    pub paddle_accel: f32,
    pub paddle_max_speed: f32,

    // === Ball ===
    /// Balls are square; edge length in pixels
    pub ball_size: f32,
    /// Vertical launch speed of a fresh ball
    pub ball_fall_speed: f32,
    /// Horizontal launch speed is drawn from `-spread..spread`
    pub ball_launch_spread: i32,

    // === Blocks ===
    pub block_width: f32,
    pub block_height: f32,

    // === Power-ups ===
    /// Capsules are square; edge length in pixels
    pub powerup_size: f32,
    pub powerup_fall_speed: f32,
    /// Independent drop probability per variant per destroyed block
    pub powerup_drop_chance: f32,
    /// Enlarge-paddle buff duration (seconds)
    pub enlarge_duration_secs: f32,
    /// Damage granted to every live ball by the extra-damage capsule
    pub boosted_damage: i32,

    // === Collision guards ===
    /// Frames after a paddle bounce during which the paddle cannot bounce again
    pub paddle_hit_cooldown: u32,
    /// Frames after a block hit during which that block cannot be hit again
    pub block_hit_cooldown: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: consts::FIELD_SIZE,
            field_height: consts::FIELD_SIZE,
            fps: consts::TICK_RATE,

            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_bottom_offset: consts::PADDLE_BOTTOM_OFFSET,
            paddle_base_speed: consts::PADDLE_BASE_SPEED,
            paddle_accel: consts::PADDLE_ACCEL,
            paddle_max_speed: consts::PADDLE_MAX_SPEED,

            ball_size: consts::BALL_SIZE,
            ball_fall_speed: consts::BALL_FALL_SPEED,
            ball_launch_spread: consts::BALL_LAUNCH_SPREAD,

            block_width: consts::BLOCK_WIDTH,
            block_height: consts::BLOCK_HEIGHT,

            powerup_size: consts::POWERUP_SIZE,
            powerup_fall_speed: consts::POWERUP_FALL_SPEED,
            powerup_drop_chance: consts::POWERUP_DROP_CHANCE,
            enlarge_duration_secs: consts::ENLARGE_DURATION_SECS,
            boosted_damage: consts::BOOSTED_DAMAGE,

            paddle_hit_cooldown: consts::PADDLE_HIT_COOLDOWN,
            block_hit_cooldown: consts::BLOCK_HIT_COOLDOWN,
        }
    }
}

impl GameConfig {
    /// Enlarge-paddle buff duration in frames
    pub fn enlarge_frames(&self) -> i32 {
        (self.fps as f32 * self.enlarge_duration_secs) as i32
    }
}
