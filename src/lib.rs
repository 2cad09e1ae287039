//! Brickbreak - a Breakout-style block breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, per-frame update)
//! - `config`: Immutable game configuration constructed once at startup
//!
//! Rendering and input live outside this crate. A host samples its keys into
//! a [`sim::TickInput`], calls [`sim::tick`] once per rendered frame, and
//! draws the rectangle/color lists it reads back from
//! [`sim::GameState::snapshot`]. Nothing else crosses that boundary.

pub mod config;
pub mod sim;

pub use config::GameConfig;

/// Engine constants
pub mod consts {
    /// Simulation and render rate (frames per second)
    pub const TICK_RATE: u32 = 60;

    /// Edge length of the square play field (pixels)
    pub const FIELD_SIZE: f32 = 800.0;

    /// Block footprint within the layout grid
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 25.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 160.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the bottom edge of the field to the top of the paddle
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    pub const PADDLE_BASE_SPEED: f32 = 5.0;
    /// Speed gained per frame while a single direction is held
    pub const PADDLE_ACCEL: f32 = 0.5;
    pub const PADDLE_MAX_SPEED: f32 = 20.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Vertical launch speed of a fresh ball
    pub const BALL_FALL_SPEED: f32 = 8.0;
    /// Horizontal launch speed is drawn from -SPREAD..SPREAD
    pub const BALL_LAUNCH_SPREAD: i32 = 5;

    /// Power-up capsule defaults
    pub const POWERUP_SIZE: f32 = 25.0;
    pub const POWERUP_FALL_SPEED: f32 = 3.0;
    /// Independent drop probability per variant per destroyed block
    pub const POWERUP_DROP_CHANCE: f32 = 0.05;

    /// Frames after a paddle bounce during which the paddle cannot bounce again
    pub const PADDLE_HIT_COOLDOWN: u32 = 2;
    /// Frames after a block hit during which that block cannot be hit again
    pub const BLOCK_HIT_COOLDOWN: u32 = 4;

    /// Enlarge-paddle buff duration (seconds)
    pub const ENLARGE_DURATION_SECS: f32 = 5.0;
    /// Damage granted to every live ball by the extra-damage capsule
    pub const BOOSTED_DAMAGE: i32 = 5;
}
