//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped only (one update per rendered frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host drives it through [`tick`] and reads entities back through
//! [`GameState::snapshot`].

pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use level::LevelLayout;
pub use rect::Rect;
pub use state::{
    Ball, Block, BlockTier, Color, DrawRect, FrameSnapshot, GameState, Paddle, PowerUp, PowerUpKind,
};
pub use tick::{TickInput, tick};
