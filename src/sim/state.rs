//! Game state and core simulation types
//!
//! One `GameState` per session, mutated only inside the frame update.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::LevelLayout;
use super::rect::Rect;
use crate::config::GameConfig;

/// An RGB color handed to the render adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 128, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Width the rect returns to when the enlarge buff expires
    base_width: f32,
    /// Current horizontal speed magnitude
    pub speed: f32,
    /// Movement intent, sampled from the input adapter each frame
    pub moving_left: bool,
    pub moving_right: bool,
    /// Whether speed is currently building toward the cap
    accelerating: bool,
    /// Frames before the paddle can bounce a ball again
    pub hit_cooldown: u32,
    /// Frames left on the enlarge buff; -1 when idle
    pub effect_frames: i32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        let rect = Rect::new(
            config.field_width / 2.0 - config.paddle_width / 2.0,
            config.field_height - config.paddle_bottom_offset,
            config.paddle_width,
            config.paddle_height,
        );
        Self {
            rect,
            base_width: config.paddle_width,
            speed: config.paddle_base_speed,
            moving_left: false,
            moving_right: false,
            accelerating: false,
            hit_cooldown: 0,
            effect_frames: 0,
        }
    }

    pub fn base_width(&self) -> f32 {
        self.base_width
    }

    /// Advance position from the intent flags.
    ///
    /// Both directions held cancels acceleration; exactly one direction held
    /// moves the paddle (gated at the field edges) and builds speed toward
    /// the cap; neither held drops speed back to base.
    pub fn advance(&mut self, config: &GameConfig) {
        if self.moving_left && self.moving_right {
            self.accelerating = false;
        } else if self.moving_right {
            self.accelerating = true;
            if self.rect.pos.x <= config.field_width - self.rect.size.x {
                self.rect.pos.x += self.speed;
            }
        } else if self.moving_left {
            self.accelerating = true;
            if self.rect.pos.x >= 0.0 {
                self.rect.pos.x -= self.speed;
            }
        } else {
            self.accelerating = false;
        }

        if self.accelerating && self.speed <= config.paddle_max_speed {
            self.speed += config.paddle_accel;
        } else if !self.accelerating {
            self.speed = config.paddle_base_speed;
        }
    }

    /// Double the paddle width for `frames` frames.
    ///
    /// Widens to the right only; the width snaps back when the countdown
    /// reaches zero in [`Paddle::tick_timers`].
    pub fn enlarge(&mut self, frames: i32) {
        self.rect.size.x = self.base_width * 2.0;
        self.effect_frames = frames;
    }

    /// Age both countdowns by one frame.
    ///
    /// The base width is restored on exactly the frame the enlarge countdown
    /// reaches zero, never before. The countdown then parks at -1.
    pub fn tick_timers(&mut self) {
        if self.hit_cooldown > 0 {
            self.hit_cooldown -= 1;
        }
        if self.effect_frames > -1 {
            self.effect_frames -= 1;
        }
        if self.effect_frames == 0 {
            self.rect.size.x = self.base_width;
        }
    }
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    /// Hits for more than a block's health pierce instead of bouncing.
    /// Always >= 1.
    pub damage: i32,
    /// Frames before the ball may reflect off a wall again
    pub wall_cooldown: u32,
    /// Reserved for timed ball buffs; nothing ages it
    pub effect_frames: i32,
}

impl Ball {
    /// Spawn a ball at the field center, falling with a randomized
    /// horizontal component. A zero spread launches straight down.
    pub fn new(config: &GameConfig, rng: &mut Pcg32) -> Self {
        let center = Vec2::new(config.field_width / 2.0, config.field_height / 2.0);
        let spread = config.ball_launch_spread;
        let vx = if spread > 0 {
            rng.random_range(-spread..spread) as f32
        } else {
            0.0
        };
        Self {
            rect: Rect::centered_at(center, Vec2::splat(config.ball_size)),
            vel: Vec2::new(vx, config.ball_fall_speed),
            damage: 1,
            wall_cooldown: 0,
            effect_frames: 0,
        }
    }

    /// Apply the horizontal velocity component. The two axes advance and
    /// resolve collisions separately; that split is what tells a horizontal
    /// bounce from a vertical one.
    pub fn advance_x(&mut self) {
        self.rect.pos.x += self.vel.x;
    }

    /// Apply the vertical velocity component
    pub fn advance_y(&mut self) {
        self.rect.pos.y += self.vel.y;
    }

    /// Bounce off a vertical surface
    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Bounce off a horizontal surface
    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Reflect off the side walls and the ceiling. There is no floor: a ball
    /// that passes the paddle falls forever (no life/miss system).
    ///
    /// A grazing reflection that fails to clear the boundary by the next
    /// frame re-triggers here and leaves the ball jittering along the wall;
    /// the cooldown gate is checked but nothing arms it.
    pub fn wall_bounce(&mut self, config: &GameConfig) {
        if self.wall_cooldown == 0 {
            if self.rect.pos.x <= 0.0
                || self.rect.pos.x >= config.field_width - self.rect.size.x
            {
                self.reflect_x();
            }
            if self.rect.pos.y <= 0.0 {
                self.reflect_y();
            }
        }
    }

    /// Age the wall cooldown by one frame
    pub fn tick_timers(&mut self) {
        if self.wall_cooldown > 0 {
            self.wall_cooldown -= 1;
        }
    }
}

/// Starting strength of a block; one entity, tier-derived initial state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockTier {
    /// Breaks in one hit
    Standard,
    /// Tough block, two hits
    Tough,
    /// Reinforced tough block, three hits
    Reinforced,
}

impl BlockTier {
    /// Map a layout symbol to a tier. `'0'` (empty) maps to `None`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '1' => Some(BlockTier::Standard),
            '2' => Some(BlockTier::Tough),
            '3' => Some(BlockTier::Reinforced),
            _ => None,
        }
    }

    pub fn health(self) -> i32 {
        match self {
            BlockTier::Standard => 1,
            BlockTier::Tough => 2,
            BlockTier::Reinforced => 3,
        }
    }
}

/// Fixed health-to-color table. Zero and below map to a destroyed marker
/// color that is only visible transiently before removal.
pub fn color_for_health(health: i32) -> Color {
    match health {
        3 => Color::ORANGE,
        2 => Color::YELLOW,
        1 => Color::WHITE,
        _ => Color::BLACK,
    }
}

/// A breakable block
#[derive(Debug, Clone)]
pub struct Block {
    pub rect: Rect,
    pub health: i32,
    pub color: Color,
    /// Frames before this block can be hit again
    pub hit_cooldown: u32,
}

impl Block {
    pub fn new(tier: BlockTier, x: f32, y: f32, config: &GameConfig) -> Self {
        let health = tier.health();
        Self {
            rect: Rect::new(x, y, config.block_width, config.block_height),
            health,
            color: color_for_health(health),
            hit_cooldown: 0,
        }
    }

    /// Take a hit for `damage` and recolor from the health table
    pub fn hit_by(&mut self, damage: i32) {
        self.health -= damage;
        self.color = color_for_health(self.health);
    }

    /// Age the hit cooldown by one frame
    pub fn tick_cooldown(&mut self) {
        if self.hit_cooldown > 0 {
            self.hit_cooldown -= 1;
        }
    }
}

/// Power-up variants, dispatched by tag in the frame update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Spawn a fresh ball at the field center
    ExtraBall,
    /// Double the paddle width for a few seconds
    EnlargePaddle,
    /// Set every live ball's damage to the boosted value
    ExtraDamage,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::ExtraBall,
        PowerUpKind::EnlargePaddle,
        PowerUpKind::ExtraDamage,
    ];

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::ExtraBall => Color::GREEN,
            PowerUpKind::EnlargePaddle => Color::BLUE,
            PowerUpKind::ExtraDamage => Color::RED,
        }
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub rect: Rect,
}

impl PowerUp {
    /// Spawn a capsule at a destroyed block's position
    pub fn new(kind: PowerUpKind, pos: Vec2, config: &GameConfig) -> Self {
        Self {
            kind,
            rect: Rect::new(pos.x, pos.y, config.powerup_size, config.powerup_size),
        }
    }

    /// Fall one frame. Uncollected capsules fall past the field edge and are
    /// never cleaned up.
    pub fn advance(&mut self, config: &GameConfig) {
        self.rect.pos.y += config.powerup_fall_speed;
    }
}

/// A rectangle + color pair for the render adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRect {
    pub rect: Rect,
    pub color: Color,
}

/// Everything the render adapter needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub paddle: DrawRect,
    pub balls: Vec<DrawRect>,
    pub blocks: Vec<DrawRect>,
    pub powerups: Vec<DrawRect>,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Immutable tuning, fixed at construction
    pub config: GameConfig,
    /// Session seed, for reproducing a run
    pub seed: u64,
    /// Frames simulated so far
    pub frame: u64,
    pub paddle: Paddle,
    /// Balls are never removed; power-ups only add more
    pub balls: Vec<Ball>,
    /// Live blocks; removed permanently at zero health
    pub blocks: Vec<Block>,
    /// Capsules currently falling
    pub powerups: Vec<PowerUp>,
    /// Single shared RNG for drop rolls and launch velocities
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build a session: paddle at the bottom, one ball at the center, blocks
    /// from the layout, and a seeded RNG.
    pub fn new(config: GameConfig, layout: &LevelLayout, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(&config);
        let balls = vec![Ball::new(&config, &mut rng)];
        let blocks = layout.spawn_blocks(&config);
        Self {
            config,
            seed,
            frame: 0,
            paddle,
            balls,
            blocks,
            powerups: Vec::new(),
            rng,
        }
    }

    /// True once every block has been destroyed
    pub fn cleared(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Snapshot the current entities for rendering
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            paddle: DrawRect {
                rect: self.paddle.rect,
                color: Color::WHITE,
            },
            balls: self
                .balls
                .iter()
                .map(|b| DrawRect {
                    rect: b.rect,
                    color: Color::WHITE,
                })
                .collect(),
            blocks: self
                .blocks
                .iter()
                .map(|b| DrawRect {
                    rect: b.rect,
                    color: b.color,
                })
                .collect(),
            powerups: self
                .powerups
                .iter()
                .map(|p| DrawRect {
                    rect: p.rect,
                    color: p.kind.color(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_color_table() {
        assert_eq!(color_for_health(3), Color::ORANGE);
        assert_eq!(color_for_health(2), Color::YELLOW);
        assert_eq!(color_for_health(1), Color::WHITE);
        assert_eq!(color_for_health(0), Color::BLACK);
        assert_eq!(color_for_health(-4), Color::BLACK);
    }

    #[test]
    fn test_ball_spawns_centered_with_unit_damage() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let ball = Ball::new(&config, &mut rng);
            assert_eq!(ball.damage, 1);
            assert_eq!(ball.rect.center(), Vec2::new(400.0, 400.0));
            assert!(ball.vel.x >= -5.0 && ball.vel.x < 5.0);
            assert_eq!(ball.vel.y, config.ball_fall_speed);
        }
    }

    #[test]
    fn test_ball_spawns_straight_down_with_zero_spread() {
        let config = GameConfig {
            ball_launch_spread: 0,
            ..config()
        };
        let mut rng = Pcg32::seed_from_u64(7);
        let ball = Ball::new(&config, &mut rng);
        assert_eq!(ball.vel, Vec2::new(0.0, config.ball_fall_speed));
    }

    #[test]
    fn test_paddle_accelerates_to_cap_and_resets() {
        let config = config();
        let mut paddle = Paddle::new(&config);
        paddle.moving_right = true;
        for _ in 0..200 {
            paddle.advance(&config);
        }
        assert!(paddle.speed > config.paddle_max_speed);
        assert!(paddle.speed <= config.paddle_max_speed + config.paddle_accel);

        paddle.moving_right = false;
        paddle.advance(&config);
        assert_eq!(paddle.speed, config.paddle_base_speed);
    }

    #[test]
    fn test_paddle_both_directions_cancel() {
        let config = config();
        let mut paddle = Paddle::new(&config);
        let start_x = paddle.rect.pos.x;
        paddle.moving_left = true;
        paddle.moving_right = true;
        for _ in 0..10 {
            paddle.advance(&config);
        }
        assert_eq!(paddle.rect.pos.x, start_x);
        assert_eq!(paddle.speed, config.paddle_base_speed);
    }

    #[test]
    fn test_enlarge_restores_exactly_at_zero() {
        let config = config();
        let mut paddle = Paddle::new(&config);
        let base = paddle.base_width();
        paddle.enlarge(3);
        assert_eq!(paddle.rect.size.x, base * 2.0);

        paddle.tick_timers(); // 3 -> 2
        paddle.tick_timers(); // 2 -> 1
        assert_eq!(paddle.rect.size.x, base * 2.0);
        paddle.tick_timers(); // 1 -> 0, restore
        assert_eq!(paddle.rect.size.x, base);
        assert_eq!(paddle.effect_frames, 0);
        paddle.tick_timers(); // parks at -1
        assert_eq!(paddle.effect_frames, -1);
        assert_eq!(paddle.rect.size.x, base);
    }

    #[test]
    fn test_idle_effect_timer_never_fires_at_start() {
        let config = config();
        let mut paddle = Paddle::new(&config);
        for _ in 0..5 {
            paddle.tick_timers();
        }
        assert_eq!(paddle.effect_frames, -1);
        assert_eq!(paddle.rect.size.x, paddle.base_width());
    }

    #[test]
    fn test_wall_bounce_left_wall() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(&config, &mut rng);
        ball.rect.pos = Vec2::new(0.0, 400.0);
        ball.vel = Vec2::new(-5.0, 8.0);
        ball.wall_bounce(&config);
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_wall_bounce_ceiling_and_right_wall() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(&config, &mut rng);

        ball.rect.pos = Vec2::new(400.0, -1.0);
        ball.vel = Vec2::new(2.0, -8.0);
        ball.wall_bounce(&config);
        assert_eq!(ball.vel.y, 8.0);

        ball.rect.pos = Vec2::new(config.field_width - config.ball_size, 400.0);
        ball.vel = Vec2::new(4.0, 8.0);
        ball.wall_bounce(&config);
        assert_eq!(ball.vel.x, -4.0);
    }

    #[test]
    fn test_no_floor_bounce() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(&config, &mut rng);
        ball.rect.pos = Vec2::new(400.0, config.field_height + 500.0);
        ball.vel = Vec2::new(0.0, 8.0);
        ball.wall_bounce(&config);
        assert_eq!(ball.vel.y, 8.0);
    }

    #[test]
    fn test_block_hit_recolors() {
        let config = config();
        let mut block = Block::new(BlockTier::Reinforced, 0.0, 0.0, &config);
        assert_eq!(block.color, Color::ORANGE);
        block.hit_by(1);
        assert_eq!(block.health, 2);
        assert_eq!(block.color, Color::YELLOW);
        block.hit_by(1);
        assert_eq!(block.color, Color::WHITE);
        block.hit_by(5);
        assert_eq!(block.health, -4);
        assert_eq!(block.color, Color::BLACK);
    }

    #[test]
    fn test_snapshot_colors() {
        let config = config();
        let layout = LevelLayout::standard();
        let state = GameState::new(config, &layout, 42);
        let snap = state.snapshot();
        assert_eq!(snap.paddle.color, Color::WHITE);
        assert_eq!(snap.balls.len(), 1);
        assert_eq!(snap.blocks.len(), state.blocks.len());
        assert!(snap.blocks.iter().all(|b| b.color != Color::BLACK));
    }
}
