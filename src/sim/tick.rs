//! Per-frame simulation update
//!
//! One call to [`tick`] advances the whole simulation by exactly one frame.
//! The ordering inside is load-bearing: each ball resolves its X movement
//! (paddle, then blocks) before its Y movement, which is what distinguishes
//! horizontal bounces from vertical ones.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Ball, Block, GameState, Paddle, PowerUp, PowerUpKind};
use crate::config::GameConfig;

/// Movement intent for a single frame, sampled once by the input adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Which movement axis a collision pass is resolving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Advance the game state by one frame.
///
/// Order per frame:
/// 1. paddle advances from the intent flags;
/// 2. each ball, independently: X advance, paddle bounce, block pass;
///    Y advance, paddle bounce, block pass (which also ages every block's
///    hit cooldown); wall bounce; own timers;
/// 3. power-ups fall and apply on paddle contact;
/// 4. paddle timers age.
pub fn tick(state: &mut GameState, input: &TickInput) {
    let GameState {
        config,
        paddle,
        balls,
        blocks,
        powerups,
        rng,
        frame,
        ..
    } = state;

    paddle.moving_left = input.left;
    paddle.moving_right = input.right;
    paddle.advance(config);

    for ball in balls.iter_mut() {
        ball.advance_x();
        paddle_bounce(ball, paddle, Axis::X, config);
        block_pass(ball, blocks, powerups, rng, Axis::X, config);

        ball.advance_y();
        paddle_bounce(ball, paddle, Axis::Y, config);
        block_pass(ball, blocks, powerups, rng, Axis::Y, config);

        ball.wall_bounce(config);
        ball.tick_timers();
    }

    for powerup in powerups.iter_mut() {
        powerup.advance(config);
    }
    // Collect first, remove, then apply: no index skips while the
    // collection shrinks, and each capsule applies exactly once.
    let mut collected: Vec<PowerUpKind> = Vec::new();
    powerups.retain(|p| {
        if p.rect.overlaps(&paddle.rect) {
            collected.push(p.kind);
            false
        } else {
            true
        }
    });
    for kind in collected {
        apply_powerup(kind, paddle, balls, rng, config);
    }

    paddle.tick_timers();
    *frame += 1;
}

/// Bounce a ball off the paddle on one axis.
///
/// The cooldown window lives on the paddle, not on the pair: with several
/// balls arriving within the same two frames, the first one wins and the
/// rest pass through.
fn paddle_bounce(ball: &mut Ball, paddle: &mut Paddle, axis: Axis, config: &GameConfig) {
    if paddle.hit_cooldown > 0 || !ball.rect.overlaps(&paddle.rect) {
        return;
    }
    // A moving paddle transfers spin; the Y pass gets a much smaller nudge.
    let spin = match axis {
        Axis::X => {
            ball.reflect_x();
            paddle.speed
        }
        Axis::Y => {
            ball.reflect_y();
            paddle.speed * 0.1
        }
    };
    paddle.hit_cooldown = config.paddle_hit_cooldown;
    if paddle.moving_right {
        ball.vel.x += spin;
    } else if paddle.moving_left {
        ball.vel.x -= spin;
    }
}

/// Resolve one ball against every live block on one axis.
///
/// A hit with damage at most the block's health reflects the ball; more
/// damage pierces, spending damage equal to the block's remaining health.
/// Either way the block takes the (possibly reduced) damage, recolors, and
/// becomes unhittable for a few frames. The Y pass also ages every block's
/// cooldown, once per ball per frame.
fn block_pass(
    ball: &mut Ball,
    blocks: &mut Vec<Block>,
    powerups: &mut Vec<PowerUp>,
    rng: &mut Pcg32,
    axis: Axis,
    config: &GameConfig,
) {
    let mut destroyed_at: Vec<Vec2> = Vec::new();
    for block in blocks.iter_mut() {
        if block.health > 0 && block.hit_cooldown == 0 && ball.rect.overlaps(&block.rect) {
            if ball.damage <= block.health {
                match axis {
                    Axis::X => ball.reflect_x(),
                    Axis::Y => ball.reflect_y(),
                }
            } else {
                // Piercing: pass through without reflecting. Damage stays
                // >= 1 because it only drops when it exceeds the health.
                ball.damage -= block.health;
            }
            block.hit_by(ball.damage);
            block.hit_cooldown = config.block_hit_cooldown;
            if block.health <= 0 {
                destroyed_at.push(block.rect.pos);
            }
        }
        if axis == Axis::Y {
            block.tick_cooldown();
        }
    }

    // Deferred removal: destroyed blocks drop out after the pass, so the
    // iteration above never skips a neighbor.
    if !destroyed_at.is_empty() {
        blocks.retain(|b| b.health > 0);
        for pos in destroyed_at {
            log::debug!("block destroyed at ({}, {})", pos.x, pos.y);
            roll_powerups(pos, powerups, rng, config);
        }
    }
}

/// Roll each power-up variant independently for a destroyed block. Several
/// variants can succeed at once and drop on top of each other.
fn roll_powerups(pos: Vec2, powerups: &mut Vec<PowerUp>, rng: &mut Pcg32, config: &GameConfig) {
    for kind in PowerUpKind::ALL {
        if rng.random::<f32>() <= config.powerup_drop_chance {
            log::debug!("{kind:?} capsule dropped at ({}, {})", pos.x, pos.y);
            powerups.push(PowerUp::new(kind, pos, config));
        }
    }
}

/// Apply a collected capsule to its target set
fn apply_powerup(
    kind: PowerUpKind,
    paddle: &mut Paddle,
    balls: &mut Vec<Ball>,
    rng: &mut Pcg32,
    config: &GameConfig,
) {
    log::debug!("collected {kind:?}");
    match kind {
        PowerUpKind::ExtraBall => balls.push(Ball::new(config, rng)),
        PowerUpKind::EnlargePaddle => paddle.enlarge(config.enlarge_frames()),
        PowerUpKind::ExtraDamage => {
            // Only balls alive right now; later spawns start back at 1.
            for ball in balls.iter_mut() {
                ball.damage = config.boosted_damage;
            }
        }
    }
}
