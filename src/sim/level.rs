//! Level layouts
//!
//! A layout is an ordered grid of tier symbols (`0` empty, `1`/`2`/`3`
//! block tiers), consumed once at session start to populate the block
//! collection. Immutable afterward.

use serde::{Deserialize, Serialize};

use super::state::{Block, BlockTier};
use crate::config::GameConfig;

/// A block layout: rows of tier symbols plus a stagger flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Rows of tier symbols, top row first
    pub rows: Vec<String>,
    /// Offset odd rows half a block left, brick-wall style
    pub stagger: bool,
}

impl LevelLayout {
    /// The standard layout: a five-row band of standard blocks with tough
    /// pairs mid-row and a reinforced pair at the core, leaving four empty
    /// rows above the paddle's half of the field.
    pub fn standard() -> Self {
        Self {
            rows: vec![
                "0000000000".into(),
                "0000000000".into(),
                "0000000000".into(),
                "0000000000".into(),
                "0011111100".into(),
                "0112112110".into(),
                "0011331100".into(),
                "0112112110".into(),
                "0011111100".into(),
            ],
            stagger: false,
        }
    }

    /// Build the initial block collection. Grid cell (x, y) maps to pixel
    /// position (x * block_width, y * block_height), with odd rows shifted
    /// half a block left when staggered.
    pub fn spawn_blocks(&self, config: &GameConfig) -> Vec<Block> {
        let mut blocks = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                let mut grid_x = x as f32;
                if self.stagger && y % 2 == 1 {
                    grid_x -= 0.5;
                }
                match BlockTier::from_symbol(symbol) {
                    Some(tier) => blocks.push(Block::new(
                        tier,
                        grid_x * config.block_width,
                        y as f32 * config.block_height,
                        config,
                    )),
                    None => {
                        if symbol != '0' {
                            log::warn!("ignoring unknown layout symbol {symbol:?} at ({x}, {y})");
                        }
                    }
                }
            }
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Color;

    #[test]
    fn test_standard_layout_block_census() {
        let config = GameConfig::default();
        let blocks = LevelLayout::standard().spawn_blocks(&config);
        // 28 standard + 4 tough + 2 reinforced
        assert_eq!(blocks.len(), 34);
        assert_eq!(blocks.iter().filter(|b| b.health == 1).count(), 28);
        assert_eq!(blocks.iter().filter(|b| b.health == 2).count(), 4);
        assert_eq!(blocks.iter().filter(|b| b.health == 3).count(), 2);
    }

    #[test]
    fn test_tier_colors_at_spawn() {
        let config = GameConfig::default();
        let blocks = LevelLayout::standard().spawn_blocks(&config);
        assert!(blocks.iter().all(|b| match b.health {
            1 => b.color == Color::WHITE,
            2 => b.color == Color::YELLOW,
            3 => b.color == Color::ORANGE,
            _ => false,
        }));
    }

    #[test]
    fn test_block_positions_follow_grid() {
        let config = GameConfig::default();
        let layout = LevelLayout {
            rows: vec!["01".into()],
            stagger: false,
        };
        let blocks = layout.spawn_blocks(&config);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].rect.pos.x, config.block_width);
        assert_eq!(blocks[0].rect.pos.y, 0.0);
        assert_eq!(blocks[0].rect.size.x, config.block_width);
        assert_eq!(blocks[0].rect.size.y, config.block_height);
    }

    #[test]
    fn test_stagger_offsets_odd_rows_only() {
        let config = GameConfig::default();
        let layout = LevelLayout {
            rows: vec!["1".into(), "1".into(), "1".into()],
            stagger: true,
        };
        let blocks = layout.spawn_blocks(&config);
        assert_eq!(blocks[0].rect.pos.x, 0.0);
        assert_eq!(blocks[1].rect.pos.x, -0.5 * config.block_width);
        assert_eq!(blocks[2].rect.pos.x, 0.0);
    }
}
