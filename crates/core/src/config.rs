//! Game configuration.

use crate::types::{BOARD_SIZE, MISMATCH_DELAY_MS, TILE_HEIGHT, TILE_WIDTH};

/// Parameters a game is built from.
///
/// The defaults describe the standard 4x4 game. Board size is validated when the
/// board is built, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Tiles per board side.
    pub board_size: u8,
    /// Logical tile width.
    pub tile_width: i32,
    /// Logical tile height.
    pub tile_height: i32,
    /// How long a mismatched pair stays visible. Zero hides it in the same update.
    pub mismatch_delay_ms: u64,
    /// Shuffle seed.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_board_size(mut self, board_size: u8) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_mismatch_delay_ms(mut self, mismatch_delay_ms: u64) -> Self {
        self.mismatch_delay_ms = mismatch_delay_ms;
        self
    }

    /// Number of distinct faces the board needs (`size² / 2`).
    pub fn pair_count(&self) -> usize {
        let n = usize::from(self.board_size);
        n * n / 2
    }
}
