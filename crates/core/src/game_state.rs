//! Game state module - the turn state machine
//!
//! Ties the board to the selection buffer, the clock-driven score and the
//! win flag. The outer loop drives it once per frame:
//!
//! 1. [`GameState::handle_pointer_release`] for each pointer event
//! 2. [`GameState::render`]
//! 3. [`GameState::update`] then [`GameState::check_win`] while not won
//!
//! Time is always passed in as milliseconds on a monotonic clock, so the state
//! machine itself never reads a clock and stays deterministic under test.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::SetupResult;
use crate::rng::GameRng;
use crate::surface::{Surface, TextRole};
use crate::types::{Point, WIN_CAPTION};

/// Where the turn cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Accepting reveals.
    Playing,
    /// A mismatched pair is showing; it flips back once `deadline_ms` passes.
    AwaitingHide { deadline_ms: u64 },
    /// Every tile is revealed. Terminal.
    Won,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    /// Revealed tiles waiting to be compared (board indices, in click order).
    selection: ArrayVec<usize, 2>,
    phase: Phase,
    started_at_ms: u64,
    score: u32,
}

impl GameState {
    /// Start a game on a freshly shuffled board; `now_ms` is the clock origin.
    pub fn new(config: GameConfig, now_ms: u64) -> SetupResult<Self> {
        let mut rng = GameRng::new(config.seed);
        let board = Board::shuffled(&config, &mut rng)?;
        tracing::info!(
            seed = config.seed,
            size = config.board_size,
            "new memory game"
        );
        Ok(Self::from_parts(config, rng, board, now_ms))
    }

    /// Start a game on a prepared board.
    ///
    /// `config` still governs the mismatch delay and what [`GameState::restart`]
    /// builds next.
    pub fn with_board(board: Board, config: GameConfig, now_ms: u64) -> Self {
        Self::from_parts(config, GameRng::new(config.seed), board, now_ms)
    }

    fn from_parts(config: GameConfig, rng: GameRng, board: Board, now_ms: u64) -> Self {
        Self {
            config,
            rng,
            board,
            selection: ArrayVec::new(),
            phase: Phase::Playing,
            started_at_ms: now_ms,
            score: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Board indices revealed but not yet resolved.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Elapsed whole seconds as of the last update.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Reveal the first hidden tile under `point`.
    ///
    /// Returns the revealed tile's index. Does nothing once won, while a pair is
    /// waiting to be resolved, or when the point misses every hidden tile.
    pub fn handle_pointer_release(&mut self, point: Point) -> Option<usize> {
        if self.phase != Phase::Playing || self.selection.is_full() {
            return None;
        }

        let index = self.board.first_hidden_hit(point)?;
        let tile = self.board.tile_mut(index)?;
        tile.reveal();
        tracing::debug!(index, face = %tile.face(), "tile revealed");

        self.selection.push(index);
        Some(index)
    }

    /// Resolve a pending pair and advance the score.
    pub fn update(&mut self, now_ms: u64) {
        if self.phase == Phase::Won {
            return;
        }

        self.resolve_selection(now_ms);

        let elapsed_secs = now_ms.saturating_sub(self.started_at_ms) / 1000;
        self.score = u32::try_from(elapsed_secs).unwrap_or(u32::MAX);
    }

    fn resolve_selection(&mut self, now_ms: u64) {
        let (first, second) = match self.selection.as_slice() {
            &[a, b] => (a, b),
            _ => return,
        };

        match self.phase {
            Phase::Playing => {
                let tiles = self.board.tiles();
                if tiles[first].faces_equal(&tiles[second]) {
                    tracing::debug!(first, second, "pair matched");
                    self.selection.clear();
                } else if self.config.mismatch_delay_ms == 0 {
                    self.hide_selection();
                } else {
                    let deadline_ms = now_ms.saturating_add(self.config.mismatch_delay_ms);
                    tracing::debug!(first, second, deadline_ms, "pair mismatched");
                    self.phase = Phase::AwaitingHide { deadline_ms };
                }
            }
            Phase::AwaitingHide { deadline_ms } if now_ms >= deadline_ms => {
                self.hide_selection();
            }
            _ => {}
        }
    }

    fn hide_selection(&mut self) {
        for index in self.selection.drain(..) {
            if let Some(tile) = self.board.tile_mut(index) {
                tile.hide();
            }
        }
        self.phase = Phase::Playing;
    }

    /// Enter `Won` once every tile is revealed. Returns whether the game is won.
    pub fn check_win(&mut self) -> bool {
        if self.phase == Phase::Won {
            return true;
        }
        if self.selection.is_empty() && self.board.all_revealed() {
            self.phase = Phase::Won;
            tracing::info!(score = self.score, seed = self.rng.seed(), "board cleared");
            return true;
        }
        false
    }

    /// Throw the current board away and start over with a new shuffle.
    ///
    /// The RNG keeps its stream, so consecutive games get different layouts.
    /// On error the current game is left untouched.
    pub fn restart(&mut self, now_ms: u64) -> SetupResult<()> {
        let board = Board::shuffled(&self.config, &mut self.rng)?;
        self.board = board;
        self.selection.clear();
        self.phase = Phase::Playing;
        self.started_at_ms = now_ms;
        self.score = 0;
        tracing::info!("game restarted");
        Ok(())
    }

    /// Draw the board, the score and, once won, the caption.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear();
        for tile in self.board.tiles() {
            tile.draw(surface);
        }
        surface.text(&self.score.to_string(), TextRole::Score);
        if self.phase == Phase::Won {
            surface.text(WIN_CAPTION, TextRole::Caption);
        }
    }
}
