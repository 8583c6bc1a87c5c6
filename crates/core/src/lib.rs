//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: board construction,
//! turn resolution and win detection. It has **no dependencies** on the
//! terminal, input devices or the wall clock:
//!
//! - **Deterministic**: the same seed produces the same board
//! - **Testable**: time is passed in, drawing goes through the [`Surface`] trait
//! - **Portable**: any backend that implements [`Surface`] can render a game
//!
//! # Module Structure
//!
//! - [`tile`]: one grid cell (rectangle, face, hidden flag)
//! - [`board`]: the square grid, shuffled pair placement and the pairing invariant
//! - [`game_state`]: selection buffer, mismatch timing, score and win state
//! - [`surface`]: the drawing seam used by [`GameState::render`]
//! - [`rng`]: seeded shuffling
//! - [`error`]: setup failures
//!
//! # Game Rules
//!
//! - The board holds `size² / 2` faces, each on exactly two tiles
//! - A click reveals the first hidden tile under the pointer; at most two tiles
//!   are pending at any time
//! - A matching pair stays revealed; a mismatched pair stays visible for the
//!   mismatch delay (500ms by default) and then flips back
//! - Score is whole seconds since the game started, frozen once every tile is
//!   revealed
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameConfig, GameState, Phase};
//! use tui_memory_types::Point;
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(7), 0).unwrap();
//!
//! // Reveal the top-left tile.
//! assert_eq!(game.handle_pointer_release(Point::new(50, 50)), Some(0));
//!
//! game.update(1_000);
//! assert_eq!(game.score(), 1);
//! assert!(!game.check_win());
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod surface;
pub mod tile;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::{SetupError, SetupResult};
pub use game_state::{GameState, Phase};
pub use rng::GameRng;
pub use surface::{Surface, TextRole};
pub use tile::Tile;
