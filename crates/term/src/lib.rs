//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game draws through the core
//! `Surface` trait into a framebuffer, and the renderer flushes that
//! framebuffer to the terminal.
//!
//! - [`fb`]: styled character framebuffer
//! - [`assets`]: tile art catalog keyed by asset identifier
//! - [`game_view`]: `Surface` implementation, layout and pointer mapping
//! - [`renderer`]: terminal session lifecycle and diffed output

pub mod assets;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use assets::{load_art, AssetSet, TileArt, FACE_ASSET_COUNT};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
