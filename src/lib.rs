//! TUI Memory (workspace facade crate).
//!
//! Re-exports the member crates as `tui_memory::{core,input,term,types}` and adds
//! the application layer: environment configuration, log setup and the
//! [`app::Context`] that owns the terminal and the clock for the game loop.

pub mod app;
pub mod config;
pub mod logging;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
