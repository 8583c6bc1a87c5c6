//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`]. Only two event
//! kinds matter to the game (close requested and pointer released); restart and
//! resize are handled by the loop, and everything else is dropped here.

pub mod map;

pub use tui_memory_types as types;

pub use map::map_event;
