//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! from the game logic, the terminal renderer and the input mapper alike.
//!
//! # Logical Surface
//!
//! The game is laid out on a fixed logical surface, independent of the terminal
//! the renderer ends up drawing on:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WINDOW_WIDTH` | 500 | Logical surface width |
//! | `WINDOW_HEIGHT` | 400 | Logical surface height |
//! | `BOARD_SIZE` | 4 | Tiles per side (4x4 grid) |
//! | `TILE_WIDTH` | 100 | Logical tile width |
//! | `TILE_HEIGHT` | 100 | Logical tile height |
//! | `TILE_BORDER` | 5 | Border width drawn around every tile |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_RATE` | 60 | Target frames per second |
//! | `MISMATCH_DELAY_MS` | 500 | How long a mismatched pair stays visible |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Asset, FaceId, Point, Rect};
//!
//! let rect = Rect::new(100, 0, 100, 100);
//! assert!(rect.contains(Point::new(150, 50)));
//! assert!(!rect.contains(Point::new(200, 50)));
//!
//! assert_eq!(FaceId(0).asset_id(), "image1");
//! assert_eq!(Asset::Cover.id(), "image0");
//! ```

use std::fmt;

/// Logical surface width.
pub const WINDOW_WIDTH: i32 = 500;

/// Logical surface height.
pub const WINDOW_HEIGHT: i32 = 400;

/// Default number of tiles per board side.
pub const BOARD_SIZE: u8 = 4;

/// Default logical tile width.
pub const TILE_WIDTH: i32 = 100;

/// Default logical tile height.
pub const TILE_HEIGHT: i32 = 100;

/// Border width drawn around each tile, in logical units.
pub const TILE_BORDER: i32 = 5;

/// Target frame rate (frames per second).
pub const FRAME_RATE: u32 = 60;

/// Time a mismatched pair stays face up before flipping back.
pub const MISMATCH_DELAY_MS: u64 = 500;

/// Identifier of the shared cover image.
pub const COVER_ASSET_ID: &str = "image0";

/// Window caption.
pub const WINDOW_TITLE: &str = "Memory Game";

/// Caption drawn over the board once every pair has been found.
pub const WIN_CAPTION: &str = "YOU WIN!";

/// Frame duration in milliseconds for a given frame rate (never zero).
///
/// ```
/// use tui_memory_types::frame_ms;
///
/// assert_eq!(frame_ms(60), 16);
/// assert_eq!(frame_ms(0), 1000);
/// ```
pub fn frame_ms(fps: u32) -> u64 {
    (1000 / u64::from(fps.max(1))).max(1)
}


/// Logical identifier of the image a tile reveals.
///
/// Faces are compared by value; every face appears on exactly two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub u8);

impl FaceId {
    /// Asset identifier following the `image1`..`imageN` convention.
    pub fn asset_id(self) -> String {
        format!("image{}", u16::from(self.0) + 1)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "face#{}", self.0)
    }
}

/// Image to blit onto a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Shared cover shown while a tile is hidden.
    Cover,
    /// Face image shown once revealed.
    Face(FaceId),
}

impl Asset {
    /// Asset identifier (`image0` for the cover).
    pub fn id(self) -> String {
        match self {
            Asset::Cover => COVER_ASSET_ID.to_string(),
            Asset::Face(face) => face.asset_id(),
        }
    }
}

/// A point on the logical surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle on the logical surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True iff `p` lies inside the rectangle (right and bottom edges excluded).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Input events consumed by the game loop.
///
/// Pointer positions are terminal cells; the view maps them onto the logical
/// surface because only it knows where the surface sits in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close requested; ends the loop.
    CloseRequested,
    /// A pointer button was released over a terminal cell.
    PointerReleased { column: u16, row: u16 },
    /// Start a new game with a freshly shuffled board.
    Restart,
    /// Terminal was resized; the next frame must be a full redraw.
    Resized,
}
