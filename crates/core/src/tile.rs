//! Tile module - a single cell of the board
//!
//! A tile knows its rectangle, the face it hides and whether it is currently
//! hidden. It has no idea about pairing rules beyond comparing faces.

use crate::surface::Surface;
use crate::types::{Asset, FaceId, Point, Rect, TILE_BORDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    rect: Rect,
    face: FaceId,
    hidden: bool,
}

impl Tile {
    /// Create a hidden tile.
    pub fn new(rect: Rect, face: FaceId) -> Self {
        Self {
            rect,
            face,
            hidden: true,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn face(&self) -> FaceId {
        self.face
    }

    /// True iff `point` lies within the tile.
    pub fn hit_test(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn reveal(&mut self) {
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn faces_equal(&self, other: &Tile) -> bool {
        self.face == other.face
    }

    /// Image currently showing on this tile.
    pub fn visible_asset(&self) -> Asset {
        if self.hidden {
            Asset::Cover
        } else {
            Asset::Face(self.face)
        }
    }

    /// Draw the cover or the face, then the border on top.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.blit(self.visible_asset(), self.rect);
        surface.outline(self.rect, TILE_BORDER);
    }
}
