//! Drawing surface seam.
//!
//! The core decides *what* is drawn and where on the logical surface; a backend
//! (the terminal view, or a recorder in tests) decides how it looks.

use crate::types::{Asset, Rect};

/// Purpose of a piece of text. Backends pick font, size and color per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Elapsed seconds, anchored to the top-right corner.
    Score,
    /// Large caption centered on the surface.
    Caption,
}

/// Minimal drawing API the game renders through.
pub trait Surface {
    /// Fill the whole surface with the background color.
    fn clear(&mut self);

    /// Draw an image stretched over `rect`.
    fn blit(&mut self, asset: Asset, rect: Rect);

    /// Stroke the inside edge of `rect` with a border `width` units thick.
    fn outline(&mut self, rect: Rect, width: i32);

    /// Draw `text`, placed according to its role.
    fn text(&mut self, text: &str, role: TextRole);
}

/// Surface that records draw calls instead of drawing them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DrawOp {
    Clear,
    Blit(Asset, Rect),
    Outline(Rect, i32),
    Text(String, TextRole),
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn blit(&mut self, asset: Asset, rect: Rect) {
        self.ops.push(DrawOp::Blit(asset, rect));
    }

    fn outline(&mut self, rect: Rect, width: i32) {
        self.ops.push(DrawOp::Outline(rect, width));
    }

    fn text(&mut self, text: &str, role: TextRole) {
        self.ops.push(DrawOp::Text(text.to_string(), role));
    }
}
