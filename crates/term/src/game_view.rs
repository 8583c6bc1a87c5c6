//! GameView: maps a `core::GameState` onto a terminal framebuffer.
//!
//! The game draws on a fixed logical surface (500x400 units by default). Each
//! terminal cell covers a block of `units_per_col x units_per_row` logical
//! units; the default 10x20 block compensates for the usual 1:2 glyph aspect
//! ratio and turns the surface into 50x20 cells, centered in the terminal.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::assets::AssetSet;
use crate::core::{GameState, Surface, TextRole};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Asset, Point, Rect, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const DESK: CellStyle = CellStyle::plain(Rgb::new(60, 60, 70), Rgb::new(18, 18, 24));
const BACKGROUND: CellStyle = CellStyle::plain(Rgb::WHITE, Rgb::BLACK);
const BORDER: CellStyle = CellStyle::plain(Rgb::new(150, 150, 160), Rgb::BLACK);
const SCORE: CellStyle = CellStyle::plain(Rgb::WHITE, Rgb::BLACK).bold();
const CAPTION: CellStyle = CellStyle::plain(Rgb::BLACK, Rgb::WHITE).bold();

/// Renders a game and maps pointer positions back onto its logical surface.
pub struct GameView {
    assets: AssetSet,
    surface_width: i32,
    surface_height: i32,
    units_per_col: i32,
    units_per_row: i32,
}

impl GameView {
    pub fn new(assets: AssetSet) -> Self {
        Self {
            assets,
            surface_width: WINDOW_WIDTH,
            surface_height: WINDOW_HEIGHT,
            units_per_col: 10,
            units_per_row: 20,
        }
    }

    /// Change how many logical units one terminal cell covers (clamped to >= 1).
    pub fn with_scale(mut self, units_per_col: i32, units_per_row: i32) -> Self {
        self.units_per_col = units_per_col.max(1);
        self.units_per_row = units_per_row.max(1);
        self
    }

    /// Size of the logical surface in terminal cells.
    pub fn surface_cells(&self) -> (u16, u16) {
        (
            clamp_u16(ceil_div(self.surface_width, self.units_per_col)),
            clamp_u16(ceil_div(self.surface_height, self.units_per_row)),
        )
    }

    /// Top-left terminal cell of the surface, centered in `viewport`.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.surface_cells();
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Logical point at the center of terminal cell (`column`, `row`).
    ///
    /// `None` when the cell lies outside the surface.
    pub fn point_at(&self, viewport: Viewport, column: u16, row: u16) -> Option<Point> {
        let (ox, oy) = self.origin(viewport);
        let (w, h) = self.surface_cells();
        let dx = column.checked_sub(ox).filter(|&d| d < w)?;
        let dy = row.checked_sub(oy).filter(|&d| d < h)?;
        Some(Point::new(
            i32::from(dx) * self.units_per_col + self.units_per_col / 2,
            i32::from(dy) * self.units_per_row + self.units_per_row / 2,
        ))
    }

    /// Render the game into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: DESK,
        });

        let (origin_x, origin_y) = self.origin(viewport);
        let mut surface = TermSurface {
            view: self,
            fb,
            origin_x,
            origin_y,
        };
        game.render(&mut surface);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    /// Terminal cell span `[start, end)` covering logical `[from, to)` on one axis.
    fn span(from: i32, to: i32, units: i32) -> (i32, i32) {
        (from.div_euclid(units), ceil_div(to, units))
    }
}

/// [`Surface`] over a framebuffer, clipped to the logical surface area.
struct TermSurface<'a> {
    view: &'a GameView,
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
}

impl TermSurface<'_> {
    /// Clip `rect` to the surface and convert it to (x, y, w, h) in terminal cells.
    fn cells(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let (cols, rows) = self.view.surface_cells();
        let (x0, x1) = GameView::span(rect.x, rect.right(), self.view.units_per_col);
        let (y0, y1) = GameView::span(rect.y, rect.bottom(), self.view.units_per_row);
        let (x0, x1) = (x0.max(0), x1.min(i32::from(cols)));
        let (y0, y1) = (y0.max(0), y1.min(i32::from(rows)));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((
            self.origin_x.saturating_add(clamp_u16(x0)),
            self.origin_y.saturating_add(clamp_u16(y0)),
            clamp_u16(x1 - x0),
            clamp_u16(y1 - y0),
        ))
    }
}

impl Surface for TermSurface<'_> {
    fn clear(&mut self) {
        let (w, h) = self.view.surface_cells();
        self.fb
            .fill_rect(self.origin_x, self.origin_y, w, h, ' ', BACKGROUND);
    }

    fn blit(&mut self, asset: Asset, rect: Rect) {
        let Some((x, y, w, h)) = self.cells(rect) else {
            return;
        };
        let art = self.view.assets.art(asset);
        let style = CellStyle::plain(art.fg, art.bg);
        self.fb.fill_rect(x, y, w, h, art.fill, style);
        if let Some(glyph) = art.glyph {
            self.fb
                .put_char(x.saturating_add(w / 2), y.saturating_add(h / 2), glyph, style.bold());
        }
    }

    fn outline(&mut self, rect: Rect, width: i32) {
        if width <= 0 {
            return;
        }
        if let Some((x, y, w, h)) = self.cells(rect) {
            self.fb.outline(x, y, w, h, BORDER);
        }
    }

    fn text(&mut self, text: &str, role: TextRole) {
        let (cols, rows) = self.view.surface_cells();
        match role {
            TextRole::Score => {
                let len = clamp_u16(text.chars().count() as i32);
                let x = self.origin_x.saturating_add(cols.saturating_sub(len));
                self.fb.put_str(x, self.origin_y, text, SCORE);
            }
            TextRole::Caption => {
                let padded = format!(" {text} ");
                let len = clamp_u16(padded.chars().count() as i32);
                let x = self.origin_x.saturating_add(cols.saturating_sub(len) / 2);
                let y = self.origin_y.saturating_add(rows / 2);
                self.fb.put_str(x, y, &padded, CAPTION);
            }
        }
    }
}

fn ceil_div(n: i32, d: i32) -> i32 {
    -((-n).div_euclid(d))
}

fn clamp_u16(v: i32) -> u16 {
    u16::try_from(v.max(0)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_div_rounds_up() {
        assert_eq!(ceil_div(500, 10), 50);
        assert_eq!(ceil_div(401, 20), 21);
        assert_eq!(ceil_div(0, 20), 0);
        assert_eq!(ceil_div(-5, 10), 0);
    }

    #[test]
    fn default_surface_is_50_by_20_cells() {
        let view = GameView::new(AssetSet::load(8).unwrap());
        assert_eq!(view.surface_cells(), (50, 20));
        assert_eq!(view.origin(Viewport::new(80, 24)), (15, 2));
        assert_eq!(view.origin(Viewport::new(40, 10)), (0, 0));
    }

    #[test]
    fn point_at_maps_cell_centers() {
        let view = GameView::new(AssetSet::load(8).unwrap());
        let vp = Viewport::new(50, 20);
        assert_eq!(view.point_at(vp, 0, 0), Some(Point::new(5, 10)));
        assert_eq!(view.point_at(vp, 49, 19), Some(Point::new(495, 390)));
        assert_eq!(view.point_at(vp, 50, 0), None);
        assert_eq!(view.point_at(vp, 0, 20), None);
    }

    #[test]
    fn point_at_accounts_for_centering() {
        let view = GameView::new(AssetSet::load(8).unwrap());
        let vp = Viewport::new(80, 24);
        assert_eq!(view.point_at(vp, 14, 5), None);
        assert_eq!(view.point_at(vp, 15, 2), Some(Point::new(5, 10)));
        assert_eq!(view.point_at(vp, 1, 1), None);
    }

    #[test]
    fn finer_scale_grows_surface_and_maps_back() {
        let view = GameView::new(AssetSet::load(8).unwrap()).with_scale(5, 10);
        assert_eq!(view.surface_cells(), (100, 40));

        let vp = Viewport::new(100, 40);
        assert_eq!(view.point_at(vp, 0, 0), Some(Point::new(2, 5)));
        assert_eq!(view.point_at(vp, 99, 39), Some(Point::new(497, 395)));
        assert_eq!(view.point_at(vp, 100, 0), None);
    }

    #[test]
    fn non_positive_scale_is_clamped() {
        let view = GameView::new(AssetSet::load(8).unwrap()).with_scale(0, -3);
        assert_eq!(view.surface_cells(), (500, 400));
    }
}
