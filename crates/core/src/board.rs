//! Board module - the grid of tiles
//!
//! The board is a square `size x size` grid stored as a flat, row-major vector.
//! Coordinates: (row, col) with row 0 at the top; tile (row, col) sits at logical
//! position `(col * tile_width, row * tile_height)`.
//!
//! Every board upholds the pairing invariant: each of the `size² / 2` faces
//! appears on exactly two tiles. Construction fails rather than produce a board
//! that breaks it.

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::error::{SetupError, SetupResult};
use crate::rng::GameRng;
use crate::tile::Tile;
use crate::types::{FaceId, Point, Rect};

/// Largest number of distinct faces a `FaceId` can name.
pub const MAX_FACES: usize = u8::MAX as usize + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    tile_width: i32,
    tile_height: i32,
    /// Row-major (row * size + col)
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board with a uniformly shuffled face layout.
    pub fn shuffled(config: &GameConfig, rng: &mut GameRng) -> SetupResult<Self> {
        let pairs = check_size(config.board_size)?;

        let mut faces: Vec<FaceId> = (0..pairs)
            .map(|i| FaceId(i as u8))
            .chain((0..pairs).map(|i| FaceId(i as u8)))
            .collect();
        rng.shuffle(&mut faces);

        Ok(Self::layout(
            config.board_size,
            config.tile_width,
            config.tile_height,
            &faces,
        ))
    }

    /// Build a board from an explicit row-major face layout.
    pub fn from_faces(
        size: u8,
        tile_width: i32,
        tile_height: i32,
        faces: &[FaceId],
    ) -> SetupResult<Self> {
        check_size(size)?;

        let expected = usize::from(size) * usize::from(size);
        if faces.len() != expected {
            return Err(SetupError::TileCountMismatch {
                expected,
                found: faces.len(),
            });
        }

        let mut counts: BTreeMap<FaceId, usize> = BTreeMap::new();
        for &face in faces {
            *counts.entry(face).or_default() += 1;
        }
        if let Some((&face, &count)) = counts.iter().find(|(_, count)| **count != 2) {
            return Err(SetupError::UnpairedFace { face, count });
        }

        Ok(Self::layout(size, tile_width, tile_height, faces))
    }

    fn layout(size: u8, tile_width: i32, tile_height: i32, faces: &[FaceId]) -> Self {
        let n = usize::from(size);
        let tiles = faces
            .iter()
            .enumerate()
            .map(|(i, &face)| {
                let row = (i / n) as i32;
                let col = (i % n) as i32;
                let rect = Rect::new(col * tile_width, row * tile_height, tile_width, tile_height);
                Tile::new(rect, face)
            })
            .collect();

        Self {
            size,
            tile_width,
            tile_height,
            tiles,
        }
    }

    /// Tiles per side.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Total tile count (`size²`).
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Logical width covered by the grid.
    pub fn pixel_width(&self) -> i32 {
        i32::from(self.size) * self.tile_width
    }

    /// Logical height covered by the grid.
    pub fn pixel_height(&self) -> i32 {
        i32::from(self.size) * self.tile_height
    }

    /// Flat index of (row, col), or None if out of bounds.
    #[inline]
    pub fn index_of(&self, row: u8, col: u8) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(usize::from(row) * usize::from(self.size) + usize::from(col))
    }

    pub fn get(&self, row: u8, col: u8) -> Option<&Tile> {
        self.index_of(row, col).map(|i| &self.tiles[i])
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// First hidden tile under `point`, scanning row-major.
    pub fn first_hidden_hit(&self, point: Point) -> Option<usize> {
        self.tiles
            .iter()
            .position(|t| t.is_hidden() && t.hit_test(point))
    }

    /// True when no tile is hidden.
    pub fn all_revealed(&self) -> bool {
        self.tiles.iter().all(|t| !t.is_hidden())
    }

    pub fn hidden_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_hidden()).count()
    }

    /// How many tiles show each face.
    pub fn face_counts(&self) -> BTreeMap<FaceId, usize> {
        let mut counts = BTreeMap::new();
        for t in &self.tiles {
            *counts.entry(t.face()).or_default() += 1;
        }
        counts
    }
}

/// Validate a board side and return the number of pairs it holds.
fn check_size(size: u8) -> SetupResult<usize> {
    if size == 0 {
        return Err(SetupError::EmptyBoard);
    }
    let n = usize::from(size);
    let tiles = n * n;
    if tiles % 2 != 0 {
        return Err(SetupError::OddTileCount { size });
    }
    let pairs = tiles / 2;
    if pairs > MAX_FACES {
        return Err(SetupError::TooManyFaces {
            faces: pairs,
            max: MAX_FACES,
        });
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(ids: &[u8]) -> Vec<FaceId> {
        ids.iter().map(|&i| FaceId(i)).collect()
    }

    #[test]
    fn test_shuffled_board_dimensions() {
        let config = GameConfig::default();
        let board = Board::shuffled(&config, &mut GameRng::new(3)).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.len(), 16);
        assert_eq!(board.pixel_width(), 400);
        assert_eq!(board.pixel_height(), 400);
        assert_eq!(board.hidden_count(), 16);
    }

    #[test]
    fn test_shuffled_board_pairs_every_face() {
        let config = GameConfig::default();
        let board = Board::shuffled(&config, &mut GameRng::new(99)).unwrap();
        let counts = board.face_counts();
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_tile_positions_are_row_major() {
        let config = GameConfig::default();
        let board = Board::shuffled(&config, &mut GameRng::new(1)).unwrap();
        assert_eq!(board.get(0, 0).unwrap().rect(), Rect::new(0, 0, 100, 100));
        assert_eq!(board.get(0, 3).unwrap().rect(), Rect::new(300, 0, 100, 100));
        assert_eq!(board.get(2, 1).unwrap().rect(), Rect::new(100, 200, 100, 100));
        assert_eq!(board.index_of(2, 1), Some(9));
        assert!(board.get(4, 0).is_none());
        assert!(board.get(0, 4).is_none());
    }

    #[test]
    fn test_rejects_empty_and_odd_sizes() {
        let mut rng = GameRng::new(1);
        assert_eq!(
            Board::shuffled(&GameConfig::default().with_board_size(0), &mut rng),
            Err(SetupError::EmptyBoard)
        );
        assert_eq!(
            Board::shuffled(&GameConfig::default().with_board_size(3), &mut rng),
            Err(SetupError::OddTileCount { size: 3 })
        );
    }

    #[test]
    fn test_rejects_boards_with_too_many_faces() {
        // 24x24 = 576 tiles = 288 pairs.
        let err = Board::shuffled(&GameConfig::default().with_board_size(24), &mut GameRng::new(1))
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::TooManyFaces {
                faces: 288,
                max: MAX_FACES
            }
        );
    }

    #[test]
    fn test_from_faces_keeps_layout() {
        let board = Board::from_faces(2, 100, 100, &faces(&[0, 1, 1, 0])).unwrap();
        assert_eq!(board.get(0, 0).unwrap().face(), FaceId(0));
        assert_eq!(board.get(0, 1).unwrap().face(), FaceId(1));
        assert_eq!(board.get(1, 0).unwrap().face(), FaceId(1));
        assert_eq!(board.get(1, 1).unwrap().face(), FaceId(0));
    }

    #[test]
    fn test_from_faces_rejects_unpaired_layouts() {
        assert_eq!(
            Board::from_faces(2, 100, 100, &faces(&[0, 0, 0, 1])),
            Err(SetupError::UnpairedFace {
                face: FaceId(0),
                count: 3
            })
        );
        assert_eq!(
            Board::from_faces(2, 100, 100, &faces(&[0, 0, 1])),
            Err(SetupError::TileCountMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_first_hidden_hit_skips_revealed_tiles() {
        let mut board = Board::from_faces(2, 100, 100, &faces(&[0, 1, 1, 0])).unwrap();
        assert_eq!(board.first_hidden_hit(Point::new(150, 50)), Some(1));
        board.tile_mut(1).unwrap().reveal();
        assert_eq!(board.first_hidden_hit(Point::new(150, 50)), None);
        assert_eq!(board.first_hidden_hit(Point::new(450, 50)), None);
    }

    #[test]
    fn test_all_revealed() {
        let mut board = Board::from_faces(2, 100, 100, &faces(&[0, 1, 1, 0])).unwrap();
        assert!(!board.all_revealed());
        for i in 0..4 {
            board.tile_mut(i).unwrap().reveal();
        }
        assert!(board.all_revealed());
    }
}
