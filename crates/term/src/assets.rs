//! Tile art catalog.
//!
//! The terminal stand-in for image files: every asset identifier (`image0` is
//! the cover, `image1`..`image8` are faces) resolves to a fill pattern, a glyph
//! and a pair of colors.

use crate::core::{SetupError, SetupResult};
use crate::fb::Rgb;
use crate::types::{Asset, FaceId, COVER_ASSET_ID};

/// How one image is drawn into a block of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileArt {
    /// Character repeated over the whole block.
    pub fill: char,
    /// Character placed at the center of the block.
    pub glyph: Option<char>,
    pub fg: Rgb,
    pub bg: Rgb,
}

const fn face(glyph: char, fg: Rgb, bg: Rgb) -> TileArt {
    TileArt {
        fill: ' ',
        glyph: Some(glyph),
        fg,
        bg,
    }
}

const CATALOG: [(&str, TileArt); 9] = [
    (
        COVER_ASSET_ID,
        TileArt {
            fill: '░',
            glyph: None,
            fg: Rgb::new(90, 110, 180),
            bg: Rgb::new(25, 30, 70),
        },
    ),
    ("image1", face('♠', Rgb::new(240, 240, 240), Rgb::new(40, 40, 40))),
    ("image2", face('♥', Rgb::new(255, 90, 90), Rgb::new(70, 15, 20))),
    ("image3", face('♦', Rgb::new(255, 170, 60), Rgb::new(80, 45, 10))),
    ("image4", face('♣', Rgb::new(110, 230, 120), Rgb::new(15, 60, 25))),
    ("image5", face('★', Rgb::new(250, 230, 80), Rgb::new(75, 65, 10))),
    ("image6", face('●', Rgb::new(90, 200, 255), Rgb::new(10, 50, 80))),
    ("image7", face('▲', Rgb::new(210, 120, 240), Rgb::new(55, 20, 70))),
    ("image8", face('◆', Rgb::new(80, 230, 220), Rgb::new(10, 65, 65))),
];

/// Number of face images in the catalog.
pub const FACE_ASSET_COUNT: usize = CATALOG.len() - 1;

/// Look up one asset by identifier.
pub fn load_art(id: &str) -> SetupResult<TileArt> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, art)| *art)
        .ok_or_else(|| SetupError::MissingAsset(id.to_string()))
}

/// The cover plus one face image per pair on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSet {
    cover: TileArt,
    faces: Vec<TileArt>,
}

impl AssetSet {
    /// Load the cover and faces `image1..=image{pairs}`.
    pub fn load(pairs: usize) -> SetupResult<Self> {
        if pairs > FACE_ASSET_COUNT {
            return Err(SetupError::NotEnoughFaceAssets {
                needed: pairs,
                available: FACE_ASSET_COUNT,
            });
        }

        let cover = load_art(COVER_ASSET_ID)?;
        let faces = (0..pairs)
            .map(|i| load_art(&FaceId(i as u8).asset_id()))
            .collect::<SetupResult<Vec<_>>>()?;
        Ok(Self { cover, faces })
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Art for `asset`. A face the set does not hold falls back to the cover.
    pub fn art(&self, asset: Asset) -> TileArt {
        match asset {
            Asset::Cover => self.cover,
            Asset::Face(FaceId(i)) => self
                .faces
                .get(usize::from(i))
                .copied()
                .unwrap_or(self.cover),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_loads_all_faces() {
        let set = AssetSet::load(8).unwrap();
        assert_eq!(set.face_count(), 8);
        assert_eq!(set.art(Asset::Cover), load_art("image0").unwrap());
        assert_eq!(set.art(Asset::Face(FaceId(7))), load_art("image8").unwrap());
    }

    #[test]
    fn faces_are_distinct() {
        let set = AssetSet::load(FACE_ASSET_COUNT).unwrap();
        for a in 0..FACE_ASSET_COUNT as u8 {
            for b in (a + 1)..FACE_ASSET_COUNT as u8 {
                assert_ne!(set.art(Asset::Face(FaceId(a))), set.art(Asset::Face(FaceId(b))));
            }
        }
    }

    #[test]
    fn unknown_asset_is_missing() {
        assert_eq!(
            load_art("image9"),
            Err(SetupError::MissingAsset("image9".to_string()))
        );
    }

    #[test]
    fn too_many_pairs_fail_fast() {
        assert_eq!(
            AssetSet::load(18),
            Err(SetupError::NotEnoughFaceAssets {
                needed: 18,
                available: 8
            })
        );
    }
}
