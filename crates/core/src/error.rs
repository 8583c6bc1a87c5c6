//! Setup errors.
//!
//! Only board construction can fail. Once a game is running every transition
//! (reveal, resolve, win check) is defined for all reachable states.

use thiserror::Error;

use crate::types::FaceId;

/// Errors raised while building a board or the assets it needs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A board needs at least one pair of tiles.
    #[error("board size must be at least 1")]
    EmptyBoard,

    /// `size * size` is odd, so the tiles cannot be paired.
    #[error("a {size}x{size} board has an odd number of tiles and cannot be paired")]
    OddTileCount {
        /// Requested board side.
        size: u8,
    },

    /// More distinct faces than a `FaceId` can name.
    #[error("board needs {faces} distinct faces, at most {max} are supported")]
    TooManyFaces {
        /// Faces the board would need.
        faces: usize,
        /// Largest supported face count.
        max: usize,
    },

    /// A face does not appear exactly twice in an explicit layout.
    #[error("{face} appears {count} times, expected exactly 2")]
    UnpairedFace {
        /// The offending face.
        face: FaceId,
        /// How often it was found.
        count: usize,
    },

    /// An explicit layout has the wrong number of tiles for the board size.
    #[error("expected {expected} tiles, found {found}")]
    TileCountMismatch {
        /// `size * size`.
        expected: usize,
        /// Length of the supplied layout.
        found: usize,
    },

    /// An asset identifier could not be resolved.
    #[error("asset not found: {0}")]
    MissingAsset(String),

    /// The asset set has fewer face images than the board has pairs.
    #[error("board needs {needed} face images, only {available} are available")]
    NotEnoughFaceAssets {
        /// Pairs on the board.
        needed: usize,
        /// Face images in the asset set.
        available: usize,
    },
}

/// Result type for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            SetupError::OddTileCount { size: 3 }.to_string(),
            "a 3x3 board has an odd number of tiles and cannot be paired"
        );
        assert_eq!(
            SetupError::UnpairedFace {
                face: FaceId(2),
                count: 3
            }
            .to_string(),
            "face#2 appears 3 times, expected exactly 2"
        );
        assert_eq!(
            SetupError::MissingAsset("image9".into()).to_string(),
            "asset not found: image9"
        );
    }
}
