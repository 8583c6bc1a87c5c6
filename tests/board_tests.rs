//! Board construction tests: pairing invariant and setup failures.

use proptest::prelude::*;

use tui_memory::core::{Board, GameConfig, GameRng, SetupError};
use tui_memory::term::AssetSet;
use tui_memory::types::FaceId;

fn assert_paired(board: &Board) {
    let n = usize::from(board.size());
    assert_eq!(board.len(), n * n);

    let counts = board.face_counts();
    assert_eq!(counts.len(), n * n / 2);
    for (face, count) in counts {
        assert_eq!(count, 2, "{face} appears {count} times");
    }
}

proptest! {
    #[test]
    fn every_shuffled_board_pairs_each_face(seed in any::<u64>()) {
        let config = GameConfig::default().with_seed(seed);
        let board = Board::shuffled(&config, &mut GameRng::new(seed)).unwrap();
        assert_paired(&board);
        prop_assert!(board.tiles().iter().all(|t| t.is_hidden()));
    }

    #[test]
    fn even_boards_of_any_size_are_paired(half in 1u8..=8, seed in any::<u64>()) {
        let config = GameConfig::default().with_board_size(half * 2);
        let board = Board::shuffled(&config, &mut GameRng::new(seed)).unwrap();
        assert_paired(&board);
    }
}

#[test]
fn same_seed_same_layout() {
    let config = GameConfig::default();
    let a = Board::shuffled(&config, &mut GameRng::new(2024)).unwrap();
    let b = Board::shuffled(&config, &mut GameRng::new(2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_usually_differ() {
    let config = GameConfig::default();
    let layouts: std::collections::HashSet<Vec<FaceId>> = (0..20)
        .map(|seed| {
            Board::shuffled(&config, &mut GameRng::new(seed))
                .unwrap()
                .tiles()
                .iter()
                .map(|t| t.face())
                .collect()
        })
        .collect();
    assert!(layouts.len() > 15);
}

#[test]
fn first_tile_face_is_roughly_uniform() {
    // Each of the 8 faces should land on tile 0 about 1/8 of the time.
    let config = GameConfig::default();
    let mut counts = [0u32; 8];
    for seed in 0..4000 {
        let board = Board::shuffled(&config, &mut GameRng::new(seed)).unwrap();
        counts[usize::from(board.tile(0).unwrap().face().0)] += 1;
    }
    for c in counts {
        assert!((350..=650).contains(&c), "skewed distribution: {counts:?}");
    }
}

#[test]
fn unpairable_sizes_fail_fast() {
    for size in [1u8, 3, 5, 7] {
        let err = Board::shuffled(
            &GameConfig::default().with_board_size(size),
            &mut GameRng::new(1),
        )
        .unwrap_err();
        assert_eq!(err, SetupError::OddTileCount { size });
    }
}

#[test]
fn boards_larger_than_the_art_catalog_fail_at_asset_load() {
    let config = GameConfig::default().with_board_size(6);
    assert!(Board::shuffled(&config, &mut GameRng::new(1)).is_ok());
    assert_eq!(
        AssetSet::load(config.pair_count()),
        Err(SetupError::NotEnoughFaceAssets {
            needed: 18,
            available: 8
        })
    );
}
