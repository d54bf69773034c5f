// Additional integration tests for tile table invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use photo_heart::heart::{COLS, HEART_SHAPE, ROWS, VIDEO_IDS, is_occupied};
use photo_heart::{AssetBase, MediaKind, TOTAL_TILES, build_tiles};

#[test]
fn ids_and_positions_are_unique() {
    let tiles = build_tiles(&AssetBase::new("./"));
    assert_eq!(tiles.len(), TOTAL_TILES);
    let mut ids = HashSet::new();
    let mut cells = HashSet::new();
    for t in &tiles {
        assert!((1..=TOTAL_TILES as u8).contains(&t.id), "id {} out of range", t.id);
        assert!(ids.insert(t.id), "duplicate id {}", t.id);
        assert!(cells.insert((t.row, t.col)), "duplicate cell ({}, {})", t.row, t.col);
        assert!(!t.revealed, "tile {} starts revealed", t.id);
    }
}

#[test]
fn tiles_cover_exactly_the_occupied_cells() {
    let tiles = build_tiles(&AssetBase::new("./"));
    for row in 0..ROWS {
        for col in 0..COLS {
            let tile = tiles.iter().find(|t| t.row as usize == row && t.col as usize == col);
            assert_eq!(
                tile.is_some(),
                is_occupied(row, col),
                "cell ({row}, {col}) disagrees with the shape table"
            );
        }
    }
    assert_eq!(HEART_SHAPE.len(), ROWS);
}

#[test]
fn video_ids_are_valid_tiles() {
    let tiles = build_tiles(&AssetBase::new("./"));
    let mut seen = HashSet::new();
    for id in VIDEO_IDS {
        assert!(seen.insert(*id), "duplicate video id {id}");
        let tile = tiles.iter().find(|t| t.id == *id).expect("video id must name a tile");
        assert_eq!(tile.kind, MediaKind::Video);
    }
    let videos = tiles.iter().filter(|t| t.is_video()).count();
    assert_eq!(videos, VIDEO_IDS.len());
}

#[test]
fn table_is_identical_across_builds() {
    let base = AssetBase::new("./");
    assert_eq!(build_tiles(&base), build_tiles(&base));
}
