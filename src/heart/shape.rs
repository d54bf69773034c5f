// Heart shape definition
// This file contains the occupied-cell matrix and the ids that hold videos.

/// Grid height in rows.
pub const ROWS: usize = 6;
/// Grid width in columns.
pub const COLS: usize = 7;

// 1 = tile, 0 = empty spacer
pub const HEART_SHAPE: [[u8; COLS]; ROWS] = [
    [0, 1, 1, 0, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 0, 0, 0],
];

/// Tile ids (1-based, row-major over occupied cells) that show a video instead of a photo.
/// Add or remove an id here to switch a tile between photo and video.
pub const VIDEO_IDS: &[u8] = &[11, 15, 17, 19, 22, 23, 24, 25];

pub fn is_occupied(row: usize, col: usize) -> bool {
    row < ROWS && col < COLS && HEART_SHAPE[row][col] == 1
}
