//! Tile table for the heart album.
//!
//! The heart is a fixed 6x7 matrix (see `shape.rs`). Every occupied cell becomes one
//! [`MediaTile`]; ids are handed out 1.. in row-major scan order, so the table is
//! identical on every page load. Tiles are built once at startup and the only
//! mutation afterwards is `revealed` flipping to true.

use crate::config::AssetBase;

mod shape;

pub use shape::{COLS, HEART_SHAPE, ROWS, VIDEO_IDS, is_occupied};

/// Number of tiles in the heart (occupied cells of [`HEART_SHAPE`]).
pub const TOTAL_TILES: usize = 27;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    Photo,
    Video,
}

/// One cell of the heart holding a photo or a video.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MediaTile {
    pub id: u8,
    pub row: u8,
    pub col: u8,
    pub kind: MediaKind,
    /// Full resolution asset: the jpeg for photos, the mp4 for videos.
    pub url: String,
    /// Still image shown on the revealed tile of a video.
    pub thumbnail: Option<String>,
    pub revealed: bool,
}

impl MediaTile {
    /// Image shown on the face of the revealed tile.
    pub fn cover_url(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.url)
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Build the tile table from the heart shape, resolving asset paths against `base`.
pub fn build_tiles(base: &AssetBase) -> Vec<MediaTile> {
    let mut tiles = Vec::with_capacity(TOTAL_TILES);
    let mut next_id: u8 = 1;
    for (row, cells) in HEART_SHAPE.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell != 1 {
                continue;
            }
            let id = next_id;
            next_id += 1;
            let photo = base.photo(id);
            let (kind, url, thumbnail) = if VIDEO_IDS.contains(&id) {
                (MediaKind::Video, base.video(id), Some(photo))
            } else {
                (MediaKind::Photo, photo, None)
            };
            tiles.push(MediaTile {
                id,
                row: row as u8,
                col: col as u8,
                kind,
                url,
                thumbnail,
                revealed: false,
            });
        }
    }
    tiles
}
