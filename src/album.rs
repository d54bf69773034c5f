//! Reveal state of the heart grid and the detail view.
//!
//! Pure logic, no DOM: the view layer forwards clicks here and renders whatever
//! the returned [`TileClick`] says. Keeping it browser-free lets the whole reveal
//! flow run under plain `cargo test`.

use crate::heart::MediaTile;

/// Outcome of a click on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileClick {
    /// Tile was hidden and is now revealed. `completed` is true on the single
    /// click that revealed the last tile.
    Revealed { id: u8, completed: bool },
    /// Tile was already revealed; the detail view is now open on it and a caption
    /// request with generation `request` should be started.
    Expanded { id: u8, request: u32 },
    /// No tile with that id.
    Ignored,
}

pub struct Album {
    tiles: Vec<MediaTile>,
    revealed_count: usize,
    completion_fired: bool,
    expanded: Option<u8>,
    caption: Option<String>,
    // Bumped on every open/close so late caption responses can be dropped.
    caption_request: u32,
}

impl Album {
    pub fn new(tiles: Vec<MediaTile>) -> Self {
        let revealed_count = tiles.iter().filter(|t| t.revealed).count();
        Self {
            tiles,
            revealed_count,
            completion_fired: false,
            expanded: None,
            caption: None,
            caption_request: 0,
        }
    }

    pub fn tiles(&self) -> &[MediaTile] {
        &self.tiles
    }

    pub fn tile(&self, id: u8) -> Option<&MediaTile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn tile_at(&self, row: u8, col: u8) -> Option<&MediaTile> {
        self.tiles.iter().find(|t| t.row == row && t.col == col)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn is_complete(&self) -> bool {
        !self.tiles.is_empty() && self.revealed_count == self.tiles.len()
    }

    pub fn click(&mut self, id: u8) -> TileClick {
        let Some(tile) = self.tiles.iter_mut().find(|t| t.id == id) else {
            return TileClick::Ignored;
        };
        if tile.revealed {
            let request = self.open_detail(id);
            return TileClick::Expanded { id, request };
        }
        tile.revealed = true;
        self.revealed_count += 1;
        let completed = self.revealed_count == self.tiles.len() && !self.completion_fired;
        if completed {
            self.completion_fired = true;
        }
        TileClick::Revealed { id, completed }
    }

    fn open_detail(&mut self, id: u8) -> u32 {
        self.expanded = Some(id);
        self.caption = None;
        self.caption_request = self.caption_request.wrapping_add(1);
        self.caption_request
    }

    /// Tile currently shown in the detail view.
    pub fn expanded(&self) -> Option<&MediaTile> {
        self.expanded.and_then(|id| self.tile(id))
    }

    pub fn close_detail(&mut self) {
        self.expanded = None;
        self.caption = None;
        self.caption_request = self.caption_request.wrapping_add(1);
    }

    /// Store the result of caption request `request`. Returns false (and drops the
    /// caption) when the detail view was closed or switched since the request began.
    pub fn accept_caption(&mut self, request: u32, caption: Option<String>) -> bool {
        if self.expanded.is_none() || request != self.caption_request {
            return false;
        }
        self.caption = caption;
        true
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetBase;
    use crate::heart::{TOTAL_TILES, build_tiles};

    fn album() -> Album {
        Album::new(build_tiles(&AssetBase::new("./")))
    }

    #[test]
    fn test_starts_hidden() {
        let a = album();
        assert_eq!(a.revealed_count(), 0);
        assert!(!a.is_complete());
        assert!(a.tiles().iter().all(|t| !t.revealed));
        assert!(a.expanded().is_none());
    }

    #[test]
    fn test_reveal_increments_counter() {
        let mut a = album();
        assert_eq!(a.click(5), TileClick::Revealed { id: 5, completed: false });
        assert_eq!(a.revealed_count(), 1);
        assert!(a.tile(5).unwrap().revealed);
    }

    #[test]
    fn test_second_click_expands_without_unrevealing() {
        let mut a = album();
        a.click(7);
        let outcome = a.click(7);
        assert!(matches!(outcome, TileClick::Expanded { id: 7, .. }));
        assert!(a.tile(7).unwrap().revealed);
        assert_eq!(a.revealed_count(), 1);
        assert_eq!(a.expanded().map(|t| t.id), Some(7));
    }

    #[test]
    fn test_completion_fires_once() {
        let mut a = album();
        let mut completions = 0;
        for id in 1..=TOTAL_TILES as u8 {
            if let TileClick::Revealed { completed: true, .. } = a.click(id) {
                completions += 1;
            }
        }
        for id in 1..=TOTAL_TILES as u8 {
            a.click(id);
        }
        assert_eq!(completions, 1);
        assert!(a.is_complete());
        assert_eq!(a.revealed_count(), TOTAL_TILES);
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut a = album();
        assert_eq!(a.click(0), TileClick::Ignored);
        assert_eq!(a.click(28), TileClick::Ignored);
        assert_eq!(a.revealed_count(), 0);
    }

    #[test]
    fn test_stale_caption_dropped() {
        let mut a = album();
        a.click(1);
        a.click(2);
        let TileClick::Expanded { request: first, .. } = a.click(1) else {
            panic!("expected expand")
        };
        let TileClick::Expanded { request: second, .. } = a.click(2) else {
            panic!("expected expand")
        };
        assert!(!a.accept_caption(first, Some("old".into())));
        assert!(a.caption().is_none());
        assert!(a.accept_caption(second, Some("new".into())));
        assert_eq!(a.caption(), Some("new"));
    }

    #[test]
    fn test_caption_after_close_dropped() {
        let mut a = album();
        a.click(3);
        let TileClick::Expanded { request, .. } = a.click(3) else {
            panic!("expected expand")
        };
        a.close_detail();
        assert!(!a.accept_caption(request, Some("late".into())));
        assert!(a.caption().is_none());
        assert!(a.expanded().is_none());
    }

    #[test]
    fn test_tile_at_matches_shape() {
        let a = album();
        assert!(a.tile_at(0, 0).is_none());
        assert_eq!(a.tile_at(0, 1).map(|t| t.id), Some(1));
        assert_eq!(a.tile_at(5, 3).map(|t| t.id), Some(27));
    }
}
