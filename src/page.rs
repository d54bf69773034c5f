//! Page-level state: which stage is showing and whether the "Next" button is up.

use crate::album::Album;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Album,
    Letter,
}

pub struct Page {
    pub album: Album,
    stage: Stage,
    next_visible: bool,
}

impl Page {
    pub fn new(album: Album) -> Self {
        Self {
            album,
            stage: Stage::default(),
            next_visible: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn letter_open(&self) -> bool {
        self.stage == Stage::Letter
    }

    pub fn next_visible(&self) -> bool {
        self.next_visible
    }

    /// Completion event from the grid. Returns true the first time only.
    pub fn complete(&mut self) -> bool {
        if self.next_visible {
            return false;
        }
        self.next_visible = true;
        true
    }

    /// No-op until the album has completed.
    pub fn open_letter(&mut self) -> bool {
        if !self.next_visible || self.stage == Stage::Letter {
            return false;
        }
        self.stage = Stage::Letter;
        true
    }

    pub fn close_letter(&mut self) -> bool {
        if self.stage != Stage::Letter {
            return false;
        }
        self.stage = Stage::Album;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetBase;
    use crate::heart::build_tiles;

    fn page() -> Page {
        Page::new(Album::new(build_tiles(&AssetBase::new("./"))))
    }

    #[test]
    fn test_letter_locked_before_completion() {
        let mut p = page();
        assert_eq!(p.stage(), Stage::Album);
        assert!(!p.open_letter());
        assert!(!p.letter_open());
    }

    #[test]
    fn test_letter_round_trip() {
        let mut p = page();
        assert!(p.complete());
        assert!(!p.complete());
        assert!(p.open_letter());
        assert_eq!(p.stage(), Stage::Letter);
        assert!(p.close_letter());
        assert_eq!(p.stage(), Stage::Album);
        // Next stays available so the letter can be reopened.
        assert!(p.next_visible());
        assert!(p.open_letter());
    }
}
