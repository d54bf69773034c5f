// Integration tests (native) for the `photo-heart` crate.
// These tests avoid wasm-specific functionality and drive the reveal flow through
// the public state types so they can run under `cargo test` on the host.

use photo_heart::{Album, AssetBase, Page, Stage, TOTAL_TILES, TileClick, build_tiles};

fn fresh_page() -> Page {
    Page::new(Album::new(build_tiles(&AssetBase::new("./"))))
}

// Reveal every tile, forwarding the completion flag to the page the way the view does.
fn reveal_all(page: &mut Page) -> usize {
    let mut completions = 0;
    for id in 1..=TOTAL_TILES as u8 {
        if let TileClick::Revealed { completed: true, .. } = page.album.click(id) {
            completions += 1;
            page.complete();
        }
    }
    completions
}

#[test]
fn tile_count_matches_shape() {
    assert_eq!(photo_heart::tile_count(), 27);
}

#[test]
fn full_reveal_unlocks_letter_once() {
    let mut page = fresh_page();
    assert!(!page.next_visible());
    assert_eq!(reveal_all(&mut page), 1);
    assert!(page.next_visible());

    assert!(page.open_letter());
    assert!(page.letter_open());
    assert!(page.close_letter());
    assert_eq!(page.stage(), Stage::Album);
}

#[test]
fn revealed_tile_stays_revealed_when_opened() {
    let mut page = fresh_page();
    reveal_all(&mut page);
    for id in [1u8, 11, 27] {
        let outcome = page.album.click(id);
        assert!(matches!(outcome, TileClick::Expanded { .. }), "tile {id} should expand");
        assert!(page.album.tile(id).unwrap().revealed);
        page.album.close_detail();
    }
    assert_eq!(page.album.revealed_count(), TOTAL_TILES);
}

#[test]
fn missing_caption_leaves_detail_blank() {
    let mut page = fresh_page();
    page.album.click(4);
    let TileClick::Expanded { request, .. } = page.album.click(4) else {
        panic!("second click should expand");
    };
    // A failed fetch is delivered as None.
    assert!(page.album.accept_caption(request, None));
    assert_eq!(page.album.caption(), None);
    assert_eq!(page.album.expanded().map(|t| t.id), Some(4));
}

#[test]
fn caption_blank_body_counts_as_missing() {
    assert_eq!(photo_heart::caption::caption_from_body("\n"), None);
    assert_eq!(
        photo_heart::caption::caption_from_body("the lake, again\n").as_deref(),
        Some("the lake, again")
    );
}

#[cfg(feature = "serde_json")]
#[test]
fn tiles_json_lists_every_tile() {
    let json = photo_heart::tiles_to_json(&AssetBase::new("/album")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), TOTAL_TILES);
    assert_eq!(arr[10]["kind"], "video");
    assert_eq!(arr[10]["url"], "/album/videos/11.mp4");
    assert_eq!(arr[0]["thumbnail"], serde_json::Value::Null);
}

#[cfg(feature = "serde_json")]
#[test]
fn tiles_json_uses_build_time_base() {
    let json = photo_heart::tiles_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), TOTAL_TILES);
    let base = AssetBase::default();
    assert_eq!(arr[0]["url"], format!("{}photos/1.jpeg", base.as_str()));
}
