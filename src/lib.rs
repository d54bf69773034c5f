//! Photo Heart core crate.
//!
//! A heart-shaped grid of 27 tiles, each hiding a photo or a video. Clicking a
//! hidden tile flips it; clicking a revealed one opens it full size with an
//! optional caption. Once the last tile flips a "Next" button appears that opens
//! the letter. `start_album()` mounts everything into the page.
//!
//! The reveal logic (`album`, `page`, `heart`) is plain Rust and runs natively
//! under `cargo test`; only `view` and `caption` touch browser APIs.

use wasm_bindgen::prelude::*;

pub mod album;
pub mod caption;
pub mod config;
pub mod heart;
pub mod letter;
pub mod page;

mod console;
mod view;

pub use album::{Album, TileClick};
pub use config::AssetBase;
pub use heart::{MediaKind, MediaTile, TOTAL_TILES, build_tiles};
pub use page::{Page, Stage};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Mount the album using the build-time asset base (`PHOTO_HEART_BASE`, default `./`).
#[wasm_bindgen]
pub fn start_album() -> Result<(), JsValue> {
    view::mount(AssetBase::default())
}

/// Mount the album with assets resolved under `base`.
#[wasm_bindgen]
pub fn start_album_at(base: &str) -> Result<(), JsValue> {
    view::mount(AssetBase::new(base))
}

#[wasm_bindgen]
pub fn tile_count() -> usize {
    TOTAL_TILES
}

/// Tile table (ids, positions, asset paths) as JSON, for tooling around the page.
/// Paths use the build-time asset base, like `start_album`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn tiles_json() -> Result<String, JsValue> {
    tiles_to_json(&AssetBase::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Same as `tiles_json` with paths resolved under `base`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn tiles_json_at(base: &str) -> Result<String, JsValue> {
    tiles_to_json(&AssetBase::new(base)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(feature = "serde_json")]
pub fn tiles_to_json(base: &AssetBase) -> Result<String, serde_json::Error> {
    serde_json::to_string(&build_tiles(base))
}
