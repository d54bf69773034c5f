//! Build-time and runtime configuration.
//!
//! Assets live next to the page by default (`./photos/1.jpeg`), which keeps the
//! album working on static hosts without knowing the deploy path. Set
//! `PHOTO_HEART_BASE` at build time, or pass a base to `start_album_at`, to serve
//! them from somewhere else.

pub const DEFAULT_BASE: &str = "./";

/// Delay between the last reveal and the completion event.
pub const COMPLETION_DELAY_MS: u32 = 1500;

pub const TITLE: &str = "us being us.";
pub const SUBTITLE: &str = "click to reveal";

/// Element id the album mounts into; falls back to `<body>`.
pub const MOUNT_ID: &str = "photo-heart";

/// Base path baked in at build time.
pub fn build_base() -> &'static str {
    option_env!("PHOTO_HEART_BASE").unwrap_or(DEFAULT_BASE)
}

/// Normalized prefix for static asset paths (always ends with `/`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetBase(String);

impl AssetBase {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self(DEFAULT_BASE.to_string());
        }
        if raw.ends_with('/') {
            Self(raw.to_string())
        } else {
            Self(format!("{raw}/"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn photo(&self, id: u8) -> String {
        format!("{}photos/{id}.jpeg", self.0)
    }

    pub fn video(&self, id: u8) -> String {
        format!("{}videos/{id}.mp4", self.0)
    }

    pub fn caption(&self, id: u8) -> String {
        format!("{}captions/{id}.txt", self.0)
    }
}

impl Default for AssetBase {
    fn default() -> Self {
        Self::new(build_base())
    }
}
