//! Domain types used by the catalog loaders, search and similarity engines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub type WallpaperId = String;

pub const DEFAULT_MAIN_EXTENSION: &str = "png";
pub const DEFAULT_CACHE_EXTENSION: &str = "webp";

/// Curated metadata attached to a wallpaper.
///
/// Absent scalars decode to `""` and absent lists to an empty `Vec`, so the
/// engines never have to distinguish "missing" from "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperMeta {
    pub art_style: String,
    pub series: String,
    pub category: String,
    pub mood: String,
    pub technique: String,
    pub color_palette: String,
    pub character_names: Vec<String>,
    pub primary_colors: Vec<String>,
    pub secondary_colors: Vec<String>,
    pub tags: Vec<String>,
}

/// One wallpaper entry of the catalog, as decoded from the external index.
///
/// - `file_name`: canonical key (not guaranteed unique across a snapshot)
/// - `main_file_name`/`cache_file_name`: asset name overrides
/// - `resolution`/`width`/`height`: any subset may be present
/// - `data`: `None` when the entry carries no metadata object at all
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub file_name: WallpaperId,
    pub main_file_name: Option<String>,
    pub cache_file_name: Option<String>,
    pub resolution: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub orientation: Option<String>,
    pub data: Option<WallpaperMeta>,
}

impl CatalogRecord {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self { file_name: file_name.into(), ..Self::default() }
    }

    /// Full-resolution asset name, `<file_name>.png` unless overridden.
    pub fn main_file_name(&self) -> String {
        match self.main_file_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}.{}", self.file_name, DEFAULT_MAIN_EXTENSION),
        }
    }

    /// Preview asset name, `<file_name>.webp` unless overridden.
    pub fn cache_file_name(&self) -> String {
        match self.cache_file_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}.{}", self.file_name, DEFAULT_CACHE_EXTENSION),
        }
    }

    /// Display name with its extension removed, used as a secondary lookup key.
    pub fn display_stem(&self) -> String {
        let display = self.main_file_name();
        match display.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => display,
        }
    }

    pub fn platform(&self) -> Platform {
        Platform::from_orientation(self.orientation.as_deref())
    }

    /// Explicit dimensions, falling back to a parsed `resolution`.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => self.resolution.as_deref().and_then(parse_resolution),
        }
    }

    pub fn resolution(&self) -> String {
        match self.resolution.as_deref() {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => match (self.width, self.height) {
                (Some(w), Some(h)) => format!("{}x{}", w, h),
                _ => String::new(),
            },
        }
    }
}

/// Parse `"<width>x<height>"`; both sides must be positive integers.
pub fn parse_resolution(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

/// Device class a wallpaper is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Desktop,
    Mobile,
}

impl Platform {
    /// `"Mobile"` maps to `Mobile`; anything else, including no value, is `Desktop`.
    pub fn from_orientation(orientation: Option<&str>) -> Self {
        match orientation {
            Some("Mobile") => Platform::Mobile,
            _ => Platform::Desktop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Desktop => "Desktop",
            Platform::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Platform::Desktop),
            "mobile" => Ok(Platform::Mobile),
            other => Err(Error::InvalidPlatform(other.to_string())),
        }
    }
}

/// The public-facing shape returned by both engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    pub id: WallpaperId,
    pub display_name: String,
    pub download_url: String,
    pub preview_url: String,
    pub resolution: String,
    pub platform: Platform,
    pub width: u32,
    pub height: u32,
}
