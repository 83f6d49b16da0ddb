use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{CatalogRecord, WallpaperMeta};

/// Entry as it appears in the external document. Every field may be missing.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default, alias = "fileName")]
    file_name: Option<String>,
    #[serde(default, alias = "fileMainName", alias = "mainFileName")]
    file_main_name: Option<String>,
    #[serde(default, alias = "fileCacheName", alias = "cacheFileName")]
    file_cache_name: Option<String>,
    #[serde(default)]
    resolution: Option<String>,
    #[serde(default, deserialize_with = "de_dimension")]
    width: Option<u32>,
    #[serde(default, deserialize_with = "de_dimension")]
    height: Option<u32>,
    #[serde(default)]
    orientation: Option<String>,
    #[serde(default)]
    data: Option<RawMeta>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMeta {
    #[serde(default, alias = "artStyle")]
    art_style: Option<String>,
    #[serde(default)]
    series: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    mood: Option<String>,
    #[serde(default)]
    technique: Option<String>,
    #[serde(default, alias = "colorPalette")]
    color_palette: Option<String>,
    #[serde(default, alias = "characterNames")]
    character_names: Option<Vec<String>>,
    #[serde(default, alias = "primaryColors")]
    primary_colors: Option<Vec<String>>,
    #[serde(default, alias = "secondaryColors")]
    secondary_colors: Option<Vec<String>>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl From<RawMeta> for WallpaperMeta {
    fn from(raw: RawMeta) -> Self {
        Self {
            art_style: raw.art_style.unwrap_or_default(),
            series: raw.series.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            mood: raw.mood.unwrap_or_default(),
            technique: raw.technique.unwrap_or_default(),
            color_palette: raw.color_palette.unwrap_or_default(),
            character_names: raw.character_names.unwrap_or_default(),
            primary_colors: raw.primary_colors.unwrap_or_default(),
            secondary_colors: raw.secondary_colors.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
        }
    }
}

/// Accepts a positive integer or a numeric string; zero and null read as absent.
fn de_dimension<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let n = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(other) => return Err(de::Error::custom(format!("expected a dimension, got {}", other))),
    };
    match n {
        Some(0) => Ok(None),
        Some(n) => u32::try_from(n).map(Some).map_err(|_| de::Error::custom(format!("dimension out of range: {}", n))),
        None => Err(de::Error::custom("dimension is not a non-negative integer")),
    }
}

/// Outcome of decoding one catalog document.
#[derive(Debug, Clone, Default)]
pub struct ProcessedCatalog {
    pub records: Vec<CatalogRecord>,
    pub skipped: usize,
}

/// Decodes the external catalog document into typed records.
///
/// The top level must be a JSON array, anything else is `Error::Format`.
/// Individual entries that cannot be decoded, or that carry no `file_name`,
/// are dropped and counted; surviving entries keep their source order.
#[derive(Debug, Default)]
pub struct CatalogProcessor;

impl CatalogProcessor {
    pub fn new() -> Self { Self }

    pub fn process_payload(&self, payload: &[u8]) -> Result<ProcessedCatalog> {
        let value: Value = serde_json::from_slice(payload)
            .map_err(|e| Error::Format(format!("catalog is not valid JSON: {}", e)))?;
        self.process_value(value)
    }

    pub fn process_str(&self, payload: &str) -> Result<ProcessedCatalog> {
        self.process_payload(payload.as_bytes())
    }

    pub fn process_value(&self, value: Value) -> Result<ProcessedCatalog> {
        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(Error::Format(format!("expected a JSON array of records, got {}", json_kind(&other))))
            }
        };
        let total = entries.len();
        let mut out = ProcessedCatalog { records: Vec::with_capacity(total), skipped: 0 };
        for (index, entry) in entries.into_iter().enumerate() {
            match Self::decode_entry(entry) {
                Ok(record) => out.records.push(record),
                Err(reason) => {
                    warn!(index, %reason, "skipping malformed catalog entry");
                    out.skipped += 1;
                }
            }
        }
        debug!(total, kept = out.records.len(), skipped = out.skipped, "decoded catalog");
        Ok(out)
    }

    fn decode_entry(entry: Value) -> std::result::Result<CatalogRecord, String> {
        if !entry.is_object() {
            return Err(format!("expected an object, got {}", json_kind(&entry)));
        }
        let raw: RawRecord = serde_json::from_value(entry).map_err(|e| e.to_string())?;
        let file_name = match raw.file_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err("missing file_name".to_string()),
        };
        Ok(CatalogRecord {
            file_name,
            main_file_name: raw.file_main_name.filter(|s| !s.is_empty()),
            cache_file_name: raw.file_cache_name.filter(|s| !s.is_empty()),
            resolution: raw.resolution.filter(|s| !s.is_empty()),
            width: raw.width,
            height: raw.height,
            orientation: raw.orientation,
            data: raw.data.map(WallpaperMeta::from),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_accepts_numeric_strings_and_drops_zero() {
        let payload = r#"[
            {"file_name": "a", "width": "1920", "height": 1080},
            {"file_name": "b", "width": 0, "height": null}
        ]"#;
        let out = CatalogProcessor::new().process_str(payload).expect("decode");
        assert_eq!(out.records[0].width, Some(1920));
        assert_eq!(out.records[0].height, Some(1080));
        assert_eq!(out.records[1].width, None);
        assert_eq!(out.records[1].height, None);
    }

    #[test]
    fn negative_dimension_rejects_entry() {
        let out = CatalogProcessor::new()
            .process_str(r#"[{"file_name": "a", "width": -4}, {"file_name": "b"}]"#)
            .expect("decode");
        assert_eq!(out.skipped, 1);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].file_name, "b");
    }
}
