//! Which parts of a record take part in text matching.

use gallery_core::types::CatalogRecord;

/// `file_name` and the scalar metadata fields. `None` without `data`.
pub fn scalar_values(record: &CatalogRecord) -> Option<[&str; 7]> {
    let meta = record.data.as_ref()?;
    Some([
        record.file_name.as_str(),
        meta.art_style.as_str(),
        meta.series.as_str(),
        meta.category.as_str(),
        meta.mood.as_str(),
        meta.technique.as_str(),
        meta.color_palette.as_str(),
    ])
}

/// Character names, primary/secondary colors and tags. `None` without `data`.
pub fn list_values(record: &CatalogRecord) -> Option<[&[String]; 4]> {
    let meta = record.data.as_ref()?;
    Some([
        meta.character_names.as_slice(),
        meta.primary_colors.as_slice(),
        meta.secondary_colors.as_slice(),
        meta.tags.as_slice(),
    ])
}
