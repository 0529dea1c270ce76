//! Core data types for the converter.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::config::CATEGORY_PREFIX_PATTERN;

/// One extracted point record.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiRecord {
    /// Latitude in the source (Tokyo) datum.
    pub lat: f64,

    /// Longitude in the source (Tokyo) datum.
    pub lon: f64,

    /// Display name.
    pub name: String,
}

impl PoiRecord {
    #[must_use]
    pub fn new(lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            name: name.into(),
        }
    }
}

/// Normalize a raw category field into its grouping key.
///
/// A leading numeric code (`<digits>:`) is stripped; anything else is kept.
///
/// # Examples
/// ```
/// use gpoi_converter::types::normalize_category;
///
/// assert_eq!(normalize_category("10001:Restaurant"), "Restaurant");
/// assert_eq!(normalize_category("Restaurant"), "Restaurant");
/// ```
#[must_use]
pub fn normalize_category(raw: &str) -> String {
    CATEGORY_PREFIX_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| raw.to_string(), |m| m.as_str().to_string())
}

/// Records grouped by category key.
///
/// Buckets keep document order; categories iterate sorted by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoiCollection {
    categories: BTreeMap<String, Vec<PoiRecord>>,
}

impl PoiCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for a category, creating an empty one if needed.
    pub fn bucket_mut(&mut self, category: &str) -> &mut Vec<PoiRecord> {
        self.categories.entry(category.to_string()).or_default()
    }

    /// Records of one category, if present.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[PoiRecord]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterate categories in sorted order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<PoiRecord>> {
        self.categories.iter()
    }

    /// Category keys in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of records over all categories.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a PoiCollection {
    type Item = (&'a String, &'a Vec<PoiRecord>);
    type IntoIter = btree_map::Iter<'a, String, Vec<PoiRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
