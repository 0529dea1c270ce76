//! Point record extraction from the GPS POI XML export.
//!
//! Each `<gpoi>` element becomes one [`PoiRecord`] in the bucket of its
//! normalized category:
//!
//! ```xml
//! <gpoi>
//!   <pos><lat>35.681236</lat><lon>139.767125</lon></pos>
//!   <name><nb>Tokyo Station</nb></name>
//!   <category>10001:Station</category>
//! </gpoi>
//! ```

use roxmltree::{Document, Node};

use crate::error::{ConverterError, Result};
use crate::sanitize::for_csv_field;
use crate::types::{normalize_category, PoiCollection, PoiRecord};
use crate::xml::{find_child, find_descendant, get_text, has_tag, raw_text};

/// Tag of a point record.
const RECORD_TAG: &str = "gpoi";

/// Filtering applied while records are extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Keep only this category (compared in CSV-sanitized form).
    pub category: Option<String>,

    /// Keep at most this many records per category.
    pub max_per_category: Option<usize>,
}

impl ExtractOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_max_per_category(mut self, max: usize) -> Self {
        self.max_per_category = Some(max);
        self
    }

    /// Build the cap from a signed CLI value; negative means unlimited.
    #[must_use]
    pub fn with_signed_max(mut self, max: i64) -> Self {
        self.max_per_category = usize::try_from(max).ok();
        self
    }
}

/// Extract all point records from XML text.
///
/// # Errors
/// Fails on malformed XML, on a record without position, name or category,
/// and on non-numeric coordinates. No partial result is returned.
///
/// # Examples
/// ```
/// use gpoi_converter::extractor::{extract_pois, ExtractOptions};
///
/// let xml = r#"<export><gpoi>
///   <pos><lat>35.0</lat><lon>135.0</lon></pos>
///   <name><nb>Cafe</nb></name>
///   <category>20:Food</category>
/// </gpoi></export>"#;
///
/// let pois = extract_pois(xml, &ExtractOptions::new()).unwrap();
/// assert_eq!(pois.get("Food").unwrap()[0].name, "Cafe");
/// ```
pub fn extract_pois(xml: &str, options: &ExtractOptions) -> Result<PoiCollection> {
    let doc = Document::parse(xml)?;
    let filter = options.category.as_deref().map(for_csv_field);
    let mut pois = PoiCollection::new();

    for (index, gpoi) in doc
        .descendants()
        .filter(|n| has_tag(*n, RECORD_TAG))
        .enumerate()
    {
        let context = format!("{RECORD_TAG} #{}", index + 1);
        let (record, category) = parse_record(gpoi, &context)?;

        if let Some(filter) = &filter {
            if *filter != for_csv_field(&category) {
                continue;
            }
        }

        let bucket = pois.bucket_mut(&category);
        if options.max_per_category.is_some_and(|max| bucket.len() >= max) {
            tracing::debug!(%category, name = %record.name, "Category limit reached, dropping record");
            continue;
        }
        bucket.push(record);
    }

    tracing::debug!(
        categories = pois.len(),
        records = pois.record_count(),
        "Extracted point records"
    );
    Ok(pois)
}

/// Parse one `<gpoi>` element into a record and its category key.
fn parse_record(gpoi: Node<'_, '_>, context: &str) -> Result<(PoiRecord, String)> {
    let pos = find_descendant(gpoi, "pos").ok_or_else(|| missing("pos", context))?;
    let lat = parse_coordinate(pos, "lat", context)?;
    let lon = parse_coordinate(pos, "lon", context)?;

    let name = gpoi
        .descendants()
        .filter(|n| has_tag(*n, "name"))
        .find_map(|n| find_child(n, "nb"))
        .and_then(raw_text)
        .ok_or_else(|| missing("name/nb", context))?;

    let category = find_child(gpoi, "category")
        .and_then(raw_text)
        .ok_or_else(|| missing("category", context))?;

    Ok((PoiRecord::new(lat, lon, name), normalize_category(category)))
}

fn parse_coordinate(pos: Node<'_, '_>, tag: &str, context: &str) -> Result<f64> {
    let node = find_child(pos, tag).ok_or_else(|| missing(tag, context))?;
    let text = get_text(node);
    if text.is_empty() {
        return Err(missing(tag, context));
    }
    text.parse::<f64>()
        .map_err(|_| ConverterError::InvalidNumber {
            element: tag.to_string(),
            value: text,
        })
}

fn missing(element: &str, context: &str) -> ConverterError {
    ConverterError::MissingElement {
        element: element.to_string(),
        context: context.to_string(),
    }
}
