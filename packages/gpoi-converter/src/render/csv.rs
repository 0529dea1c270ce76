//! Plain CSV rendering (`--csv`).

use std::io::Write;

use ::csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::config::CSV_HEADER;
use crate::error::Result;
use crate::sanitize::for_csv_field;
use crate::types::PoiCollection;

/// Write all records as CSV.
///
/// The header line is written verbatim. Category and name are always quoted,
/// even when they look like numbers; the 6-decimal WGS84 coordinates are
/// bare. Sanitized fields never contain `"`, so no escaping is needed.
///
/// # Examples
/// ```
/// use gpoi_converter::render::write_csv;
/// use gpoi_converter::types::{PoiCollection, PoiRecord};
///
/// let mut pois = PoiCollection::new();
/// pois.bucket_mut("Cafe").push(PoiRecord::new(35.0, 135.0, "Blue Bottle"));
///
/// let mut out = Vec::new();
/// write_csv(&pois, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Category,Latitude,Longitude,Name\n\"Cafe\",35.003216,134.997218,\"Blue Bottle\"\n"
/// );
/// ```
pub fn write_csv<W: Write>(pois: &PoiCollection, mut writer: W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;

    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for (category, records) in pois {
        let category = quoted(&for_csv_field(category));
        for record in records {
            let wgs = record.to_wgs84();
            let lat = format!("{:.6}", wgs.lat);
            let lon = format!("{:.6}", wgs.lon);
            let name = quoted(&for_csv_field(&record.name));
            csv.write_record([category.as_str(), lat.as_str(), lon.as_str(), name.as_str()])?;
        }
    }

    csv.flush()?;
    Ok(())
}

fn quoted(field: &str) -> String {
    format!("\"{field}\"")
}
