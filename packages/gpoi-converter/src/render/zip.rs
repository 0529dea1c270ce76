//! NaviCon ZIP bundle rendering (`--zipfile`).
//!
//! One CSV entry per category, named after the category. Each row links the
//! point on Google Maps so NaviCon can import it as a destination.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use clap::ValueEnum;
use ::zip::write::SimpleFileOptions;
use ::zip::{CompressionMethod, ZipWriter};

use crate::config::{GOOGLE_MAPS_URL, GOOGLE_MAPS_ZOOM, NAVICON_HEADER};
use crate::datum::Wgs84Coordinate;
use crate::error::Result;
use crate::sanitize::for_file_path;
use crate::types::{PoiCollection, PoiRecord};

/// Map link format written into the URL column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UrlStyle {
    /// `https://www.google.com/maps/search/<lat>,<lon>`
    #[default]
    Search,

    /// `https://www.google.com/maps/@<lat>,<lon>,17z`
    At,
}

impl UrlStyle {
    /// Build the map link for a WGS84 coordinate.
    #[must_use]
    pub fn map_url(self, wgs: Wgs84Coordinate) -> String {
        match self {
            Self::Search => format!("{GOOGLE_MAPS_URL}/search/{:.6},{:.6}", wgs.lat, wgs.lon),
            Self::At => format!(
                "{GOOGLE_MAPS_URL}/@{:.6},{:.6},{GOOGLE_MAPS_ZOOM}z",
                wgs.lat, wgs.lon
            ),
        }
    }
}

/// Name of the ZIP entry holding a category.
#[must_use]
pub fn entry_name(category: &str) -> String {
    format!("{}.csv", for_file_path(category))
}

/// Group records by ZIP entry name.
///
/// Categories whose sanitized names collide share one entry: records follow
/// sorted category order, then document order.
#[must_use]
pub fn zip_entries(pois: &PoiCollection) -> Vec<(String, Vec<&PoiRecord>)> {
    let mut entries: Vec<(String, Vec<&PoiRecord>)> = Vec::with_capacity(pois.len());
    for (category, records) in pois {
        let name = entry_name(category);
        match entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, merged)) => {
                tracing::debug!(%category, entry = %name, "Merging category into existing entry");
                merged.extend(records);
            }
            None => entries.push((name, records.iter().collect())),
        }
    }
    entries
}

/// Render the NaviCon CSV body for one entry.
#[must_use]
pub fn navicon_csv<'a>(
    records: impl IntoIterator<Item = &'a PoiRecord>,
    style: UrlStyle,
) -> String {
    let mut lines = vec![NAVICON_HEADER.to_string()];
    for record in records {
        lines.push(format!(
            "\"{}\",,\"{}\",",
            for_file_path(&record.name),
            style.map_url(record.to_wgs84())
        ));
    }
    lines.join("\n")
}

/// Write the bundle into any seekable writer and return it.
pub fn write_zip<W: Write + Seek>(pois: &PoiCollection, writer: W, style: UrlStyle) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, records) in zip_entries(pois) {
        tracing::debug!(entry = %name, records = records.len(), "Writing ZIP entry");
        zip.start_file(name, options)?;
        zip.write_all(navicon_csv(records, style).as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Write the bundle to a file, replacing any existing one.
pub fn write_zip_file(path: &Path, pois: &PoiCollection, style: UrlStyle) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = write_zip(pois, BufWriter::new(file), style)?;
    writer.flush()?;
    Ok(())
}
