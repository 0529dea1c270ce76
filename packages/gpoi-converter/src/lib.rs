//! gpoi-converter - Convert GPS point-of-interest XML exports.
//!
//! Reads `<gpoi>` records (Tokyo Datum coordinates, display name, category),
//! groups them by category and renders them as CSV, as a ZIP bundle of
//! per-category CSVs for NaviCon, or as MapFan bookmarks.
//!
//! # Example
//!
//! ```
//! use gpoi_converter::{extract_pois, render::write_csv, ExtractOptions};
//!
//! let xml = r#"<export><gpoi>
//!   <pos><lat>35.0</lat><lon>135.0</lon></pos>
//!   <name><nb>Kyoto Tower</nb></name>
//!   <category>3:Sightseeing</category>
//! </gpoi></export>"#;
//!
//! let pois = extract_pois(xml, &ExtractOptions::new()).unwrap();
//! let mut out = Vec::new();
//! write_csv(&pois, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("\"Sightseeing\",35.003216,134.997218"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and argument validation
//! - [`types`]: Point records and the per-category collection
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML navigation helpers
//! - [`extractor`]: Record extraction, filtering and per-category limits
//! - [`datum`]: Tokyo Datum to WGS84 conversion
//! - [`sanitize`]: File-name and CSV field sanitization
//! - [`render`]: CSV and NaviCon ZIP output
//! - [`mapfan`]: MapFan API session and bookmark publishing
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod datum;
pub mod error;
pub mod extractor;
pub mod mapfan;
pub mod render;
pub mod sanitize;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use datum::{tokyo_to_wgs84, Wgs84Coordinate};
pub use error::{ConverterError, Result};
pub use extractor::{extract_pois, ExtractOptions};
pub use sanitize::{sanitize, SanitizeContext};
pub use types::{normalize_category, PoiCollection, PoiRecord};
