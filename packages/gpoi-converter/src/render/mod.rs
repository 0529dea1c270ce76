//! Output renderers for a [`PoiCollection`](crate::types::PoiCollection).
//!
//! Every renderer walks categories in sorted order and records in document
//! order, converting each position to WGS84 first.

pub mod csv;
pub mod zip;

pub use self::csv::write_csv;
pub use self::zip::{write_zip, write_zip_file, zip_entries, UrlStyle};
