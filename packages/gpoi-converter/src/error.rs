//! Error types for the converter.
//!
//! A single `ConverterError` covers parsing, output writing and the MapFan
//! remote calls. Usage errors carry their own process exit code.

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element (or element without text).
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Coordinate text that is not a decimal number.
    #[error("Invalid number in <{element}>: '{value}'")]
    InvalidNumber { element: String, value: String },

    /// No output mode was requested on the command line.
    #[error("No output mode selected. Use --csv, --zipfile or --mapfan")]
    NoOutputMode,

    /// Malformed `--mapfan` argument.
    #[error("Invalid MapFan credentials. Expected 'LOGINID,PASSWORD'")]
    InvalidCredentials,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote service answered with a non-success status.
    #[error("MapFan {operation} failed with status {status}: {body}")]
    Api {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// A remote call was made before authorization.
    #[error("MapFan {0} requires authorization")]
    NotAuthorized(&'static str),

    /// Expected field missing from a remote response.
    #[error("Missing field '{field}' in MapFan {operation} response")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// CSV writer error.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

impl ConverterError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidCredentials => 2,
            _ => 1,
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;
