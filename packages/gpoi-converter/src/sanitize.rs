//! Context-dependent text sanitization.
//!
//! Each context owns a character translation table and a whitespace
//! replacement. Characters not in the table pass through unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// Any run of Unicode whitespace, ideographic space included.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Characters that cannot appear in file names, mapped to full-width forms.
const FILE_PATH_TABLE: &[(char, char)] = &[
    ('\\', '＼'),
    ('/', '／'),
    (':', '：'),
    ('*', '＊'),
    ('?', '？'),
    ('"', '”'),
    ('<', '＜'),
    ('>', '＞'),
    ('|', '｜'),
    (' ', '\u{3000}'),
];

/// Characters that would break a quoted CSV field.
const CSV_FIELD_TABLE: &[(char, char)] = &[('"', '”')];

/// Target context of a sanitized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeContext {
    /// File or ZIP entry names; also used for MapFan bookmark names.
    FilePath,

    /// Quoted CSV fields.
    CsvField,
}

impl SanitizeContext {
    fn table(self) -> &'static [(char, char)] {
        match self {
            Self::FilePath => FILE_PATH_TABLE,
            Self::CsvField => CSV_FIELD_TABLE,
        }
    }

    fn whitespace(self) -> &'static str {
        match self {
            Self::FilePath => "\u{3000}",
            Self::CsvField => " ",
        }
    }
}

fn translate(c: char, table: &[(char, char)]) -> char {
    table
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| *to)
}

/// Sanitize a string for the given context.
///
/// # Examples
/// ```
/// use gpoi_converter::sanitize::{sanitize, SanitizeContext};
///
/// assert_eq!(sanitize("a/b c", SanitizeContext::FilePath), "a／b　c");
/// assert_eq!(sanitize("say \"hi\"\t x", SanitizeContext::CsvField), "say ”hi” x");
/// ```
#[must_use]
pub fn sanitize(text: &str, context: SanitizeContext) -> String {
    let table = context.table();
    let translated: String = text.chars().map(|c| translate(c, table)).collect();
    WHITESPACE_RUN
        .replace_all(&translated, context.whitespace())
        .into_owned()
}

/// Shorthand for [`SanitizeContext::FilePath`].
#[must_use]
pub fn for_file_path(text: &str) -> String {
    sanitize(text, SanitizeContext::FilePath)
}

/// Shorthand for [`SanitizeContext::CsvField`].
#[must_use]
pub fn for_csv_field(text: &str) -> String {
    sanitize(text, SanitizeContext::CsvField)
}
