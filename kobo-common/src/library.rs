use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Longest title, author or file stem carried through an export, in characters.
pub const MAX_FIELD_CHARS: usize = 255;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A highlighted passage read from the device's `Bookmark` table.
///
/// Columns are read as raw bytes so a row holding invalid UTF-8 is still
/// exported, with the bad sequences replaced by U+FFFD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub text: Option<String>,
    pub volume_id: Option<String>,
    pub note: Option<String>,
    pub date_created: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Annotation {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Annotation {
            text: text_column(row, "Text")?,
            volume_id: text_column(row, "VolumeID")?,
            // The plain query does not select these.
            note: optional_text_column(row, "Annotation")?,
            date_created: optional_text_column(row, "DateCreated")?,
        })
    }
}

/// Reads a TEXT column without requiring it to be valid UTF-8.
pub fn text_column(row: &SqliteRow, column: &str) -> Result<Option<String>, sqlx::Error> {
    let bytes: Option<Vec<u8>> = row.try_get(column)?;
    Ok(bytes.map(lossy_utf8))
}

fn optional_text_column(row: &SqliteRow, column: &str) -> Result<Option<String>, sqlx::Error> {
    match text_column(row, column) {
        Err(sqlx::Error::ColumnNotFound(_)) => Ok(None),
        result => result,
    }
}

pub fn lossy_utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

impl Annotation {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn volume_id(&self) -> &str {
        self.volume_id.as_deref().unwrap_or_default()
    }

    /// The user's note, if they wrote one.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
}

impl BookMetadata {
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        BookMetadata {
            title: title
                .map(|t| truncate(&t, MAX_FIELD_CHARS))
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            author: author
                .map(|a| truncate(&a, MAX_FIELD_CHARS))
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        }
    }
}

impl Default for BookMetadata {
    fn default() -> Self {
        BookMetadata::new(None, None)
    }
}

/// Cuts `value` down to at most `max` characters, never splitting a code point.
pub fn truncate(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((end, _)) => value[..end].to_string(),
        None => value.to_string(),
    }
}
