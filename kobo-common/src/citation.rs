use crate::{Annotation, BookMetadata, CitationStyle};
use chrono::{Datelike, NaiveDateTime};

/// MLA month abbreviations; May, June and July are written in full.
const MLA_MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.", "Dec.",
];

pub const UNKNOWN_DATE: &str = "Unknown Date";

const DELIMITER: &str = "====================================";

// Older firmware stores `DateCreated` space separated, newer firmware as ISO 8601.
const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub fn parse_date_created(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim().trim_end_matches('Z');
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Renders a `DateCreated` value as an MLA date, e.g. `21 Feb. 2024`.
pub fn mla_date(raw: &str) -> Option<String> {
    let date = parse_date_created(raw)?;
    Some(format!(
        "{} {} {}",
        date.day(),
        MLA_MONTHS[date.month0() as usize],
        date.year()
    ))
}

/// Formats one annotation as the text appended to its book's file.
pub fn render(style: CitationStyle, annotation: &Annotation, metadata: &BookMetadata) -> String {
    match style {
        CitationStyle::Plain => format!("{}\n", annotation.text()),
        CitationStyle::Mla => render_mla(annotation, metadata),
    }
}

fn render_mla(annotation: &Annotation, metadata: &BookMetadata) -> String {
    let date = annotation
        .date_created
        .as_deref()
        .and_then(mla_date)
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    let mut record = format!(
        "{DELIMITER}\n\"{}\" ({}, {}).\n",
        annotation.text(),
        metadata.author,
        metadata.title
    );

    if let Some(note) = annotation.note() {
        record.push_str(&format!("[User Note] {note}\n"));
    }

    record.push_str(&format!("[Highlighted on: {date}]\n{DELIMITER}\n\n"));
    record
}
