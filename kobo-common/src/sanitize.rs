use crate::library::{truncate, MAX_FIELD_CHARS};
use regex::Regex;

/// Turns a `VolumeID` into a file stem by replacing path separators and
/// colons with underscores.
///
/// Other reserved characters pass through untouched.
pub struct FilenameSanitizer {
    unsafe_chars: Regex,
}

impl FilenameSanitizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(FilenameSanitizer {
            unsafe_chars: Regex::new(r"[/\\:]")?,
        })
    }

    pub fn sanitize(&self, volume_id: &str) -> String {
        let stem = truncate(volume_id, MAX_FIELD_CHARS);
        self.unsafe_chars.replace_all(&stem, "_").into_owned()
    }
}
