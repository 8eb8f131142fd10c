use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("Kobo eReader is not mounted at {}. Please check your device.", .0.display())]
    NotMounted(PathBuf),

    #[error("Failed to create export directory {}: {source}", .path.display())]
    ExportDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Export path {} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Database error {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid filename sanitizer {0}")]
    Sanitizer(#[from] regex::Error),
}

impl ExportError {
    /// Whether this failure should terminate the process with a failing exit
    /// status rather than just end the export early.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExportError::NotMounted(_)
                | ExportError::ExportDirectory { .. }
                | ExportError::NotADirectory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preconditions_are_fatal() {
        assert!(ExportError::NotMounted("/Volumes/KOBOeReader".into()).is_fatal());
        assert!(ExportError::NotADirectory("exported_annotations".into()).is_fatal());
        assert!(!ExportError::Database(sqlx::Error::RowNotFound).is_fatal());
    }

    #[test]
    fn mount_diagnostic_names_the_path() {
        let message = ExportError::NotMounted("/Volumes/KOBOeReader".into()).to_string();
        assert!(message.contains("/Volumes/KOBOeReader"));
    }
}
