use crate::citation;
use crate::device::{ensure_export_dir, ensure_mounted};
use crate::sanitize::FilenameSanitizer;
use crate::writer::AnnotationWriter;
use crate::{BookMetadata, CitationStyle, Database, ExportConfig, ExportError};
use futures::TryStreamExt;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What a single export run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Bookmark rows returned by the annotation query.
    pub rows: usize,
    pub written: usize,
    pub failed_writes: usize,
    /// Records appended to each file during this run.
    pub files: BTreeMap<PathBuf, usize>,
}

pub struct Exporter {
    style: CitationStyle,
    sanitizer: FilenameSanitizer,
    writer: AnnotationWriter,
}

impl Exporter {
    pub fn new(style: CitationStyle, export_dir: impl Into<PathBuf>) -> Result<Self, ExportError> {
        Ok(Exporter {
            style,
            sanitizer: FilenameSanitizer::new()?,
            writer: AnnotationWriter::new(export_dir),
        })
    }

    /// Streams annotations out of `db` and appends each one to its book's file.
    ///
    /// Write failures are logged and counted; only a failing query ends the
    /// export early.
    pub async fn export(&self, db: &Database) -> Result<ExportSummary, ExportError> {
        let mut summary = ExportSummary::default();
        let mut annotations = db.annotations(self.style);

        while let Some(annotation) = annotations.try_next().await? {
            summary.rows += 1;

            let metadata = match self.style {
                CitationStyle::Mla => db.book_metadata(annotation.volume_id()).await,
                CitationStyle::Plain => BookMetadata::default(),
            };

            let record = citation::render(self.style, &annotation, &metadata);
            let path = self
                .writer
                .path_for(&self.sanitizer.sanitize(annotation.volume_id()));

            debug!("Attempting to write annotation to file: {:?}", path);

            match self.writer.append(&path, &record) {
                Ok(()) => {
                    debug!("Exported annotation to {:?}", path);
                    summary.written += 1;
                    *summary.files.entry(path).or_default() += 1;
                }
                Err(e) => {
                    warn!("Error writing annotation file {:?}: {}", path, e);
                    summary.failed_writes += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// Runs a whole export: device and directory preconditions, then the
/// annotation pass over the reader database.
///
/// The database is closed before returning, whether or not the pass finished.
pub async fn export(config: &ExportConfig) -> Result<ExportSummary, ExportError> {
    ensure_mounted(&config.mount_point)?;
    info!(
        "Kobo eReader detected! Extracting annotations ({:?} style)...",
        config.style
    );

    ensure_export_dir(&config.export_dir)?;

    let exporter = Exporter::new(config.style, &config.export_dir)?;
    let db = Database::open(&config.database_path).await?;

    let result = exporter.export(&db).await;
    db.close().await;

    let summary = result?;
    info!(
        "Exported {} of {} annotations across {} files ({} failed)",
        summary.written,
        summary.rows,
        summary.files.len(),
        summary.failed_writes
    );

    Ok(summary)
}
