use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends rendered annotations to `<export_dir>/<stem>.txt` files.
pub struct AnnotationWriter {
    export_dir: PathBuf,
}

impl AnnotationWriter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn path_for(&self, stem: &str) -> PathBuf {
        // Stems are derived from volume ids and often contain dots, so the
        // extension is appended rather than set.
        self.export_dir.join(format!("{stem}.txt"))
    }

    /// Opens `path` in append mode, writes `record` and closes it again.
    pub fn append(&self, path: &Path, record: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(record.as_bytes())?;
        file.flush()
    }
}
