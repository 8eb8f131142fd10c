use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub const DEFAULT_MOUNT_POINT: &str = "/Volumes/KOBOeReader";

/// Location of the reader database relative to the mount point.
pub const DATABASE_RELATIVE_PATH: &str = ".kobo/KoboReader.sqlite";

/// How each annotation is rendered into its book's export file.
#[derive(ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CitationStyle {
    /// The highlighted text only, one passage per line
    #[default]
    Plain,

    /// A delimited MLA citation with author, title, note and highlight date
    Mla,
}

impl CitationStyle {
    pub fn default_export_dir(self) -> &'static str {
        match self {
            CitationStyle::Plain => "exported_annotations",
            CitationStyle::Mla => "exported_annotations_MLA",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub mount_point: PathBuf,
    pub database_path: PathBuf,
    pub export_dir: PathBuf,
    pub style: CitationStyle,
}

impl ExportConfig {
    /// Configuration for a device mounted at `mount_point`, with the database
    /// and export directory in their usual places.
    pub fn new(mount_point: impl Into<PathBuf>, style: CitationStyle) -> Self {
        let mount_point = mount_point.into();
        ExportConfig {
            database_path: database_path_for(&mount_point),
            export_dir: PathBuf::from(style.default_export_dir()),
            mount_point,
            style,
        }
    }

    pub fn with_database_path(mut self, database_path: impl Into<PathBuf>) -> Self {
        self.database_path = database_path.into();
        self
    }

    pub fn with_export_dir(mut self, export_dir: impl Into<PathBuf>) -> Self {
        self.export_dir = export_dir.into();
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig::new(DEFAULT_MOUNT_POINT, CitationStyle::default())
    }
}

pub fn database_path_for(mount_point: &Path) -> PathBuf {
    mount_point.join(DATABASE_RELATIVE_PATH)
}
