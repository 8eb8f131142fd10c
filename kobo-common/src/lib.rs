pub mod citation;
pub mod config;
pub mod db;
pub mod device;
pub mod error;
pub mod export;
pub mod library;
pub mod sanitize;
pub mod writer;

// Re-export commonly used types
pub use config::{CitationStyle, ExportConfig};
pub use db::Database;
pub use error::ExportError;
pub use export::{export, ExportSummary, Exporter};
pub use library::{Annotation, BookMetadata};
