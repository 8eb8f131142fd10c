use crate::ExportError;
use std::fs::DirBuilder;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Whether `mount_point` is a directory we can list.
pub fn is_mounted(mount_point: &Path) -> bool {
    std::fs::read_dir(mount_point).is_ok()
}

pub fn ensure_mounted(mount_point: &Path) -> Result<(), ExportError> {
    if is_mounted(mount_point) {
        Ok(())
    } else {
        Err(ExportError::NotMounted(mount_point.to_path_buf()))
    }
}

/// Creates the export directory (mode `0755`) unless it already exists.
pub fn ensure_export_dir(path: &Path) -> Result<(), ExportError> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            debug!("Export directory {:?} already exists", path);
            Ok(())
        }
        Ok(_) => Err(ExportError::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let mut builder = DirBuilder::new();

            #[cfg(unix)]
            {
                use std::os::unix::fs::DirBuilderExt;
                builder.mode(0o755);
            }

            builder
                .create(path)
                .map_err(|source| ExportError::ExportDirectory {
                    path: path.to_path_buf(),
                    source,
                })?;

            info!("Created export directory: {}", path.display());
            Ok(())
        }
        Err(source) => Err(ExportError::ExportDirectory {
            path: path.to_path_buf(),
            source,
        }),
    }
}
