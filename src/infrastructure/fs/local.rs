//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temp file in the destination directory and are renamed
/// into place, so readers never observe a half-written BOQ or drawing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| with_path(e, path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| with_path(e, parent))?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| with_path(e, parent))?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)
            .map_err(|e| FsError::Other(format!("{}: {}", path.display(), e.error)))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn with_path(err: std::io::Error, path: &Path) -> FsError {
    match FsError::from(err) {
        FsError::NotFound(_) => FsError::NotFound(path.to_path_buf()),
        FsError::PermissionDenied(_) => FsError::PermissionDenied(path.to_path_buf()),
        other => other,
    }
}
