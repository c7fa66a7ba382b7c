//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use crudgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CrudgenError, CrudgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CrudgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_into_created_directories() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("admin/products/forms");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("form.blade.php"), "<form/>").unwrap();

        assert!(fs.exists(&dir.join("form.blade.php")));
        assert_eq!(
            std::fs::read_to_string(dir.join("form.blade.php")).unwrap(),
            "<form/>"
        );
    }

    #[test]
    fn write_overwrites_existing_content() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("index.blade.php");

        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();

        assert_eq!(std::fs::read_to_string(file).unwrap(), "new");
    }

    #[test]
    fn write_into_missing_directory_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .write_file(&temp.path().join("missing/index.blade.php"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
