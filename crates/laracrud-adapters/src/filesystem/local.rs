//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use laracrud_core::{
    application::{ports::Filesystem, ApplicationError},
    error::{CrudError, CrudResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CrudResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &str) -> CrudResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for appending"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn read_to_string(&self, path: &Path) -> CrudResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CrudError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
