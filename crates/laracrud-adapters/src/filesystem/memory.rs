//! In-memory filesystem adapter for tests and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use laracrud_core::{
    application::{ports::Filesystem, ApplicationError},
    error::CrudResult,
};

/// In-memory filesystem. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> CrudResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)?;
        Ok(self)
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read(&self) -> CrudResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> CrudResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl MemoryFilesystemInner {
    fn ensure_parent(&self, path: &Path) -> CrudResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CrudResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudResult<()> {
        let mut inner = self.write()?;
        inner.ensure_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> CrudResult<()> {
        let mut inner = self.write()?;
        inner.ensure_parent(path)?;
        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CrudResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
