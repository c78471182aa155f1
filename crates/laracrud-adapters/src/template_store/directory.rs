//! User stubs read from a directory of `<stub_name>.stub` files.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use laracrud_core::{
    application::{ports::TemplateStore, ApplicationError},
    domain::{ArtifactKind, Template},
    error::CrudResult,
};

use crate::filesystem::map_io_error;

/// Stub overrides on disk. Missing stubs are reported as not found so a
/// [`super::LayeredStore`] can fall through to the next store.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Artifact kinds this directory overrides.
    ///
    /// Files that do not match a known stub name are logged and ignored.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn overrides(&self) -> Vec<ArtifactKind> {
        let mut kinds = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("stub") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            match ArtifactKind::ALL.into_iter().find(|k| k.stub_name() == stem) {
                Some(kind) => {
                    debug!(%kind, path = %path.display(), "stub override found");
                    kinds.push(kind);
                }
                None => warn!(path = %path.display(), "ignoring unrecognised stub file"),
            }
        }

        kinds
    }
}

impl TemplateStore for DirectoryStore {
    fn load(&self, kind: ArtifactKind) -> CrudResult<Template> {
        let path = self.dir.join(kind.stub_file_name());
        if !path.is_file() {
            return Err(ApplicationError::TemplateNotFound {
                stub: kind.stub_name().into(),
                source_name: self.source_name(),
            }
            .into());
        }

        let text = std::fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read stub"))?;
        Ok(Template::from_file(kind, path, text))
    }

    fn source_name(&self) -> String {
        self.dir.display().to_string()
    }
}
