use std::path::{Path, PathBuf};

use tracing::debug;

use laracrud_core::{
    application::{
        ports::{Filesystem, ProjectManifest},
        ApplicationError,
    },
    domain::AutoloadManifest,
    error::{CrudError, CrudResult},
};

pub const MANIFEST_FILE: &str = "composer.json";

/// `composer.json` at a project root, read and written through a
/// [`Filesystem`] so dry runs and tests never touch disk.
pub struct ComposerManifest<F: Filesystem> {
    filesystem: F,
}

impl<F: Filesystem> ComposerManifest<F> {
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }

    fn path(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }
}

impl<F: Filesystem> ProjectManifest for ComposerManifest<F> {
    fn exists(&self, root: &Path) -> bool {
        self.filesystem.exists(&Self::path(root))
    }

    fn load(&self, root: &Path) -> CrudResult<AutoloadManifest> {
        let path = Self::path(root);
        let text = self.filesystem.read_to_string(&path).map_err(|e| manifest_error(&path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "composer.json loaded");
        Ok(AutoloadManifest::parse(&text)?)
    }

    fn save(&self, root: &Path, manifest: &AutoloadManifest) -> CrudResult<()> {
        let path = Self::path(root);
        let text = manifest.to_pretty_string()?;
        self.filesystem
            .write_file(&path, &text)
            .map_err(|e| manifest_error(&path, e))
    }
}

fn manifest_error(path: &Path, e: CrudError) -> CrudError {
    ApplicationError::ManifestError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
