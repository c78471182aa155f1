//! Override chain: the first store that has a stub wins.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use laracrud_core::{
    application::{ports::TemplateStore, ApplicationError},
    domain::{ArtifactKind, Template},
    error::{CrudError, CrudResult},
};

use super::{BuiltinStore, DirectoryStore};

/// Conventional location of published stubs inside a Laravel project.
pub const PROJECT_STUBS_DIR: &str = "stubs/laracrud";

pub struct LayeredStore {
    layers: Vec<Box<dyn TemplateStore>>,
}

impl LayeredStore {
    pub fn new(layers: Vec<Box<dyn TemplateStore>>) -> Self {
        Self { layers }
    }

    /// Stub resolution for a project, in priority order:
    ///
    /// 1. `explicit` (`--stubs`, config or environment), if given
    /// 2. `<project_root>/stubs/laracrud`, if it exists
    /// 3. the built-in stubs
    pub fn for_project(explicit: Option<&Path>, project_root: &Path) -> Self {
        let mut layers: Vec<Box<dyn TemplateStore>> = Vec::with_capacity(3);

        for dir in candidate_dirs(explicit, project_root) {
            let store = DirectoryStore::new(&dir);
            let overrides = store.overrides();
            if overrides.is_empty() {
                debug!(dir = %dir.display(), "no stub overrides");
                continue;
            }
            info!(dir = %dir.display(), count = overrides.len(), "using stub overrides");
            layers.push(Box::new(store));
        }

        layers.push(Box::new(BuiltinStore::new()));
        Self::new(layers)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

fn candidate_dirs(explicit: Option<&Path>, project_root: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(2);
    if let Some(dir) = explicit {
        dirs.push(dir.to_path_buf());
    }
    let project = project_root.join(PROJECT_STUBS_DIR);
    if !dirs.contains(&project) {
        dirs.push(project);
    }
    dirs
}

impl TemplateStore for LayeredStore {
    fn load(&self, kind: ArtifactKind) -> CrudResult<Template> {
        for layer in &self.layers {
            match layer.load(kind) {
                Err(CrudError::Application(ApplicationError::TemplateNotFound { .. })) => continue,
                other => return other,
            }
        }

        Err(ApplicationError::TemplateNotFound {
            stub: kind.stub_name().into(),
            source_name: self.source_name(),
        }
        .into())
    }

    fn source_name(&self) -> String {
        self.layers
            .iter()
            .map(|l| l.source_name())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}
