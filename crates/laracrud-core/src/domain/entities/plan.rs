use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::{artifact::ArtifactKind, names::NameSet, routes::RouteBlock},
    error::DomainError,
};

/// Everything one generator run will write, fully rendered.
///
/// Paths are relative to the project root. Contains no behaviour beyond
/// validation; the service decides how (and whether) to write it.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub names: NameSet,
    pub directories: Vec<PathBuf>,
    pub files: Vec<RenderedFile>,
    pub routes: RouteBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFile {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

impl RenderedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

impl GenerationPlan {
    pub fn new(names: NameSet, routes: RouteBlock) -> Self {
        Self {
            names,
            directories: Vec::new(),
            files: Vec::new(),
            routes,
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.directories.push(path.into());
    }

    pub fn add_file(&mut self, kind: ArtifactKind, path: impl Into<PathBuf>, content: String) {
        self.files.push(RenderedFile {
            kind,
            path: path.into(),
            content,
        });
    }

    pub fn file(&self, kind: ArtifactKind) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.kind == kind)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();

        for path in self.directories.iter().chain(self.files.iter().map(|f| &f.path)) {
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
            if path.components().any(|c| c == Component::ParentDir) {
                return Err(DomainError::PathEscapesRoot {
                    path: path.display().to_string(),
                });
            }
        }

        for file in &self.files {
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }

        Ok(())
    }
}
