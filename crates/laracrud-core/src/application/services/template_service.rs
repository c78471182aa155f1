//! Template Service - stub catalog and publishing.
//!
//! Separated from ScaffoldService for single responsibility.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::{tokens, ArtifactKind, RenderContext, TemplateOrigin},
    error::CrudResult,
};

/// Information about one stub for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubInfo {
    pub kind: ArtifactKind,
    pub stub: String,
    pub output: &'static str,
    pub origin: String,
    /// Identifier-shaped `{{tokens}}` the generator does not provide.
    pub unknown_tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishOutcome {
    Written,
    Kept,
}

/// Service for stub operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    pub fn source_name(&self) -> String {
        self.store.source_name()
    }

    /// Every artifact kind with the stub that currently backs it.
    pub fn catalog(&self) -> CrudResult<Vec<StubInfo>> {
        let context = tokens::ALL
            .iter()
            .fold(RenderContext::new(), |ctx, token| ctx.with_variable(*token, ""));

        ArtifactKind::ALL
            .into_iter()
            .map(|kind| {
                let template = self.store.load(kind)?;
                Ok(StubInfo {
                    kind,
                    stub: kind.stub_file_name(),
                    output: kind.path_pattern(),
                    origin: template.origin.to_string(),
                    unknown_tokens: context.scan(template.text()).unknown.into_iter().collect(),
                })
            })
            .collect()
    }

    /// Copy every stub into `dir` as `<stub>.stub`.
    ///
    /// Existing files are kept unless `force` is set.
    #[instrument(skip_all, fields(dir = %dir.display(), force))]
    pub fn publish(
        &self,
        filesystem: &dyn Filesystem,
        dir: &Path,
        force: bool,
    ) -> CrudResult<Vec<(PathBuf, PublishOutcome)>> {
        filesystem.create_dir_all(dir)?;

        let mut published = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            let template = self.store.load(kind)?;
            let path = dir.join(kind.stub_file_name());

            let outcome = if filesystem.exists(&path) && !force {
                PublishOutcome::Kept
            } else {
                filesystem.write_file(&path, template.text())?;
                PublishOutcome::Written
            };
            published.push((path, outcome));
        }

        info!(
            written = published
                .iter()
                .filter(|(_, o)| *o == PublishOutcome::Written)
                .count(),
            "Stubs published"
        );
        Ok(published)
    }

    /// Whether any stub is overridden by a file on disk.
    pub fn has_overrides(&self) -> CrudResult<bool> {
        for kind in ArtifactKind::ALL {
            if matches!(self.store.load(kind)?.origin, TemplateOrigin::File(_)) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateStore};
    use crate::domain::Template;

    fn store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|kind| {
            if kind == ArtifactKind::Model {
                Ok(Template::from_file(kind, "/stubs/model.stub", "{{singular}} {{author}}".into()))
            } else {
                Ok(Template::builtin(kind, "{{singular}}"))
            }
        });
        store
    }

    #[test]
    fn catalog_covers_every_kind_and_flags_unknown_tokens() {
        let service = TemplateService::new(Box::new(store()));
        let catalog = service.catalog().unwrap();
        assert_eq!(catalog.len(), 12);

        let model = catalog.iter().find(|s| s.kind == ArtifactKind::Model).unwrap();
        assert_eq!(model.stub, "model.stub");
        assert_eq!(model.unknown_tokens, ["author"]);
        assert_eq!(model.origin, "/stubs/model.stub");
        assert!(service.has_overrides().unwrap());
    }

    #[test]
    fn publish_keeps_existing_without_force() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .returning(|p| p.ends_with("controller.stub"));
        fs.expect_write_file().times(11).returning(|_, _| Ok(()));

        let service = TemplateService::new(Box::new(store()));
        let published = service.publish(&fs, Path::new("stubs"), false).unwrap();
        let kept: Vec<_> = published
            .iter()
            .filter(|(_, o)| *o == PublishOutcome::Kept)
            .collect();
        assert_eq!(kept.len(), 1);
        assert!(kept[0].0.ends_with("controller.stub"));
    }

    #[test]
    fn publish_with_force_overwrites() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().times(12).returning(|_, _| Ok(()));

        let service = TemplateService::new(Box::new(store()));
        let published = service.publish(&fs, Path::new("stubs"), true).unwrap();
        assert!(published.iter().all(|(_, o)| *o == PublishOutcome::Written));
    }
}
