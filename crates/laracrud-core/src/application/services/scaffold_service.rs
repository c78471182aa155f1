//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generator pipeline:
//! 1. Validate input and check the project root
//! 2. Render all twelve artifacts in memory
//! 3. Create directories and write files per the overwrite policy
//! 4. Emit routes, patch `composer.json`, refresh the autoloader
//!
//! Nothing is written until every stub has loaded and rendered.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, trace, warn};
use uuid::Uuid;

use crate::{
    application::{
        ports::{AutoloadRefresher, Clock, Filesystem, ProjectManifest, TemplateStore},
        services::report::{
            AutoloadOutcome, FileOutcome, FileReport, GenerationReport, ManifestOutcome,
            RoutesOutcome,
        },
        ApplicationError,
    },
    domain::{
        ArtifactKind, DomainError, DomainValidator as validator, GenerationPlan,
        GenerationRequest, NameSet, NamingStrategy, OverwritePolicy, Psr4Entry, RenderContext,
        RouteBlock, RoutesStrategy, ROUTES_FILE_HEADER,
    },
    error::CrudResult,
};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const DEFAULT_ROUTES_FILE: &str = "routes/web.php";
pub const DEFAULT_ROOT_NAMESPACE: &str = "App\\";

/// Per-run knobs. Everything the CLI flags and config file can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Laravel project root (contains `composer.json`).
    pub root: PathBuf,
    pub root_namespace: String,
    pub naming: NamingStrategy,
    pub on_conflict: OverwritePolicy,
    pub routes: RoutesStrategy,
    /// Relative to `root` unless absolute.
    pub routes_file: PathBuf,
    /// chrono strftime pattern for the migration file name.
    pub timestamp_format: String,
    pub refresh_autoload: bool,
    /// Fail on unknown `{{token}}` placeholders instead of leaving them.
    pub strict_tokens: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            root_namespace: DEFAULT_ROOT_NAMESPACE.into(),
            naming: NamingStrategy::default(),
            on_conflict: OverwritePolicy::default(),
            routes: RoutesStrategy::default(),
            routes_file: PathBuf::from(DEFAULT_ROUTES_FILE),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
            refresh_autoload: true,
            strict_tokens: false,
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    manifest: Box<dyn ProjectManifest>,
    refresher: Box<dyn AutoloadRefresher>,
    clock: Box<dyn Clock>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use laracrud_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     filesystem, // impl Filesystem
    ///     manifest,   // impl ProjectManifest
    ///     refresher,  // impl AutoloadRefresher
    ///     clock,      // impl Clock
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        manifest: Box<dyn ProjectManifest>,
        refresher: Box<dyn AutoloadRefresher>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store,
            filesystem,
            manifest,
            refresher,
            clock,
        }
    }

    /// Render every artifact without touching the project.
    #[instrument(
        skip_all,
        fields(model = %request.model_name(), namespace = %request.namespace())
    )]
    pub fn plan(
        &self,
        request: &GenerationRequest,
        settings: &GeneratorSettings,
    ) -> CrudResult<GenerationPlan> {
        let names = NameSet::derive(request);
        debug!(singular = %names.singular, plural = %names.plural, snake_plural = %names.snake_plural, "Names derived");

        let timestamp = self.timestamp(&settings.timestamp_format)?;
        let context = RenderContext::for_names(&names, settings.naming, &settings.root_namespace);
        let routes = RouteBlock::build(&names, settings.naming, &settings.root_namespace);

        let mut plan = GenerationPlan::new(names, routes);
        for dir in ArtifactKind::required_directories(&plan.names, settings.naming) {
            plan.add_directory(dir);
        }

        for kind in ArtifactKind::ALL {
            let template = self.store.load(kind)?;
            template.validate()?;

            trace!(
                stub = kind.stub_name(),
                tokens = ?context.scan(template.text()).known,
                "Substituting tokens"
            );
            let content = if settings.strict_tokens {
                context.render_strict(kind.stub_name(), template.text())?
            } else {
                let unknown = context.scan(template.text()).unknown;
                if !unknown.is_empty() {
                    debug!(stub = kind.stub_name(), ?unknown, "Leaving unknown tokens in place");
                }
                context.render(template.text())
            };

            let path = kind.output_path(&plan.names, settings.naming, &timestamp);
            debug!(%kind, path = %path.display(), origin = %template.origin, "Rendered");
            plan.add_file(kind, path, content);
        }

        validator::validate_plan(&plan)?;
        Ok(plan)
    }

    /// Run the whole pipeline against the project at `settings.root`.
    #[instrument(
        skip_all,
        fields(
            model = %request.model_name(),
            namespace = %request.namespace(),
            root = %settings.root.display()
        )
    )]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        settings: &GeneratorSettings,
    ) -> CrudResult<GenerationReport> {
        let root = settings.root.as_path();

        if !self.manifest.exists(root) {
            return Err(ApplicationError::NotALaravelProject {
                root: root.to_path_buf(),
            }
            .into());
        }

        let plan = self.plan(request, settings)?;
        info!(
            files = plan.files.len(),
            directories = plan.directories.len(),
            "Plan rendered"
        );

        let existing = self.existing_targets(root, &plan);
        if settings.on_conflict == OverwritePolicy::Fail && !existing.is_empty() {
            return Err(ApplicationError::FileConflict { paths: existing }.into());
        }

        for dir in &plan.directories {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }
        let files = self.write_files(root, &plan, &existing, settings.on_conflict)?;

        let routes_outcome = self.emit_routes(root, &plan.routes, settings)?;
        let manifest = self.patch_manifest(root, &settings.root_namespace)?;
        let autoload = self.refresh_autoload(root, settings.refresh_autoload);

        let report = GenerationReport {
            run_id: Uuid::new_v4(),
            names: plan.names,
            files,
            routes: plan.routes,
            routes_outcome,
            manifest,
            autoload,
        };
        info!(run_id = %report.run_id, "{}", report.success_message());
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Render the migration prefix. It becomes part of a file name, so path
    /// separators and `..` are rejected.
    fn timestamp(&self, format: &str) -> CrudResult<String> {
        let invalid = || DomainError::InvalidTimestampFormat {
            format: format.to_string(),
        };

        let mut out = String::new();
        write!(out, "{}", self.clock.now().format(format)).map_err(|_| invalid())?;
        if out.contains(['/', '\\']) || out.contains("..") {
            return Err(invalid().into());
        }
        Ok(out)
    }

    fn existing_targets(&self, root: &Path, plan: &GenerationPlan) -> Vec<PathBuf> {
        plan.paths()
            .filter(|p| self.filesystem.exists(&root.join(p)))
            .map(Path::to_path_buf)
            .collect()
    }

    fn write_files(
        &self,
        root: &Path,
        plan: &GenerationPlan,
        existing: &[PathBuf],
        policy: OverwritePolicy,
    ) -> CrudResult<Vec<FileReport>> {
        let mut reports = Vec::with_capacity(plan.files.len());

        for file in &plan.files {
            let exists = existing.contains(&file.path);
            let outcome = match (exists, policy) {
                (false, _) => FileOutcome::Created,
                (true, OverwritePolicy::Skip) => FileOutcome::Skipped,
                (true, _) => FileOutcome::Overwritten,
            };

            if outcome == FileOutcome::Skipped {
                warn!(path = %file.path.display(), "Exists, skipping");
            } else {
                self.filesystem
                    .write_file(&root.join(&file.path), &file.content)?;
                debug!(path = %file.path.display(), ?outcome, "Written");
            }

            reports.push(FileReport {
                kind: file.kind,
                path: file.path.clone(),
                outcome,
            });
        }

        Ok(reports)
    }

    fn emit_routes(
        &self,
        root: &Path,
        routes: &RouteBlock,
        settings: &GeneratorSettings,
    ) -> CrudResult<RoutesOutcome> {
        if settings.routes == RoutesStrategy::Print {
            return Ok(RoutesOutcome::Printed);
        }

        let path = root.join(&settings.routes_file);
        if !self.filesystem.exists(&path) {
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            let content = format!("{ROUTES_FILE_HEADER}{}", routes.as_str());
            self.filesystem.write_file(&path, &content)?;
            info!(path = %path.display(), "Routes file created");
            return Ok(RoutesOutcome::Appended { path });
        }

        let current = self.filesystem.read_to_string(&path)?;
        if routes.is_present_in(&current) {
            info!(path = %path.display(), "Routes already present");
            return Ok(RoutesOutcome::AlreadyPresent { path });
        }

        self.filesystem.append_file(&path, routes.as_str())?;
        info!(path = %path.display(), "Routes appended");
        Ok(RoutesOutcome::Appended { path })
    }

    fn patch_manifest(&self, root: &Path, root_namespace: &str) -> CrudResult<ManifestOutcome> {
        let mut manifest = self.manifest.load(root)?;
        let added = manifest.ensure_psr4(&Psr4Entry::required(root_namespace))?;

        if added.is_empty() {
            debug!("composer.json already has the autoload entries");
            return Ok(ManifestOutcome::Unchanged);
        }

        self.manifest.save(root, &manifest)?;
        info!(added = added.len(), "composer.json patched");
        Ok(ManifestOutcome::Patched { added })
    }

    fn refresh_autoload(&self, root: &Path, enabled: bool) -> AutoloadOutcome {
        if !enabled {
            return AutoloadOutcome::Disabled;
        }
        match self.refresher.refresh(root) {
            Ok(()) => {
                info!(command = %self.refresher.describe(), "Autoload refreshed");
                AutoloadOutcome::Refreshed
            }
            Err(e) => {
                warn!(error = %e, "Autoload refresh failed");
                AutoloadOutcome::Failed(e.to_string())
            }
        }
    }
}
