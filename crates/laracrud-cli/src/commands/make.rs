//! Implementation of the `laracrud make` command.
//!
//! Responsibility: merge CLI flags over config into `GeneratorSettings`,
//! wire the adapters into a `ScaffoldService`, and display the report.
//! No generation logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use laracrud_adapters::{
    ComposerManifest, ComposerRefresher, LayeredStore, LocalFilesystem, NoopRefresher,
    SystemClock,
};
use laracrud_core::{
    application::{
        ports::AutoloadRefresher, AutoloadOutcome, FileOutcome, GenerationReport,
        GeneratorSettings, ManifestOutcome, RoutesOutcome, ScaffoldService,
        services::MIGRATE_HINT,
    },
    domain::{ArtifactKind, GenerationPlan, GenerationRequest, NameSet, RouteBlock},
};

use crate::{
    cli::MakeArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `laracrud make` command.
///
/// 1. Validate the model name and namespace
/// 2. Resolve settings (flags > config > defaults)
/// 3. Build the service from the local adapters
/// 4. Plan only (`--dry-run`) or run the full pipeline
/// 5. Print files, routes, manifest changes and warnings
#[instrument(skip_all, fields(model = %args.name, namespace = %args.namespace))]
pub fn execute(args: MakeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = GenerationRequest::new(&args.name, &args.namespace)?;
    let settings = resolve_settings(&args, &config);
    if !settings.root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("project root '{}' is not a directory", settings.root.display()),
            source: None,
        });
    }
    let stubs_dir = args.stubs.clone().or_else(|| config.templates.stubs_dir.clone());

    debug!(
        root = %settings.root.display(),
        naming = %settings.naming,
        on_conflict = %settings.on_conflict,
        routes = %settings.routes,
        stubs = ?stubs_dir,
        "Settings resolved"
    );

    let refresher: Box<dyn AutoloadRefresher> = if settings.refresh_autoload && !args.dry_run {
        Box::new(ComposerRefresher::from_command_line(&config.autoload.command))
    } else {
        Box::new(NoopRefresher)
    };

    let service = ScaffoldService::new(
        Box::new(LayeredStore::for_project(stubs_dir.as_deref(), &settings.root)),
        Box::new(LocalFilesystem::new()),
        Box::new(ComposerManifest::new(LocalFilesystem::new())),
        refresher,
        Box::new(SystemClock),
    );

    if args.dry_run {
        let plan = service
            .plan(&request, &settings)
            .with_cli_context(|| "planning generation")?;
        return show_plan(&plan, &settings.root, &output);
    }

    info!(root = %settings.root.display(), "Generation started");
    let report = service
        .generate(&request, &settings)
        .with_cli_context(|| "generating CRUD")?;

    show_report(&report, &settings.root, &output)
}

/// Flags override config; config overrides the built-in defaults.
pub fn resolve_settings(args: &MakeArgs, config: &AppConfig) -> GeneratorSettings {
    let generator = &config.generator;
    GeneratorSettings {
        root: args.root.clone().unwrap_or_else(|| PathBuf::from(".")),
        root_namespace: generator.root_namespace.clone(),
        naming: args.naming.map_or(generator.naming, Into::into),
        on_conflict: args.on_conflict.map_or(generator.on_conflict, Into::into),
        routes: args.routes.map_or(config.routes.strategy, Into::into),
        routes_file: args
            .routes_file
            .clone()
            .unwrap_or_else(|| config.routes.file.clone()),
        timestamp_format: generator.timestamp_format.clone(),
        refresh_autoload: config.autoload.refresh && !args.no_autoload,
        strict_tokens: args.strict || generator.strict_tokens,
    }
}

// ── dry run ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PlannedFile<'a> {
    kind: ArtifactKind,
    path: &'a Path,
    bytes: usize,
    exists: bool,
}

#[derive(Debug, Serialize)]
struct DryRun<'a> {
    dry_run: bool,
    names: &'a NameSet,
    directories: &'a [PathBuf],
    files: Vec<PlannedFile<'a>>,
    routes: &'a RouteBlock,
}

fn show_plan(plan: &GenerationPlan, root: &Path, output: &OutputManager) -> CliResult<()> {
    let files: Vec<_> = plan
        .files
        .iter()
        .map(|f| PlannedFile {
            kind: f.kind,
            path: &f.path,
            bytes: f.size(),
            exists: root.join(&f.path).exists(),
        })
        .collect();

    if output.is_json() {
        output.json(&DryRun {
            dry_run: true,
            names: &plan.names,
            directories: &plan.directories,
            files,
            routes: &plan.routes,
        })?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would generate CRUD for {} in {}",
        plan.names.singular,
        root.display()
    ))?;
    for file in &files {
        let verb = if file.exists { "overwrite" } else { "create" };
        output.print(&format!(
            "  {verb:<9} {} ({} bytes)",
            file.path.display(),
            file.bytes
        ))?;
    }
    print_routes(&plan.routes, output)?;
    Ok(())
}

// ── report ────────────────────────────────────────────────────────────────────

fn show_report(report: &GenerationReport, root: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    for file in &report.files {
        let line = format!("{} {}", file.kind, file.path.display());
        match file.outcome {
            FileOutcome::Created => output.success(&format!("Created {line}"))?,
            FileOutcome::Overwritten => output.success(&format!("Overwrote {line}"))?,
            FileOutcome::Skipped => output.print(&format!("  kept {line}"))?,
        }
    }

    match &report.routes_outcome {
        RoutesOutcome::Printed => print_routes(&report.routes, output)?,
        RoutesOutcome::Appended { path } => {
            output.success(&format!("Routes appended to {}", relative(path, root).display()))?
        }
        RoutesOutcome::AlreadyPresent { path } => output.info(&format!(
            "Routes already present in {}",
            relative(path, root).display()
        ))?,
    }

    if let ManifestOutcome::Patched { added } = &report.manifest {
        for entry in added {
            output.success(&format!(
                "Registered autoload {} => {}",
                entry.namespace, entry.path
            ))?;
        }
    }
    if report.autoload == AutoloadOutcome::Refreshed {
        output.success("Autoload files regenerated")?;
    }

    for warning in report.warnings() {
        output.warning(&warning)?;
    }

    output.print("")?;
    output.success(&report.success_message())?;
    output.print(MIGRATE_HINT)?;
    Ok(())
}

fn print_routes(routes: &RouteBlock, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("Generated Routes:")?;
    output.raw(routes.as_str().trim_start_matches('\n'))?;
    output.print("")?;
    output.info("Copy these routes to your routes file.")?;
    Ok(())
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ConflictArg, NamingArg, RoutesArg};
    use laracrud_core::domain::{NamingStrategy, OverwritePolicy, RoutesStrategy};

    fn args() -> MakeArgs {
        MakeArgs {
            name: "Invoice".into(),
            namespace: "Billing".into(),
            root: None,
            dry_run: false,
            on_conflict: None,
            routes: None,
            routes_file: None,
            naming: None,
            stubs: None,
            no_autoload: false,
            strict: false,
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let mut config = AppConfig::default();
        config.routes.strategy = RoutesStrategy::Append;
        config.generator.on_conflict = OverwritePolicy::Skip;
        config.generator.root_namespace = "Acme\\".into();

        let settings = resolve_settings(&args(), &config);
        assert_eq!(settings.root, PathBuf::from("."));
        assert_eq!(settings.routes, RoutesStrategy::Append);
        assert_eq!(settings.on_conflict, OverwritePolicy::Skip);
        assert_eq!(settings.root_namespace, "Acme\\");
        assert!(settings.refresh_autoload);
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.routes.strategy = RoutesStrategy::Append;

        let mut args = args();
        args.routes = Some(RoutesArg::Print);
        args.on_conflict = Some(ConflictArg::Fail);
        args.naming = Some(NamingArg::Capitalized);
        args.routes_file = Some("routes/api.php".into());
        args.root = Some("/srv/app".into());
        args.no_autoload = true;
        args.strict = true;

        let settings = resolve_settings(&args, &config);
        assert_eq!(settings.routes, RoutesStrategy::Print);
        assert_eq!(settings.on_conflict, OverwritePolicy::Fail);
        assert_eq!(settings.naming, NamingStrategy::Capitalized);
        assert_eq!(settings.routes_file, PathBuf::from("routes/api.php"));
        assert_eq!(settings.root, PathBuf::from("/srv/app"));
        assert!(!settings.refresh_autoload);
        assert!(settings.strict_tokens);
    }

    #[test]
    fn autoload_disabled_in_config_stays_disabled() {
        let mut config = AppConfig::default();
        config.autoload.refresh = false;
        assert!(!resolve_settings(&args(), &config).refresh_autoload);
    }

    #[test]
    fn relative_strips_root() {
        let root = Path::new("/srv/app");
        assert_eq!(
            relative(Path::new("/srv/app/routes/web.php"), root),
            Path::new("routes/web.php")
        );
        assert_eq!(
            relative(Path::new("/elsewhere/web.php"), root),
            Path::new("/elsewhere/web.php")
        );
    }
}
