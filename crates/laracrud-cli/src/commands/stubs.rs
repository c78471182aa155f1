//! `laracrud stubs`: publish the stubs for customisation.
//!
//! Without `--dir` the stubs land in `stubs/laracrud`, where `make` picks
//! them up automatically.

use std::path::PathBuf;

use serde::Serialize;
use tracing::instrument;

use laracrud_adapters::{BuiltinStore, LocalFilesystem, template_store::PROJECT_STUBS_DIR};
use laracrud_core::application::{PublishOutcome, TemplateService};

use crate::{
    cli::StubsArgs,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Published {
    path: PathBuf,
    outcome: PublishOutcome,
}

#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: StubsArgs, output: OutputManager) -> CliResult<()> {
    let dir = args.dir.unwrap_or_else(|| PathBuf::from(PROJECT_STUBS_DIR));

    // Always publish the built-in set; publishing from the override chain
    // would copy a project's edited stubs onto themselves.
    let service = TemplateService::new(Box::new(BuiltinStore::new()));
    let published = service
        .publish(&LocalFilesystem::new(), &dir, args.force)
        .with_cli_context(|| format!("publishing stubs to {}", dir.display()))?;

    if output.is_json() {
        let rows: Vec<_> = published
            .into_iter()
            .map(|(path, outcome)| Published { path, outcome })
            .collect();
        output.json(&rows)?;
        return Ok(());
    }

    let mut kept = 0;
    for (path, outcome) in &published {
        match outcome {
            PublishOutcome::Written => output.success(&format!("Published {}", path.display()))?,
            PublishOutcome::Kept => kept += 1,
        }
    }
    if kept > 0 {
        output.warning(&format!(
            "{kept} existing stub(s) kept (use --force to overwrite)"
        ))?;
    }
    output.info(&format!("Edit the stubs in {} to customise generated code.", dir.display()))?;

    Ok(())
}
