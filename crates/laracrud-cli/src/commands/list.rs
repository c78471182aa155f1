//! Implementation of the `laracrud list` command.

use std::path::PathBuf;

use laracrud_adapters::LayeredStore;
use laracrud_core::application::{StubInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let stubs_dir = args.stubs.or(config.templates.stubs_dir);
    let store = LayeredStore::for_project(stubs_dir.as_deref(), &root);

    let service = TemplateService::new(Box::new(store));
    let stubs = service.catalog().with_cli_context(|| "loading stubs")?;

    // `--output-format json` implies the JSON listing.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Artifacts:")?;
            for line in table_rows(&stubs) {
                output.print(&line)?;
            }
            let unknown: Vec<_> = stubs
                .iter()
                .filter(|s| !s.unknown_tokens.is_empty())
                .collect();
            for stub in unknown {
                output.warning(&format!(
                    "{} uses unknown tokens: {}",
                    stub.stub,
                    stub.unknown_tokens.join(", ")
                ))?;
            }
        }
        // Bypasses the quiet check so the output stays pipeable.
        ListFormat::List => {
            for stub in &stubs {
                output.raw(&stub.stub)?;
            }
        }
        ListFormat::Json => output.json(&stubs)?,
    }

    Ok(())
}

fn table_rows(stubs: &[StubInfo]) -> Vec<String> {
    let kind_width = stubs
        .iter()
        .map(|s| s.kind.to_string().len())
        .max()
        .unwrap_or(0);
    let output_width = stubs.iter().map(|s| s.output.len()).max().unwrap_or(0);

    stubs
        .iter()
        .map(|s| {
            format!(
                "  {:<kind_width$}  {:<output_width$}  {}",
                s.kind.to_string(),
                s.output,
                s.origin
            )
        })
        .collect()
}
