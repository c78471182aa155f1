//! Tracing subscriber for the `laracrud` binary.
//!
//! The core and adapter crates only emit events; this module decides where
//! they go. What each level shows for a `make` run:
//!
//! | Flag(s)   | Level | Shows                                                   |
//! |-----------|-------|---------------------------------------------------------|
//! | (none)    | WARN  | skipped autoload refresh, kept files                    |
//! | `-v`      | INFO  | plan, writes, routes, manifest patch, composer run      |
//! | `-vv`     | DEBUG | derived names, resolved stub origin per artifact        |
//! | `-vvv`    | TRACE | token substitution                                      |
//! | `--quiet` | ERROR | failures only                                           |
//!
//! `RUST_LOG` replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events reach the terminal.
const LOG_TARGETS: [&str; 3] = ["laracrud", "laracrud_core", "laracrud_adapters"];

/// Install the stderr subscriber. JSON output mode logs JSON lines so
/// stdout stays a single parseable document.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(derive_level(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    let result = if args.output_format == OutputFormat::Json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        let ansi = !args.no_color && std::io::stderr().is_terminal();
        registry.with(fmt_layer.with_ansi(ansi)).try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `laracrud=info,laracrud_core=info,laracrud_adapters=info`; anything else
/// (clap, config) stays silent.
fn default_filter(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let cases = [
            (0, false, "warn"),
            (1, false, "info"),
            (2, false, "debug"),
            (3, false, "trace"),
            (10, false, "trace"),
            (0, true, "error"),
            (3, true, "error"),
        ];
        for (verbose, quiet, expected) in cases {
            assert_eq!(
                derive_level(&args_with(verbose, quiet)),
                expected,
                "-v x{verbose}, quiet={quiet}"
            );
        }
    }

    #[test]
    fn default_filter_covers_every_workspace_crate() {
        assert_eq!(
            default_filter("debug"),
            "laracrud=debug,laracrud_core=debug,laracrud_adapters=debug"
        );
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter("info")).is_ok());
    }
}
