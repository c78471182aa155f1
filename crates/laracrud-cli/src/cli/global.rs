//! Flags accepted before or after any subcommand (`laracrud -v make ...` and
//! `laracrud make ... -v` are equivalent).

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        global = true,
        help = "Log generator steps to stderr (-v, -vv, -vvv)",
        long_help = "Log generator steps to stderr:
    (none)  warnings only (kept files, failed composer dump-autoload)
    -v      each pipeline step: plan, file writes, routes, composer.json patch
    -vv     derived names and which stub (override or built-in) was used
    -vvv    token substitution detail"
    )]
    pub verbose: u8,

    /// Generated routes are still printed; everything else is suppressed.
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and the route block"
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output (also NO_COLOR)"
    )]
    pub no_color: bool,

    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of ./.laracrud.toml"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored, with status glyphs.
    Human,
    Plain,
    /// A single JSON document on stdout (report, plan or catalog).
    Json,
}
