//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use laracrud_core::domain::{NamingStrategy, OverwritePolicy, RoutesStrategy};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "laracrud",
    bin_name = "laracrud",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Laravel CRUD scaffolding",
    long_about = "laracrud generates the controller, repository, model, migration, \
                  form requests and views for one Laravel model, then wires up \
                  its routes and composer autoloading.",
    after_help = "EXAMPLES:\n\
        \x20 laracrud make Invoice Billing\n\
        \x20 laracrud make OrderItem Shop --routes append --on-conflict skip\n\
        \x20 laracrud stubs --dir stubs/laracrud\n\
        \x20 laracrud completions bash > /usr/share/bash-completion/completions/laracrud",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the CRUD files for one model.
    #[command(
        visible_alias = "make:crud",
        alias = "m",
        about = "Generate CRUD boilerplate for a model",
        after_help = "EXAMPLES:\n\
            \x20 laracrud make Invoice Billing\n\
            \x20 laracrud make Person Admin --naming capitalized\n\
            \x20 laracrud make Category Shop --dry-run\n\
            \x20 laracrud make Invoice Billing --root ../my-app --no-autoload"
    )]
    Make(MakeArgs),

    /// List the generated artifacts and the stubs behind them.
    #[command(
        visible_alias = "ls",
        about = "List artifacts and their stubs",
        after_help = "EXAMPLES:\n\
            \x20 laracrud list\n\
            \x20 laracrud list --format json"
    )]
    List(ListArgs),

    /// Copy the stubs into a directory for customisation.
    #[command(
        about = "Publish stubs for customisation",
        after_help = "EXAMPLES:\n\
            \x20 laracrud stubs                      # ./stubs/laracrud\n\
            \x20 laracrud stubs --dir resources/stubs\n\
            \x20 laracrud stubs --force              # overwrite edited stubs"
    )]
    Stubs(StubsArgs),

    /// Write a default `.laracrud.toml`.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 laracrud init           # ./.laracrud.toml\n\
            \x20 laracrud init --global  # user config directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 laracrud completions bash > ~/.local/share/bash-completion/completions/laracrud\n\
            \x20 laracrud completions zsh  > ~/.zfunc/_laracrud\n\
            \x20 laracrud completions fish > ~/.config/fish/completions/laracrud.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 laracrud config get generator.root_namespace\n\
            \x20 laracrud config list\n\
            \x20 laracrud config path"
    )]
    Config(ConfigCommands),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `laracrud make`.
///
/// Every optional flag falls back to the config file, then to the built-in
/// default.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Model name, e.g. `Invoice` or `OrderItem`.
    #[arg(value_name = "NAME", help = "Model name (singular, e.g. Invoice)")]
    pub name: String,

    /// Namespace segment for controllers and views, e.g. `Billing`.
    #[arg(value_name = "NAMESPACE", help = "Controller/view namespace (e.g. Billing)")]
    pub namespace: String,

    /// Laravel project root.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Laravel project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Render everything and report what would be written.
    #[arg(long = "dry-run", help = "Show what would be created without writing")]
    pub dry_run: bool,

    #[arg(
        long = "on-conflict",
        value_name = "POLICY",
        value_enum,
        help = "What to do when a target file exists"
    )]
    pub on_conflict: Option<ConflictArg>,

    #[arg(
        long = "routes",
        value_name = "STRATEGY",
        value_enum,
        help = "Print the route block or append it to the routes file"
    )]
    pub routes: Option<RoutesArg>,

    #[arg(
        long = "routes-file",
        value_name = "PATH",
        help = "Routes file used by --routes append (default: routes/web.php)"
    )]
    pub routes_file: Option<PathBuf>,

    #[arg(
        long = "naming",
        value_name = "STRATEGY",
        value_enum,
        help = "Spelling of the namespace in controller paths"
    )]
    pub naming: Option<NamingArg>,

    /// Directory whose `*.stub` files override the built-in stubs.
    #[arg(long = "stubs", value_name = "DIR", help = "Stub override directory")]
    pub stubs: Option<PathBuf>,

    #[arg(long = "no-autoload", help = "Skip `composer dump-autoload`")]
    pub no_autoload: bool,

    /// Reject stubs that contain unknown `{{tokens}}`.
    #[arg(long = "strict", help = "Fail on unknown {{tokens}} in stubs")]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConflictArg {
    Overwrite,
    Skip,
    Fail,
}

impl From<ConflictArg> for OverwritePolicy {
    fn from(arg: ConflictArg) -> Self {
        match arg {
            ConflictArg::Overwrite => Self::Overwrite,
            ConflictArg::Skip => Self::Skip,
            ConflictArg::Fail => Self::Fail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoutesArg {
    Print,
    Append,
}

impl From<RoutesArg> for RoutesStrategy {
    fn from(arg: RoutesArg) -> Self {
        match arg {
            RoutesArg::Print => Self::Print,
            RoutesArg::Append => Self::Append,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamingArg {
    /// `app/Http/Controllers/billing/...`
    Lowercase,
    /// `app/Http/Controllers/Billing/...`
    #[value(alias = "capital")]
    Capitalized,
}

impl From<NamingArg> for NamingStrategy {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Lowercase => Self::Lowercase,
            NamingArg::Capitalized => Self::Capitalized,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `laracrud list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Resolve project stub overrides against this root.
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[arg(long = "stubs", value_name = "DIR", help = "Stub override directory")]
    pub stubs: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One stub name per line.
    List,
    /// JSON array.
    Json,
}

// ── stubs ─────────────────────────────────────────────────────────────────────

/// Arguments for `laracrud stubs`.
#[derive(Debug, Args)]
pub struct StubsArgs {
    /// Target directory.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Where to write the stubs (default: stubs/laracrud)"
    )]
    pub dir: Option<PathBuf>,

    /// Overwrite stubs that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing stubs")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `laracrud init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user config directory instead of `./.laracrud.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `laracrud completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `laracrud config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `routes.strategy`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
