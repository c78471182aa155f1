//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes user-facing output to stdout according to the global flags.
///
/// In JSON mode the decorated helpers are silent and only [`Self::json`]
/// writes, so stdout stays a single parseable document.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match (args.output_format, config.output.format.as_str()) {
            (OutputFormat::Auto, "plain") => OutputFormat::Plain,
            (OutputFormat::Auto, "json") => OutputFormat::Json,
            (format, _) => format,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    fn silent(&self) -> bool {
        self.quiet || self.is_json()
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Text that must reach stdout even in quiet mode (e.g. the route block
    /// the user has to copy).
    pub fn raw(&self, msg: &str) -> io::Result<()> {
        if self.is_json() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout. Written in every format; commands
    /// call it when [`Self::is_json`] is set or the user asked for JSON.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.silent());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn json_mode_silences_decorations() {
        let out = make_manager(false, true, OutputFormat::Json);
        assert!(out.silent());
        assert!(out.raw("not printed").is_ok());
    }

    #[test]
    fn color_only_for_human_format() {
        assert!(make_manager(false, false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, true, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, false, OutputFormat::Plain).supports_color());
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert!(OutputManager::new(&args, &config).is_json());
    }

    #[test]
    fn flag_wins_over_config_format() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let out = OutputManager::new(&args, &config);
        assert!(!out.is_json());
        assert_eq!(out.resolved_format, OutputFormat::Plain);
    }

    #[test]
    fn json_serialises_values() {
        let out = make_manager(false, true, OutputFormat::Json);
        assert!(out.json(&["a", "b"]).is_ok());
    }
}
