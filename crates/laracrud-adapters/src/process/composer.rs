use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use laracrud_core::{
    application::{ports::AutoloadRefresher, ApplicationError},
    error::CrudResult,
};

pub const DEFAULT_AUTOLOAD_COMMAND: &str = "composer dump-autoload -q";

/// Runs `composer dump-autoload` (or a configured replacement) in the
/// project root and checks its exit status.
#[derive(Debug, Clone)]
pub struct ComposerRefresher {
    program: String,
    args: Vec<String>,
}

impl ComposerRefresher {
    /// Split a whitespace-separated command line. Empty input falls back to
    /// [`DEFAULT_AUTOLOAD_COMMAND`].
    pub fn from_command_line(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        match parts.next() {
            Some(program) => Self {
                program,
                args: parts.collect(),
            },
            None => Self::default(),
        }
    }
}

impl Default for ComposerRefresher {
    fn default() -> Self {
        Self::from_command_line(DEFAULT_AUTOLOAD_COMMAND)
    }
}

impl AutoloadRefresher for ComposerRefresher {
    #[instrument(skip(self), fields(command = %self.describe()))]
    fn refresh(&self, root: &Path) -> CrudResult<()> {
        let failed = |reason: String| ApplicationError::CommandFailed {
            command: self.describe(),
            reason,
        };

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| failed(format!("could not start: {e}")))?;

        if output.status.success() {
            debug!("autoload command succeeded");
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => output.status.to_string(),
            msg => format!("{}: {msg}", output.status),
        };
        Err(failed(reason).into())
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Refresher for dry runs: does nothing and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRefresher;

impl AutoloadRefresher for NoopRefresher {
    fn refresh(&self, _root: &Path) -> CrudResult<()> {
        Ok(())
    }

    fn describe(&self) -> String {
        "(disabled)".into()
    }
}
