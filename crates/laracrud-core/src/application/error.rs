//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the generator pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No stub found for an artifact kind.
    #[error("Stub '{stub}' not found in {source_name}")]
    TemplateNotFound { stub: String, source_name: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Target files exist and the overwrite policy is `fail`.
    #[error("{} file(s) already exist", paths.len())]
    FileConflict { paths: Vec<PathBuf> },

    /// No `composer.json` at the project root.
    #[error("{} does not look like a Laravel project (no composer.json)", root.display())]
    NotALaravelProject { root: PathBuf },

    /// `composer.json` could not be read or written.
    #[error("composer.json at {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },

    /// An external command could not be run or exited unsuccessfully.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Shared adapter state was poisoned by a panic.
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { stub, .. } => vec![
                format!("Add {stub}.stub to your stubs directory"),
                "Or publish the built-in stubs with: laracrud stubs".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::FileConflict { paths } => {
                let mut hints: Vec<String> = paths
                    .iter()
                    .take(3)
                    .map(|p| format!("Exists: {}", p.display()))
                    .collect();
                hints.push("Use --on-conflict skip to keep existing files".into());
                hints.push("Use --on-conflict overwrite to replace them".into());
                hints
            }
            Self::NotALaravelProject { root } => vec![
                format!("Looked for {}", root.join("composer.json").display()),
                "Run the command from your Laravel project root".into(),
                "Or pass the project directory with --root".into(),
            ],
            Self::ManifestError { .. } => vec![
                "Check that composer.json is readable and writable".into(),
                "Validate it with: composer validate".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Run `{command}` manually to see its output"),
                "Skip this step with --no-autoload".into(),
            ],
            Self::LockPoisoned => vec!["Try again; if it persists, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::NotALaravelProject { .. } => {
                ErrorCategory::NotFound
            }
            Self::FileConflict { .. } => ErrorCategory::Validation,
            Self::ManifestError { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::CommandFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
