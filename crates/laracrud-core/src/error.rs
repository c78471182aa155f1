//! Unified error handling for laracrud core.
//!
//! Wraps domain and application errors with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for laracrud core operations.
#[derive(Debug, Error, Clone)]
pub enum CrudError {
    /// Errors from the domain layer (invalid input, bad templates).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CrudError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in laracrud".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::LockPoisoned | ApplicationError::CommandFailed { .. }
            )
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CrudResult<T> = Result<T, CrudError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> CrudResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CrudResult<T> {
        self.map_err(|e| CrudError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
