// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Model name cannot be empty")]
    EmptyModelName,

    #[error("Namespace cannot be empty")]
    EmptyNamespace,

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidIdentifier {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown value '{value}' for {field}; expected one of: {expected}")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid migration timestamp format '{format}'")]
    InvalidTimestampFormat { format: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Template '{template}' references unknown token '{{{{{token}}}}}'")]
    UnknownToken { template: String, token: String },

    #[error("Template '{template}' has no content")]
    EmptyTemplate { template: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("composer.json is malformed: {reason}")]
    MalformedManifest { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyModelName => vec![
                "Pass the model name as the first argument".into(),
                "Example: laracrud make Invoice Billing".into(),
            ],
            Self::EmptyNamespace => vec![
                "Pass the namespace as the second argument".into(),
                "Example: laracrud make Invoice Billing".into(),
            ],
            Self::InvalidIdentifier { field, .. } => vec![
                format!("The {field} becomes part of PHP class names and file paths"),
                "Use ASCII letters, digits and underscores only".into(),
                "Start with a letter, e.g. Invoice, OrderItem, Admin".into(),
            ],
            Self::UnknownVariant {
                field, expected, ..
            } => vec![format!("Valid values for {field}: {expected}")],
            Self::UnknownToken { token, .. } => vec![
                format!("'{{{{{token}}}}}' is not a supported placeholder"),
                "Supported: singular, plural, snakePlural, model, variable, pluralVariable, namespace, \
                 base_namespace_capital, base_namespace_small, controller_namespace"
                    .into(),
            ],
            Self::EmptyTemplate { template } => vec![
                format!("Stub '{template}' is empty"),
                "Re-publish the stubs with: laracrud stubs --force".into(),
            ],
            Self::InvalidTimestampFormat { .. } => vec![
                "Use chrono strftime specifiers, e.g. %Y_%m_%d_%H%M%S".into(),
                "Set it with generator.timestamp_format in .laracrud.toml".into(),
            ],
            Self::MalformedManifest { .. } => vec![
                "composer.json could not be parsed as a JSON object".into(),
                "Fix the file (try: composer validate) and run the command again".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyModelName
            | Self::EmptyNamespace
            | Self::InvalidIdentifier { .. }
            | Self::UnknownVariant { .. }
            | Self::InvalidTimestampFormat { .. } => ErrorCategory::Validation,
            Self::UnknownToken { .. } | Self::EmptyTemplate { .. } => ErrorCategory::Template,
            Self::MalformedManifest { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::DuplicatePath { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_message_shows_braces() {
        let err = DomainError::UnknownToken {
            template: "controller".into(),
            token: "foo".into(),
        };
        assert_eq!(
            err.to_string(),
            "Template 'controller' references unknown token '{{foo}}'"
        );
    }

    #[test]
    fn validation_errors_are_categorised() {
        assert_eq!(
            DomainError::EmptyModelName.category(),
            ErrorCategory::Validation
        );
        assert!(!DomainError::EmptyNamespace.suggestions().is_empty());
    }
}
