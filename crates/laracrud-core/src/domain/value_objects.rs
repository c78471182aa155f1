//! Domain value objects: the strategies that select between generator variants.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one has a stable string form (`as_str`), a `FromStr` parser that
//! yields [`DomainError::UnknownVariant`], and serde support so the CLI can
//! read them straight from the config file.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── NamingStrategy ───────────────────────────────────────────────────────────

/// How the namespace argument is spelled in controller directories and the
/// controller's PHP namespace.
///
/// View directories are always lower-cased regardless of this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingStrategy {
    /// `app/Http/Controllers/billing/InvoiceController.php`
    #[default]
    Lowercase,
    /// `app/Http/Controllers/Billing/InvoiceController.php`
    Capitalized,
}

impl NamingStrategy {
    pub const ALL: [Self; 2] = [Self::Lowercase, Self::Capitalized];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Capitalized => "capitalized",
        }
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowercase" | "lower" | "small" => Ok(Self::Lowercase),
            "capitalized" | "capital" | "pascal" => Ok(Self::Capitalized),
            other => Err(DomainError::UnknownVariant {
                field: "naming strategy",
                value: other.into(),
                expected: "lowercase, capitalized",
            }),
        }
    }
}

// ── RoutesStrategy ───────────────────────────────────────────────────────────

/// What happens with the generated route block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutesStrategy {
    /// Print for manual copy-paste.
    #[default]
    Print,
    /// Append to the configured routes file.
    Append,
}

impl RoutesStrategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Append => "append",
        }
    }
}

impl fmt::Display for RoutesStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutesStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "print" => Ok(Self::Print),
            "append" => Ok(Self::Append),
            other => Err(DomainError::UnknownVariant {
                field: "routes strategy",
                value: other.into(),
                expected: "print, append",
            }),
        }
    }
}

// ── OverwritePolicy ──────────────────────────────────────────────────────────

/// What to do when a generated file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Replace the existing file.
    #[default]
    Overwrite,
    /// Keep the existing file and move on.
    Skip,
    /// Abort before writing anything.
    Fail,
}

impl OverwritePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Skip => "skip",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverwritePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" | "force" => Ok(Self::Overwrite),
            "skip" | "keep" => Ok(Self::Skip),
            "fail" | "error" => Ok(Self::Fail),
            other => Err(DomainError::UnknownVariant {
                field: "overwrite policy",
                value: other.into(),
                expected: "overwrite, skip, fail",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(NamingStrategy::default(), NamingStrategy::Lowercase);
        assert_eq!(RoutesStrategy::default(), RoutesStrategy::Print);
        assert_eq!(OverwritePolicy::default(), OverwritePolicy::Overwrite);
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!(
            "Capital".parse::<NamingStrategy>().unwrap(),
            NamingStrategy::Capitalized
        );
        assert_eq!(
            "APPEND".parse::<RoutesStrategy>().unwrap(),
            RoutesStrategy::Append
        );
        assert_eq!(
            "keep".parse::<OverwritePolicy>().unwrap(),
            OverwritePolicy::Skip
        );
    }

    #[test]
    fn unknown_variant_lists_expected_values() {
        let err = "sometimes".parse::<OverwritePolicy>().unwrap_err();
        assert!(err.to_string().contains("overwrite, skip, fail"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for strategy in NamingStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<NamingStrategy>().unwrap(), strategy);
        }
    }
}
