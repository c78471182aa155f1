//! What a generator run did, for display and JSON output.

use std::path::PathBuf;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{ArtifactKind, NameSet, Psr4Entry, RouteBlock};

pub const MIGRATE_HINT: &str = "Run migrations: php artisan migrate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutcome {
    Created,
    Overwritten,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoutesOutcome {
    /// Left for the caller to print.
    Printed,
    Appended { path: PathBuf },
    AlreadyPresent { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManifestOutcome {
    Patched { added: Vec<Psr4Entry> },
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum AutoloadOutcome {
    Refreshed,
    Disabled,
    Failed(String),
}

/// Outcome of [`super::ScaffoldService::generate`].
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub names: NameSet,
    pub files: Vec<FileReport>,
    pub routes: RouteBlock,
    pub routes_outcome: RoutesOutcome,
    pub manifest: ManifestOutcome,
    pub autoload: AutoloadOutcome,
}

impl GenerationReport {
    /// `CRUD for Invoice generated successfully!`
    pub fn success_message(&self) -> String {
        format!("CRUD for {} generated successfully!", self.names.singular)
    }

    pub fn count(&self, outcome: FileOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }

    /// Non-fatal problems worth surfacing to the user.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let AutoloadOutcome::Failed(reason) = &self.autoload {
            warnings.push(format!("Autoload refresh failed: {reason}"));
        }
        let skipped = self.count(FileOutcome::Skipped);
        if skipped > 0 {
            warnings.push(format!("{skipped} existing file(s) were kept unchanged"));
        }
        warnings
    }
}
