//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator needs from the outside world.
//! The `laracrud-adapters` crate provides implementations.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::domain::{ArtifactKind, AutoloadManifest, Template};
use crate::error::CrudResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `laracrud_adapters::filesystem::LocalFilesystem` (production)
/// - `laracrud_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> CrudResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> CrudResult<()>;

    /// Append content to a file, creating it if missing.
    fn append_file(&self, path: &Path, content: &str) -> CrudResult<()>;

    fn read_to_string(&self, path: &Path) -> CrudResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for stub lookup.
///
/// Implemented by:
/// - `laracrud_adapters::template_store::BuiltinStore` (compiled-in stubs)
/// - `laracrud_adapters::template_store::DirectoryStore` (user stubs)
/// - `laracrud_adapters::template_store::LayeredStore` (override chain)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Load the stub for one artifact kind.
    ///
    /// Fails with `ApplicationError::TemplateNotFound` when absent.
    fn load(&self, kind: ArtifactKind) -> CrudResult<Template>;

    /// Human-readable description of where stubs come from.
    fn source_name(&self) -> String;
}

/// Port for the host project's autoload manifest (`composer.json`).
#[cfg_attr(test, mockall::automock)]
pub trait ProjectManifest: Send + Sync {
    fn exists(&self, root: &Path) -> bool;

    fn load(&self, root: &Path) -> CrudResult<AutoloadManifest>;

    fn save(&self, root: &Path, manifest: &AutoloadManifest) -> CrudResult<()>;
}

/// Port for regenerating the host project's class autoloader.
#[cfg_attr(test, mockall::automock)]
pub trait AutoloadRefresher: Send + Sync {
    /// Run the refresh in `root`. Fails with `ApplicationError::CommandFailed`.
    fn refresh(&self, root: &Path) -> CrudResult<()>;

    /// The command line, for reporting.
    fn describe(&self) -> String;
}

/// Port for the wall clock (migration timestamps).
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
