//! Application layer for laracrud.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AutoloadOutcome, FileOutcome, FileReport, GenerationReport, GeneratorSettings,
    ManifestOutcome, PublishOutcome, RoutesOutcome, ScaffoldService, StubInfo, TemplateService,
    DEFAULT_ROOT_NAMESPACE, DEFAULT_ROUTES_FILE, DEFAULT_TIMESTAMP_FORMAT,
};

pub use ports::{AutoloadRefresher, Clock, Filesystem, ProjectManifest, TemplateStore};

pub use error::ApplicationError;
