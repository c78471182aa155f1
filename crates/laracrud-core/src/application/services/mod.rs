//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a CRUD" or "publish the stubs".

pub mod report;
pub mod scaffold_service;
pub mod template_service;

pub use report::{
    AutoloadOutcome, FileOutcome, FileReport, GenerationReport, ManifestOutcome, RoutesOutcome,
    MIGRATE_HINT,
};
pub use scaffold_service::{
    GeneratorSettings, ScaffoldService, DEFAULT_ROOT_NAMESPACE, DEFAULT_ROUTES_FILE,
    DEFAULT_TIMESTAMP_FORMAT,
};
pub use template_service::{PublishOutcome, StubInfo, TemplateService};
