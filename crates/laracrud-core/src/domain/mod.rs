//! Core domain layer for laracrud.
//!
//! Pure logic: name derivation, artifact paths, the token renderer, the
//! route block and the `composer.json` patch. All I/O goes through ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process or clock access
//! - **Immutable entities**: Domain objects are Clone + PartialEq
//! - **Deterministic**: The same request always yields the same plan

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    artifact::ArtifactKind,
    manifest::{AutoloadManifest, Psr4Entry},
    names::{GenerationRequest, NameSet},
    plan::{GenerationPlan, RenderedFile},
    routes::{RouteBlock, ROUTES_FILE_HEADER},
    template::{tokens, RenderContext, Template, TemplateOrigin, TemplateSource, TokenUsage},
};

pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{NamingStrategy, OverwritePolicy, RoutesStrategy};
