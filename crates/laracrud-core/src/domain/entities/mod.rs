pub mod artifact;
pub mod manifest;
pub mod names;
pub mod plan;
pub mod routes;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact::ArtifactKind;
pub use manifest::{AutoloadManifest, Psr4Entry};
pub use names::{GenerationRequest, NameSet};
pub use plan::{GenerationPlan, RenderedFile};
pub use routes::{RouteBlock, ROUTES_FILE_HEADER};
pub use template::{RenderContext, Template, TemplateOrigin, TemplateSource, TokenUsage};
