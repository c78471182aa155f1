//! laracrud core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the laracrud
//! Laravel CRUD generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           laracrud-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  Filesystem, TemplateStore, Manifest,   │
//! │     AutoloadRefresher, Clock            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   laracrud-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  NameSet, ArtifactKind, RenderContext,  │
//! │  RouteBlock, AutoloadManifest, Plan     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use laracrud_core::prelude::*;
//!
//! let request = GenerationRequest::new("Invoice", "Billing")?;
//! let service = ScaffoldService::new(store, filesystem, manifest, refresher, clock);
//! let report = service.generate(&request, &GeneratorSettings::default())?;
//! println!("{}", report.success_message());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{AutoloadRefresher, Clock, Filesystem, ProjectManifest, TemplateStore},
        GenerationReport, GeneratorSettings, ScaffoldService, TemplateService,
    };
    pub use crate::domain::{
        ArtifactKind, AutoloadManifest, GenerationPlan, GenerationRequest, NameSet,
        NamingStrategy, OverwritePolicy, RenderContext, RouteBlock, RoutesStrategy, Template,
    };
    pub use crate::error::{CrudError, CrudResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
