//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `laracrud-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Stub retrieval
//!   - `ProjectManifest`: `composer.json` load/save
//!   - `AutoloadRefresher`: `composer dump-autoload`
//!   - `Clock`: Migration timestamps

pub mod output;

pub use output::{AutoloadRefresher, Clock, Filesystem, ProjectManifest, TemplateStore};

#[cfg(test)]
pub use output::{
    MockAutoloadRefresher, MockClock, MockFilesystem, MockProjectManifest, MockTemplateStore,
};
