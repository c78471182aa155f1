//! Infrastructure adapters for laracrud.
//!
//! This crate implements the ports defined in `laracrud_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod clock;
pub mod filesystem;
pub mod manifest;
pub mod process;
pub mod template_store;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::ComposerManifest;
pub use process::{ComposerRefresher, NoopRefresher};
pub use template_store::{BuiltinStore, DirectoryStore, LayeredStore};
