//! Stub stores: built-in, directory overrides and the layered chain.

mod builtin;
mod directory;
mod layered;

pub use builtin::BuiltinStore;
pub use directory::DirectoryStore;
pub use layered::{LayeredStore, PROJECT_STUBS_DIR};
