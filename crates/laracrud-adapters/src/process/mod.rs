//! External commands run in the host project.

mod composer;

pub use composer::{ComposerRefresher, NoopRefresher, DEFAULT_AUTOLOAD_COMMAND};
