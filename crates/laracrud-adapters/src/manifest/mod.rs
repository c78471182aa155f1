//! `composer.json` access.

mod composer;

pub use composer::{ComposerManifest, MANIFEST_FILE};
