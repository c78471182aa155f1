//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`GeneratorSettings`](laracrud_core::application::GeneratorSettings)
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `LARACRUD_<SECTION>__<KEY>`, e.g.
//!    `LARACRUD_ROUTES__STRATEGY=append`
//! 3. Config file: `--config`, else `./.laracrud.toml`, else the user config
//!    directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use laracrud_adapters::process::DEFAULT_AUTOLOAD_COMMAND;
use laracrud_core::{
    application::{DEFAULT_ROOT_NAMESPACE, DEFAULT_ROUTES_FILE, DEFAULT_TIMESTAMP_FORMAT},
    domain::{NamingStrategy, OverwritePolicy, RoutesStrategy},
};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".laracrud.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "LARACRUD";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub routes: RoutesConfig,
    pub templates: TemplateConfig,
    pub autoload: AutoloadConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// PSR-4 root namespace of the Laravel app, with trailing `\`.
    pub root_namespace: String,
    pub naming: NamingStrategy,
    pub on_conflict: OverwritePolicy,
    /// chrono strftime pattern for migration file names.
    pub timestamp_format: String,
    pub strict_tokens: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub strategy: RoutesStrategy,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `*.stub` overrides.
    pub stubs_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoloadConfig {
    pub refresh: bool,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_namespace: DEFAULT_ROOT_NAMESPACE.into(),
            naming: NamingStrategy::default(),
            on_conflict: OverwritePolicy::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
            strict_tokens: false,
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            strategy: RoutesStrategy::default(),
            file: PathBuf::from(DEFAULT_ROUTES_FILE),
        }
    }
}

impl Default for AutoloadConfig {
    fn default() -> Self {
        Self {
            refresh: true,
            command: DEFAULT_AUTOLOAD_COMMAND.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the local and global files are used when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = toml::to_string(&Self::default())
            .context("Failed to serialise built-in configuration")?;

        let mut builder =
            Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(path) = Self::existing_config_path() {
                    debug!(path = %path.display(), "Using config file");
                    builder = builder.add_source(
                        File::from(path.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the configuration file that [`Self::load`] reads by default.
    ///
    /// `./.laracrud.toml` when it exists, otherwise the platform config
    /// directory (which may not exist yet).
    pub fn config_path() -> PathBuf {
        Self::existing_config_path().unwrap_or_else(Self::global_config_path)
    }

    /// `config.toml` in the platform config directory, falling back to the
    /// local file when no home directory can be determined.
    pub fn global_config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "laracrud", "laracrud")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    fn existing_config_path() -> Option<PathBuf> {
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local.to_path_buf());
        }
        let global = Self::global_config_path();
        global.is_file().then_some(global)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Look up a dotted key such as `routes.strategy`.
    ///
    /// Strings are returned bare; everything else as JSON.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&root, |node, segment| node.get(segment))?;

        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}
