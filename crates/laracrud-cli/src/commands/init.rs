//! `laracrud init`: create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults as TOML.
///
/// The file goes to `./.laracrud.toml`, or the user config directory with
/// `--global`.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.global {
        AppConfig::global_config_path()
    } else {
        PathBuf::from(LOCAL_CONFIG_FILE)
    };

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = AppConfig::default()
        .to_toml()
        .map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
