use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ImageVariantsError, Result};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(color_choice_to_mode(cli.color));
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            format!("Configuration is valid: {}\n", config.display())
        }),
        ConfigAction::Show { config } => run_config_show_impl(config.as_deref(), cli.no_config),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            errors.print_failure(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(ImageVariantsError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    validate_config_semantics(&config)?;
    Ok(())
}

/// Renders the effective configuration as TOML, prefixed with its source.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(config_path: Option<&Path>, no_config: bool) -> Result<String> {
    let (config, source) = if no_config {
        (Config::default(), None)
    } else {
        let loader = FileConfigLoader::new();
        let result =
            config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
        (result.config, result.source)
    };

    format_config_toml(&config, source.as_deref())
}

/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn format_config_toml(config: &Config, source: Option<&Path>) -> Result<String> {
    let header = source.map_or_else(
        || "# Effective configuration (built-in defaults)\n".to_string(),
        |path| format!("# Effective configuration from {}\n", path.display()),
    );
    Ok(format!("{header}\n{}", toml::to_string_pretty(config)?))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
