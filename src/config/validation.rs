use crate::error::{ImageVariantsError, Result};

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if quality is out of range, the root or extension list is empty,
/// the size table is invalid, or a glob pattern does not compile.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    config.variants.sizes.validate()?;
    validate_convert_section(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.roots.is_empty() {
        return Err(ImageVariantsError::Config(
            "scanner.roots must list at least one directory".to_string(),
        ));
    }

    if config.scanner.extensions.is_empty() {
        return Err(ImageVariantsError::Config(
            "scanner.extensions must list at least one image extension".to_string(),
        ));
    }

    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| ImageVariantsError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_convert_section(config: &Config) -> Result<()> {
    if config.convert.quality > 100 {
        return Err(ImageVariantsError::Config(format!(
            "convert.quality must be between 0 and 100, got {}",
            config.convert.quality
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
