use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, ColorChoice, ScanArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::output::{ColorMode, ErrorOutput, TextFormatter};
use crate::scanner::{
    DirectoryScanner, ImageFilter, RootReport, ScanOutcome, scan_roots,
};
use crate::{ImageVariantsError, Result};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Output settings derived from the global flags.
pub struct CommandContext {
    pub verbose: u8,
    pub quiet: bool,
    pub text: TextFormatter,
    pub errors: ErrorOutput,
}

impl CommandContext {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(color_choice_to_mode(cli.color), cli.verbose, cli.quiet)
    }

    #[must_use]
    pub fn new(mode: ColorMode, verbose: u8, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            text: TextFormatter::with_verbose(mode, verbose),
            errors: ErrorOutput::new(mode),
        }
    }
}

/// Loads the configuration, or built-in defaults with `--no-config`.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool, verbose: u8) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;

    if verbose >= 1 {
        match &result.source {
            Some(path) => eprintln!("Using configuration: {}", path.display()),
            None => eprintln!("No configuration file found, using defaults"),
        }
    }
    Ok(result.config)
}

/// Applies `check`/`convert` flags on top of the loaded configuration.
pub fn apply_scan_overrides(config: &mut Config, args: &ScanArgs) {
    if !args.roots.is_empty() {
        config.scanner.roots.clone_from(&args.roots);
    }
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if let Some(sizes) = &args.sizes {
        config.variants.sizes = sizes.clone();
    }
}

/// Loads the configuration for a scanning command and validates it with
/// the command-line overrides applied.
///
/// # Errors
/// Returns an error if loading fails or the merged configuration is invalid.
pub fn resolve_scan_config(args: &ScanArgs, cli: &Cli) -> Result<Config> {
    let mut config = load_config(args.config.as_deref(), cli.no_config, cli.verbose)?;
    apply_scan_overrides(&mut config, args);
    validate_config_semantics(&config)?;
    Ok(config)
}

/// # Errors
/// Returns an error if an exclude pattern is invalid.
pub fn build_scanner(config: &Config) -> Result<DirectoryScanner<ImageFilter>> {
    let filter = ImageFilter::new(
        config.scanner.extensions.clone(),
        &config.scanner.exclude,
    )?;
    Ok(DirectoryScanner::new(filter).skipping_variants(config.variants.sizes.clone()))
}

/// Scans the configured roots and reports each one as it is recorded.
///
/// Root failures and unreadable nested entries go to stderr as warnings.
///
/// # Errors
/// Returns an error if the scanner cannot be built or the report cannot be written.
pub fn scan_images<W: Write>(
    config: &Config,
    ctx: &CommandContext,
    w: &mut W,
) -> Result<ScanOutcome> {
    let scanner = build_scanner(config)?;
    let outcome = scan_roots(&scanner, &config.scanner.roots);

    for report in &outcome.root_reports {
        if !ctx.quiet {
            writeln!(w, "{}", ctx.text.scanning_line(report.root()))?;
        }
        match report {
            RootReport::Scanned { count, .. } => {
                if !ctx.quiet {
                    writeln!(w, "{}", ctx.text.found_line(*count))?;
                }
            }
            RootReport::Failed { error, .. } => {
                ctx.errors.print_warning_with_detail(
                    &error.to_string(),
                    error.detail().as_deref(),
                    None,
                );
            }
        }
    }

    for warning in &outcome.warnings {
        let message = warning.path.as_ref().map_or_else(
            || "Skipped an unreadable entry".to_string(),
            |path| format!("Skipped unreadable entry: {}", path.display()),
        );
        ctx.errors
            .print_warning_with_detail(&message, Some(&warning.message), None);
    }

    Ok(outcome)
}

/// Error reported when no configured root could be scanned.
#[must_use]
pub fn no_accessible_roots(outcome: &ScanOutcome) -> ImageVariantsError {
    ImageVariantsError::NoAccessibleRoots {
        attempted: outcome.root_reports.len(),
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
