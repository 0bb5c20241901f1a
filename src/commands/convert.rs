use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, ConvertArgs};
use crate::config::Config;
use crate::convert::{ConversionObserver, Converter, OverwritePolicy, WebPCodec};
use crate::error::ImageVariantsError;
use crate::output::{ConvertProgress, ErrorOutput};
use crate::scanner::ImageRecord;
use crate::{EXIT_CONFIG_ERROR, EXIT_RUN_FAILURE, EXIT_SUCCESS, Result};

use super::context::{
    CommandContext, color_choice_to_mode, no_accessible_roots, resolve_scan_config, scan_images,
};

#[must_use]
pub fn run_convert(args: &ConvertArgs, cli: &Cli) -> i32 {
    match run_convert_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_failure(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a conversion batch with configuration and flags resolved from the
/// command line.
///
/// # Errors
/// Returns an error if the configuration is invalid or output cannot be written.
pub fn run_convert_impl(args: &ConvertArgs, cli: &Cli) -> Result<i32> {
    let mut config = resolve_scan_config(&args.scan, cli)?;
    apply_convert_overrides(&mut config, args);

    let ctx = CommandContext::from_cli(cli);
    let mut stdout = std::io::stdout().lock();
    execute_convert(&config, &ctx, &mut stdout)
}

/// `--quality`, `--force` and `--incremental` on top of `[convert]`.
pub fn apply_convert_overrides(config: &mut Config, args: &ConvertArgs) {
    if let Some(quality) = args.quality {
        config.convert.quality = quality;
    }
    if args.force {
        config.convert.overwrite = OverwritePolicy::Always;
    } else if args.incremental {
        config.convert.overwrite = OverwritePolicy::Missing;
    }
}

/// Streams per-image progress to the console.
struct ConsoleObserver<'a> {
    ctx: &'a CommandContext,
    progress: ConvertProgress,
}

impl ConversionObserver for ConsoleObserver<'_> {
    fn on_start(&mut self, image: &ImageRecord) {
        self.progress
            .println(&self.ctx.text.processing_line(&image.path));
    }

    fn on_written(&mut self, path: &Path) {
        self.progress.println(&self.ctx.text.created_line(path));
    }

    fn on_skipped(&mut self, path: &Path) {
        if self.ctx.verbose >= 1 {
            self.progress.println(&self.ctx.text.kept_line(path));
        }
    }

    fn on_unsupported(&mut self, image: &ImageRecord) {
        self.progress
            .println(&self.ctx.text.unsupported_line(&image.path));
        self.progress.inc();
    }

    fn on_failed(&mut self, image: &ImageRecord, error: &ImageVariantsError) {
        let errors = self.ctx.errors;
        self.progress.suspend(|| {
            errors.print_error_with_detail(
                error.error_type(),
                &format!("Error processing {}", image.path.display()),
                Some(&error.detail().unwrap_or_else(|| error.message())),
                None,
            );
        });
    }

    fn on_finish(&mut self, _image: &ImageRecord) {
        self.progress.inc();
    }
}

/// Scans and converts every image, then writes the batch summary to `w`.
///
/// Per-image failures are reported and the batch continues; they do not
/// change the exit code. The run only fails when none of the configured
/// roots could be scanned.
///
/// # Errors
/// Returns an error if the scanner cannot be built or `w` cannot be written.
pub fn execute_convert<W: Write>(
    config: &Config,
    ctx: &CommandContext,
    w: &mut W,
) -> Result<i32> {
    writeln!(w, "{}", ctx.text.banner("Image Conversion"))?;

    let outcome = scan_images(config, ctx, w)?;
    if !ctx.quiet {
        writeln!(w, "{}", ctx.text.total_line(outcome.images.len(), "process"))?;
    }
    w.flush()?;

    let converter = Converter::new(
        config.variants.sizes.clone(),
        WebPCodec::new(config.convert.quality),
    )
    .with_overwrite(config.convert.overwrite);

    let mut observer = ConsoleObserver {
        ctx,
        progress: ConvertProgress::new(outcome.images.len() as u64, ctx.quiet),
    };
    let summary = converter.convert_all(&outcome.images, &mut observer);
    observer.progress.finish();

    writeln!(w)?;
    write!(w, "{}", ctx.text.format_conversion_summary(&summary))?;

    if outcome.all_roots_failed() {
        ctx.errors.print_failure(&no_accessible_roots(&outcome));
        return Ok(EXIT_RUN_FAILURE);
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
