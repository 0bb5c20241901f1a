use std::io::Write;

use crate::audit::{Auditor, CoverageReport, FsProbe};
use crate::cli::{Cli, ScanArgs};
use crate::config::Config;
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_RUN_FAILURE, EXIT_SUCCESS, Result};

use super::context::{
    CommandContext, color_choice_to_mode, no_accessible_roots, resolve_scan_config, scan_images,
};

#[must_use]
pub fn run_check(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_failure(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the audit with configuration and flags resolved from the command line.
///
/// # Errors
/// Returns an error if the configuration is invalid or output cannot be written.
pub fn run_check_impl(args: &ScanArgs, cli: &Cli) -> Result<i32> {
    let config = resolve_scan_config(args, cli)?;
    let ctx = CommandContext::from_cli(cli);
    let mut stdout = std::io::stdout().lock();
    execute_check(&config, &ctx, &mut stdout)
}

/// Scans, audits every image and writes the report to `w`.
///
/// Missing variants are findings and still exit with success. The run only
/// fails when none of the configured roots could be scanned, and even then
/// the (empty) report is written first.
///
/// # Errors
/// Returns an error if the scanner cannot be built or `w` cannot be written.
pub fn execute_check<W: Write>(config: &Config, ctx: &CommandContext, w: &mut W) -> Result<i32> {
    writeln!(w, "{}", ctx.text.banner("Image Optimization Check"))?;

    let outcome = scan_images(config, ctx, w)?;
    if !ctx.quiet {
        writeln!(w, "{}", ctx.text.total_line(outcome.images.len(), "check"))?;
    }

    let auditor = Auditor::new(config.variants.sizes.clone(), FsProbe);
    let mut report = CoverageReport::default();
    for image in &outcome.images {
        let audit = auditor.audit_image(image);
        if !ctx.quiet {
            writeln!(w, "{}", ctx.text.image_status(&audit))?;
        }
        for (path, reason) in audit.probe_errors() {
            ctx.errors.print_warning_with_detail(
                &format!("Could not check {}", path.display()),
                Some(reason),
                None,
            );
        }
        report = report.record(audit);
    }

    writeln!(w)?;
    write!(w, "{}", ctx.text.format_summary(&report))?;
    writeln!(w)?;
    write!(w, "{}", ctx.text.format_recommendation(&report))?;

    if outcome.all_roots_failed() {
        ctx.errors.print_failure(&no_accessible_roots(&outcome));
        return Ok(EXIT_RUN_FAILURE);
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
