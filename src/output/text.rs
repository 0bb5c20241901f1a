use std::fmt::Write;
use std::path::Path;

use crate::audit::{CoverageReport, ImageAudit, Optimization};
use crate::convert::ConversionSummary;

use super::{ColorMode, ansi};

const RULE: &str = "==============================";

/// Human-readable console text for `check` and `convert`.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !super::is_no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// Three-line section header.
    #[must_use]
    pub fn banner(&self, title: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.paint(RULE, ansi::CYAN),
            self.paint(title, ansi::CYAN),
            self.paint(RULE, ansi::CYAN)
        )
    }

    #[must_use]
    pub fn scanning_line(&self, root: &Path) -> String {
        self.paint(
            &format!("Scanning directory: {}...", root.display()),
            ansi::BLUE,
        )
    }

    #[must_use]
    pub fn found_line(&self, count: usize) -> String {
        self.paint(&format!("Found {count} images"), ansi::GREEN)
    }

    #[must_use]
    pub fn total_line(&self, total: usize, verb: &str) -> String {
        self.paint(
            &format!("Found {total} total images to {verb}"),
            ansi::MAGENTA,
        )
    }

    /// `Checking: path... ✓ Fully optimized!`
    #[must_use]
    pub fn image_status(&self, audit: &ImageAudit) -> String {
        let status = match audit.optimization() {
            Optimization::Full => self.paint("✓ Fully optimized!", ansi::GREEN),
            Optimization::Partial => self.paint("⚠ Partially optimized", ansi::YELLOW),
            Optimization::None => self.paint("✗ Not optimized", ansi::RED),
        };

        let mut line = format!("Checking: {}... {status}", audit.path.display());
        if self.verbose >= 1 && audit.optimization() != Optimization::Full {
            let mut missing = Vec::new();
            if !audit.has_webp() {
                missing.push("webp".to_string());
            }
            missing.extend(audit.missing_sizes());
            let _ = write!(line, " (missing: {})", missing.join(", "));
        }
        line
    }

    /// Totals, percentages and the lists of missing variants.
    #[must_use]
    pub fn format_summary(&self, report: &CoverageReport) -> String {
        let mut out = self.banner("Summary");
        out.push('\n');

        let _ = writeln!(out, "Total images: {}", report.total_images);
        if report.total_images == 0 {
            let _ = writeln!(out, "{}", self.paint("No images found.", ansi::YELLOW));
            return out;
        }

        let _ = writeln!(
            out,
            "Images with WebP versions: {} ({})",
            report.with_webp,
            Self::percent_text(report.webp_percent())
        );
        let _ = writeln!(
            out,
            "Images with all responsive sizes: {} ({})",
            report.with_responsive,
            Self::percent_text(report.responsive_percent())
        );
        let _ = writeln!(
            out,
            "Fully optimized: {}, partially: {}, not optimized: {}",
            self.paint(&report.fully_optimized.to_string(), ansi::GREEN),
            self.paint(&report.partially_optimized.to_string(), ansi::YELLOW),
            self.paint(&report.not_optimized.to_string(), ansi::RED)
        );

        let by_type: Vec<_> = report
            .by_extension
            .iter()
            .map(|(ext, count)| format!("{ext} {count}"))
            .collect();
        let _ = writeln!(out, "By type: {}", by_type.join(", "));

        if !report.missing_webp.is_empty() {
            let title = format!(
                "Images missing WebP versions ({}):",
                report.missing_webp.len()
            );
            let _ = writeln!(out, "\n{}", self.paint(&title, ansi::YELLOW));
            for path in &report.missing_webp {
                let _ = writeln!(out, "  - {}", path.display());
            }
        }

        if !report.missing_responsive.is_empty() {
            let title = format!(
                "Images missing responsive versions ({}):",
                report.missing_responsive.len()
            );
            let _ = writeln!(out, "\n{}", self.paint(&title, ansi::YELLOW));
            for item in &report.missing_responsive {
                let _ = writeln!(
                    out,
                    "  - {} (missing sizes: {})",
                    item.path.display(),
                    item.missing.join(", ")
                );
            }
        }

        if !report.probe_errors.is_empty() {
            let title = format!(
                "Lookups that failed, counted as missing ({}):",
                report.probe_errors.len()
            );
            let _ = writeln!(out, "\n{}", self.paint(&title, ansi::RED));
            for failure in &report.probe_errors {
                let _ = writeln!(out, "  - {}: {}", failure.path.display(), failure.reason);
            }
        }

        out
    }

    fn percent_text(percent: Option<usize>) -> String {
        percent.map_or_else(|| "n/a".to_string(), |p| format!("{p}%"))
    }

    #[must_use]
    pub fn format_recommendation(&self, report: &CoverageReport) -> String {
        let mut out = self.banner("Recommendation");
        out.push('\n');

        if report.total_images == 0 {
            let _ = writeln!(
                out,
                "{}",
                self.paint(
                    "No images to optimize. Check the configured image directories.",
                    ansi::YELLOW
                )
            );
        } else if report.is_fully_optimized() {
            let _ = writeln!(
                out,
                "{}",
                self.paint("All images are fully optimized! Great job!", ansi::GREEN)
            );
        } else {
            let _ = writeln!(
                out,
                "{}",
                self.paint(
                    "Run the conversion command to create missing optimized versions:",
                    ansi::YELLOW
                )
            );
            let _ = writeln!(out, "  image-variants convert --incremental");
            let _ = writeln!(
                out,
                "\nThis could reduce your image payload size by approximately 30-50%!"
            );
        }
        out
    }

    #[must_use]
    pub fn processing_line(&self, path: &Path) -> String {
        format!("Processing: {}", path.display())
    }

    #[must_use]
    pub fn created_line(&self, path: &Path) -> String {
        self.paint(&format!("Created: {}", path.display()), ansi::GREEN)
    }

    #[must_use]
    pub fn kept_line(&self, path: &Path) -> String {
        self.paint(&format!("Kept existing: {}", path.display()), ansi::DIM)
    }

    #[must_use]
    pub fn unsupported_line(&self, path: &Path) -> String {
        self.paint(
            &format!("Skipping (format not converted): {}", path.display()),
            ansi::YELLOW,
        )
    }

    /// End-of-batch totals for `convert`.
    #[must_use]
    pub fn format_conversion_summary(&self, summary: &ConversionSummary) -> String {
        let mut out = self.banner("Summary");
        out.push('\n');

        let _ = writeln!(
            out,
            "Processed {} images: {} converted, {} failed",
            summary.processed,
            self.paint(&summary.converted().to_string(), ansi::GREEN),
            self.paint(&summary.failures.len().to_string(), ansi::RED)
        );
        let _ = writeln!(
            out,
            "Variants written: {}, kept existing: {}",
            summary.written, summary.skipped
        );

        if !summary.unsupported.is_empty() {
            let _ = writeln!(
                out,
                "Not converted (GIF): {}",
                summary.unsupported.len()
            );
        }

        if summary.has_failures() {
            let title = format!("Failed images ({}):", summary.failures.len());
            let _ = writeln!(out, "\n{}", self.paint(&title, ansi::RED));
            for failure in &summary.failures {
                let detail = failure
                    .error
                    .detail()
                    .unwrap_or_else(|| failure.error.message());
                let _ = writeln!(out, "  - {}: {detail}", failure.path.display());
            }
        } else if summary.processed > 0 {
            let _ = writeln!(
                out,
                "\n{}",
                self.paint("All images have been processed successfully!", ansi::GREEN)
            );
        }

        out
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
