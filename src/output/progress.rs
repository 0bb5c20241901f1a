use std::io::{IsTerminal, Write};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for conversion batches.
///
/// The bar is disabled in quiet mode or when stderr is not a TTY; status lines
/// are then printed directly instead of above the bar.
pub struct ConvertProgress {
    progress_bar: ProgressBar,
    visible: bool,
    quiet: bool,
}

impl ConvertProgress {
    /// Creates a new progress bar for `total` images.
    ///
    /// # Panics
    ///
    /// This function will panic if the progress bar template is invalid.
    /// The template is a compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let visible = !quiet && is_tty;
        let progress_bar = if visible {
            Self::create_visible_progress_bar(total)
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress_bar,
            visible,
            quiet,
        }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Converting [{bar:40.cyan/blue}] {pos}/{len} images ({percent}%)",
                )
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints a status line without tearing the bar. Suppressed in quiet mode.
    pub fn println(&self, line: &str) {
        if self.quiet {
            return;
        }
        if self.visible {
            self.progress_bar
                .suspend(|| Self::write_line(&mut std::io::stdout().lock(), line));
        } else {
            Self::write_line(&mut std::io::stdout().lock(), line);
        }
    }

    /// Status lines are report output and always go to stdout, bar or not.
    fn write_line<W: Write>(w: &mut W, line: &str) {
        let _ = writeln!(w, "{line}");
    }

    /// Runs `f` with the bar hidden, for output written to stderr.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
