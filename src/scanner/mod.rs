mod filter;
mod types;

pub use filter::{FileFilter, ImageFilter};
pub use types::{
    ImageExtension, ImageRecord, RootReport, RootScan, ScanOutcome, ScanWarning,
};

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ImageVariantsError, Result};
use crate::variants::{SizeTable, split_variant_name};

/// Trait for scanning directories and finding images.
pub trait FileScanner {
    /// Scan a directory tree and return every matching image.
    ///
    /// # Errors
    /// Returns an error if the root itself is missing, not a directory, or
    /// cannot be listed. Unreadable entries below the root are reported as
    /// warnings instead.
    fn scan(&self, root: &Path) -> Result<RootScan>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    variant_sizes: Option<SizeTable>,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            variant_sizes: None,
        }
    }

    /// Skip files that are responsive copies (`{stem}-{size}.{ext}`) of an
    /// original sitting in the same directory.
    #[must_use]
    pub fn skipping_variants(mut self, sizes: SizeTable) -> Self {
        self.variant_sizes = Some(sizes);
        self
    }

    fn is_generated_variant(&self, path: &Path) -> bool {
        let Some(sizes) = &self.variant_sizes else {
            return false;
        };
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        split_variant_name(file_name, sizes)
            .is_some_and(|original| path.with_file_name(original).is_file())
    }

    fn check_root(root: &Path) -> Result<()> {
        let to_error = |source| ImageVariantsError::ScanRoot {
            path: root.to_path_buf(),
            source,
        };
        let metadata = fs::metadata(root).map_err(to_error)?;
        if !metadata.is_dir() {
            return Err(to_error(std::io::Error::other("not a directory")));
        }
        fs::read_dir(root).map_err(to_error)?;
        Ok(())
    }

    fn scan_impl(&self, root: &Path) -> RootScan {
        let mut scan = RootScan::default();

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    scan.warnings.push(ScanWarning {
                        path: e.path().map(Path::to_path_buf),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file()
                || !self.filter.should_include(path)
                || self.is_generated_variant(path)
            {
                continue;
            }

            if let Some(record) = ImageRecord::from_path(entry.into_path()) {
                scan.images.push(record);
            }
        }

        scan
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<RootScan> {
        Self::check_root(root)?;
        Ok(self.scan_impl(root))
    }
}

/// Scans every root in order, tolerating per-root failures.
pub fn scan_roots<S: FileScanner>(scanner: &S, roots: &[PathBuf]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for root in roots {
        outcome.record_root(root, scanner.scan(root));
    }
    outcome
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
