use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::scanner::ImageExtension;

use super::{ImageAudit, Optimization};

/// An image that lacks one or more responsive copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSizes {
    pub path: PathBuf,
    pub missing: Vec<String>,
}

/// A variant lookup that failed; counted as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Coverage totals for one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub total_images: usize,
    pub with_webp: usize,
    pub with_responsive: usize,
    pub fully_optimized: usize,
    pub partially_optimized: usize,
    pub not_optimized: usize,
    pub missing_webp: Vec<PathBuf>,
    pub missing_responsive: Vec<MissingSizes>,
    pub probe_errors: Vec<ProbeFailure>,
    pub by_extension: BTreeMap<ImageExtension, usize>,
}

impl CoverageReport {
    /// Accumulates one image's findings.
    #[must_use]
    pub fn record(mut self, audit: ImageAudit) -> Self {
        self.total_images += 1;
        *self.by_extension.entry(audit.extension).or_default() += 1;

        self.probe_errors
            .extend(audit.probe_errors().map(|(path, reason)| ProbeFailure {
                path: path.to_path_buf(),
                reason: reason.to_string(),
            }));

        match audit.optimization() {
            Optimization::Full => self.fully_optimized += 1,
            Optimization::Partial => self.partially_optimized += 1,
            Optimization::None => self.not_optimized += 1,
        }

        if audit.has_webp() {
            self.with_webp += 1;
        } else {
            self.missing_webp.push(audit.path.clone());
        }

        let missing = audit.missing_sizes();
        if missing.is_empty() {
            self.with_responsive += 1;
        } else {
            self.missing_responsive.push(MissingSizes {
                path: audit.path,
                missing,
            });
        }

        self
    }

    /// Combines two partial reports, `self` first.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.total_images += other.total_images;
        self.with_webp += other.with_webp;
        self.with_responsive += other.with_responsive;
        self.fully_optimized += other.fully_optimized;
        self.partially_optimized += other.partially_optimized;
        self.not_optimized += other.not_optimized;
        self.missing_webp.extend(other.missing_webp);
        self.missing_responsive.extend(other.missing_responsive);
        self.probe_errors.extend(other.probe_errors);
        for (ext, count) in other.by_extension {
            *self.by_extension.entry(ext).or_default() += count;
        }
        self
    }

    /// Share of images with a WebP version; `None` when nothing was scanned.
    #[must_use]
    pub const fn webp_percent(&self) -> Option<usize> {
        percent(self.with_webp, self.total_images)
    }

    /// Share of images with every responsive size; `None` when nothing was scanned.
    #[must_use]
    pub const fn responsive_percent(&self) -> Option<usize> {
        percent(self.with_responsive, self.total_images)
    }

    #[must_use]
    pub fn is_fully_optimized(&self) -> bool {
        self.missing_webp.is_empty() && self.missing_responsive.is_empty()
    }
}

/// `round(count / total * 100)`, rounding halves up. `None` for an empty total.
#[must_use]
pub const fn percent(count: usize, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    Some((count * 200 + total) / (total * 2))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
