//! Read-only coverage audit of image variants.

mod report;

pub use report::{CoverageReport, MissingSizes, ProbeFailure, percent};

use std::path::{Path, PathBuf};

use crate::scanner::{ImageExtension, ImageRecord};
use crate::variants::{SizeTable, variant_paths};

/// Result of looking for a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
    /// The lookup itself failed (permissions, broken mount, ...).
    Error(String),
}

impl Presence {
    /// Reporting treats a failed lookup the same as a missing file.
    #[must_use]
    pub const fn counts_as_present(&self) -> bool {
        matches!(self, Self::Present)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(reason) => Some(reason),
            Self::Present | Self::Absent => None,
        }
    }
}

/// Trait for checking whether a variant exists.
pub trait ExistenceProbe {
    fn probe(&self, path: &Path) -> Presence;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl ExistenceProbe for FsProbe {
    fn probe(&self, path: &Path) -> Presence {
        match path.try_exists() {
            Ok(true) => Presence::Present,
            Ok(false) => Presence::Absent,
            Err(e) => Presence::Error(e.to_string()),
        }
    }
}

/// How completely an image is covered by its variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optimization {
    /// WebP and every responsive size are present.
    Full,
    /// Exactly one of the two conditions holds.
    Partial,
    None,
}

/// Findings for a single original image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAudit {
    pub path: PathBuf,
    pub extension: ImageExtension,
    pub webp_path: PathBuf,
    pub webp: Presence,
    /// `(size name, path checked, presence)` in size-table order.
    pub sizes: Vec<(String, PathBuf, Presence)>,
}

impl ImageAudit {
    #[must_use]
    pub const fn has_webp(&self) -> bool {
        self.webp.counts_as_present()
    }

    #[must_use]
    pub fn has_all_sizes(&self) -> bool {
        self.sizes.iter().all(|(_, _, p)| p.counts_as_present())
    }

    /// Size names whose responsive copy was not found.
    #[must_use]
    pub fn missing_sizes(&self) -> Vec<String> {
        self.sizes
            .iter()
            .filter(|(_, _, p)| !p.counts_as_present())
            .map(|(size, _, _)| size.clone())
            .collect()
    }

    #[must_use]
    pub fn optimization(&self) -> Optimization {
        match (self.has_webp(), self.has_all_sizes()) {
            (true, true) => Optimization::Full,
            (false, false) => Optimization::None,
            _ => Optimization::Partial,
        }
    }

    /// Lookups that failed rather than came back empty.
    pub fn probe_errors(&self) -> impl Iterator<Item = (&Path, &str)> {
        std::iter::once((self.webp_path.as_path(), &self.webp))
            .chain(self.sizes.iter().map(|(_, path, p)| (path.as_path(), p)))
            .filter_map(|(path, presence)| presence.error().map(|reason| (path, reason)))
    }
}

pub struct Auditor<P: ExistenceProbe> {
    sizes: SizeTable,
    probe: P,
}

impl<P: ExistenceProbe> Auditor<P> {
    #[must_use]
    pub const fn new(sizes: SizeTable, probe: P) -> Self {
        Self { sizes, probe }
    }

    /// Checks the canonical WebP and each original-format responsive copy.
    #[must_use]
    pub fn audit_image(&self, image: &ImageRecord) -> ImageAudit {
        let paths = variant_paths(image, &self.sizes);
        let webp = self.probe.probe(&paths.webp);
        let sizes = paths
            .responsive
            .into_iter()
            .map(|variant| {
                let presence = self.probe.probe(&variant.original_path);
                (variant.size, variant.original_path, presence)
            })
            .collect();

        ImageAudit {
            path: image.path.clone(),
            extension: image.extension,
            webp_path: paths.webp,
            webp,
            sizes,
        }
    }

    /// Audits every image and folds the findings into one report.
    #[must_use]
    pub fn audit<'a, I>(&self, images: I) -> CoverageReport
    where
        I: IntoIterator<Item = &'a ImageRecord>,
    {
        images
            .into_iter()
            .map(|image| self.audit_image(image))
            .fold(CoverageReport::default(), CoverageReport::record)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
