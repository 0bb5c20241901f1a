use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Raster formats the tool recognizes as original images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageExtension {
    Png,
    Jpg,
    Jpeg,
    Gif,
}

impl ImageExtension {
    pub const ALL: [Self; 4] = [Self::Png, Self::Jpg, Self::Jpeg, Self::Gif];

    /// Parses an extension without the leading dot, ignoring case.
    #[must_use]
    pub fn parse(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// GIF is audited but never converted.
    #[must_use]
    pub const fn is_convertible(self) -> bool {
        !matches!(self, Self::Gif)
    }

    /// Encoder used for the original-format responsive copies.
    #[must_use]
    pub const fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpg | Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Gif => image::ImageFormat::Gif,
        }
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.as_str())
    }
}

/// An original image discovered during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRecord {
    pub path: PathBuf,
    pub extension: ImageExtension,
}

impl ImageRecord {
    /// Builds a record when the path carries a recognized raster extension.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let extension = ImageExtension::from_path(&path)?;
        Some(Self { path, extension })
    }
}

/// Outcome of scanning one configured root.
#[derive(Debug)]
pub enum RootReport {
    Scanned { root: PathBuf, count: usize },
    Failed { root: PathBuf, error: crate::ImageVariantsError },
}

impl RootReport {
    #[must_use]
    pub fn root(&self) -> &Path {
        match self {
            Self::Scanned { root, .. } | Self::Failed { root, .. } => root,
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A nested entry that could not be read; the walk continued past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Images found under a single root.
#[derive(Debug, Default)]
pub struct RootScan {
    pub images: Vec<ImageRecord>,
    pub warnings: Vec<ScanWarning>,
}

/// Aggregated result of scanning every configured root.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Unique images in discovery order.
    pub images: Vec<ImageRecord>,
    pub root_reports: Vec<RootReport>,
    pub warnings: Vec<ScanWarning>,
    seen: HashSet<PathBuf>,
}

impl ScanOutcome {
    /// Folds one root's result into the outcome.
    ///
    /// Images already contributed by an earlier, overlapping root are dropped.
    /// Returns the report that was recorded for this root.
    pub fn record_root(
        &mut self,
        root: &Path,
        result: crate::Result<RootScan>,
    ) -> &RootReport {
        let report = match result {
            Ok(scan) => {
                let count = scan.images.len();
                for image in scan.images {
                    // `public` and `./public/icons` must yield the same key.
                    let key = dunce::canonicalize(&image.path)
                        .unwrap_or_else(|_| image.path.clone());
                    if self.seen.insert(key) {
                        self.images.push(image);
                    }
                }
                self.warnings.extend(scan.warnings);
                RootReport::Scanned {
                    root: root.to_path_buf(),
                    count,
                }
            }
            Err(error) => RootReport::Failed {
                root: root.to_path_buf(),
                error,
            },
        };
        self.root_reports.push(report);
        &self.root_reports[self.root_reports.len() - 1]
    }

    /// True when roots were configured but none of them could be read.
    #[must_use]
    pub fn all_roots_failed(&self) -> bool {
        !self.root_reports.is_empty() && self.root_reports.iter().all(RootReport::is_failed)
    }

    #[must_use]
    pub fn failed_roots(&self) -> usize {
        self.root_reports.iter().filter(|r| r.is_failed()).count()
    }
}
