use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{ImageVariantsError, Result};

use super::ImageExtension;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose extension is in the allow-list (any case) and whose
/// path matches none of the exclude globs.
pub struct ImageFilter {
    extensions: Vec<ImageExtension>,
    exclude_patterns: GlobSet,
}

impl ImageFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<ImageExtension>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| ImageVariantsError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns =
            builder
                .build()
                .map_err(|e| ImageVariantsError::InvalidPattern {
                    pattern: "combined patterns".to_string(),
                    source: e,
                })?;

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    fn has_image_extension(&self, path: &Path) -> bool {
        ImageExtension::from_path(path).is_some_and(|ext| self.extensions.contains(&ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ImageFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_image_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
