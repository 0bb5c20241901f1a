//! Variant naming rule.
//!
//! Every derived file lives next to its original and is named by pure string
//! transformation of the original path:
//!
//! - canonical WebP: `{dir}/{stem}.webp`
//! - responsive copies: `{dir}/{stem}-{size}.webp` and `{dir}/{stem}-{size}.{ext}`
//!
//! The auditor, the converter and the `srcset` command all resolve names
//! through this module so the convention is defined in exactly one place.

mod sizes;

pub use sizes::SizeTable;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::scanner::ImageRecord;

pub const WEBP_EXTENSION: &str = "webp";

/// One named responsive size and the two files it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveVariant {
    pub size: String,
    pub width: u32,
    pub webp_path: PathBuf,
    pub original_path: PathBuf,
}

/// All paths derived from a single original image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPaths {
    pub webp: PathBuf,
    pub responsive: Vec<ResponsiveVariant>,
}

impl VariantPaths {
    /// Every derived path, canonical WebP first, then sizes in table order.
    pub fn all_paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.webp.as_path()).chain(
            self.responsive
                .iter()
                .flat_map(|v| [v.webp_path.as_path(), v.original_path.as_path()]),
        )
    }
}

/// Which file family a `srcset` string points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrcsetFormat {
    Original,
    WebP,
}

/// Canonical full-resolution WebP path for `path`.
#[must_use]
pub fn webp_path(path: &Path) -> PathBuf {
    path.with_extension(WEBP_EXTENSION)
}

/// `{dir}/{stem}-{size}.{ext}`.
#[must_use]
pub fn responsive_path(path: &Path, size: &str, ext: &str) -> PathBuf {
    let mut file_name = OsString::from(path.file_stem().unwrap_or_default());
    file_name.push("-");
    file_name.push(size);
    if !ext.is_empty() {
        file_name.push(".");
        file_name.push(ext);
    }
    path.with_file_name(file_name)
}

/// Resolves the full variant set for an image.
///
/// The original-format copies keep the extension exactly as written on disk,
/// so `photo.JPG` maps to `photo-sm.JPG`.
#[must_use]
pub fn variant_paths(image: &ImageRecord, sizes: &SizeTable) -> VariantPaths {
    let original_ext = image
        .path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_else(|| image.extension.as_str());

    let responsive = sizes
        .iter()
        .map(|(size, width)| ResponsiveVariant {
            size: size.to_string(),
            width,
            webp_path: responsive_path(&image.path, size, WEBP_EXTENSION),
            original_path: responsive_path(&image.path, size, original_ext),
        })
        .collect();

    VariantPaths {
        webp: webp_path(&image.path),
        responsive,
    }
}

/// Builds an HTML `srcset` value such as `a-sm.png 300w, a-md.png 600w`.
#[must_use]
pub fn srcset(path: &Path, sizes: &SizeTable, format: SrcsetFormat) -> String {
    let ext = match format {
        SrcsetFormat::WebP => WEBP_EXTENSION,
        SrcsetFormat::Original => path.extension().and_then(|e| e.to_str()).unwrap_or(""),
    };

    sizes
        .iter()
        .map(|(size, width)| {
            format!(
                "{} {width}w",
                responsive_path(path, size, ext).to_string_lossy()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// If `file_name` looks like `{stem}-{size}.{ext}` for a configured size,
/// returns the file name of the original it would derive from.
#[must_use]
pub fn split_variant_name(file_name: &str, sizes: &SizeTable) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    sizes.names().find_map(|size| {
        let base = stem.strip_suffix(size)?.strip_suffix('-')?;
        (!base.is_empty()).then(|| format!("{base}.{ext}"))
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
