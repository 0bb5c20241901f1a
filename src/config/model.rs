use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::convert::{DEFAULT_QUALITY, OverwritePolicy};
use crate::scanner::ImageExtension;
use crate::variants::SizeTable;

/// Where to look for originals and which files count as images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Directories scanned recursively, in order.
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    /// Extensions treated as original images (matched case-insensitively).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<ImageExtension>,

    /// Glob patterns for files to leave out of every run.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// Responsive size table shared by `check` and `convert`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantsConfig {
    #[serde(default)]
    pub sizes: SizeTable,
}

/// Encoder settings for `convert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertConfig {
    /// WebP quality, 0-100.
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// `always` regenerates every variant, `missing` only fills gaps.
    #[serde(default)]
    pub overwrite: OverwritePolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            overwrite: OverwritePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub variants: VariantsConfig,

    #[serde(default)]
    pub convert: ConvertConfig,
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("public")]
}

fn default_extensions() -> Vec<ImageExtension> {
    ImageExtension::ALL.to_vec()
}

const fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
