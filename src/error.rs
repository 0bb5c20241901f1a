use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageVariantsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Cannot scan directory: {path}")]
    ScanRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No image directory could be scanned ({attempted} configured)")]
    NoAccessibleRoots { attempted: usize },

    #[error("Failed to decode image: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode WebP for {path}: {reason}")]
    WebPEncode { path: PathBuf, reason: String },

    #[error("Failed to write image: {path}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ImageVariantsError {
    /// Short category label used as the prefix of printed errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::ScanRoot { .. } | Self::NoAccessibleRoots { .. } => "Scan",
            Self::Decode { .. } | Self::WebPEncode { .. } | Self::Save { .. } => "Codec",
        }
    }

    /// Main message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::InvalidPattern { pattern, .. } => format!("invalid glob pattern '{pattern}'"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(_) => "failed to parse configuration".to_string(),
            Self::TomlSerialize(_) => "failed to serialize configuration".to_string(),
            Self::ScanRoot { path, .. } => format!("cannot scan '{}'", path.display()),
            Self::NoAccessibleRoots { attempted } => {
                format!("none of the {attempted} configured image directories could be scanned")
            }
            Self::Decode { path, .. } => format!("failed to decode '{}'", path.display()),
            Self::WebPEncode { path, .. } => {
                format!("failed to encode WebP for '{}'", path.display())
            }
            Self::Save { path, .. } => format!("failed to write '{}'", path.display()),
        }
    }

    /// Underlying cause, if there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Config(_) | Self::Io(_) | Self::NoAccessibleRoots { .. } => None,
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => Some(e.message().to_string()),
            Self::TomlSerialize(e) => Some(e.to_string()),
            Self::ScanRoot { source, .. } => Some(source.to_string()),
            Self::Decode { source, .. } | Self::Save { source, .. } => Some(source.to_string()),
            Self::WebPEncode { reason, .. } => Some(reason.clone()),
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NoAccessibleRoots { .. } => Some(
                "check `scanner.roots` in .image-variants.toml or pass directories explicitly",
            ),
            Self::TomlParse(_) => Some("run `image-variants config validate` for details"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageVariantsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
