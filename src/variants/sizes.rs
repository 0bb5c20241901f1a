use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ImageVariantsError, Result};

/// Ordered `name → width` table of responsive sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeTable(IndexMap<String, u32>);

impl SizeTable {
    #[must_use]
    pub const fn new(sizes: IndexMap<String, u32>) -> Self {
        Self(sizes)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, width)| (name.as_str(), *width))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn width(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks names and widths.
    ///
    /// # Errors
    /// Returns an error for an empty table, a zero width, or a name that is
    /// empty or contains characters that would break the file name.
    pub fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(ImageVariantsError::Config(
                "variants.sizes must define at least one size".to_string(),
            ));
        }

        for (name, width) in &self.0 {
            if !is_valid_size_name(name) {
                return Err(ImageVariantsError::Config(format!(
                    "invalid size name '{name}': use letters, digits, '_' or '-'"
                )));
            }
            if *width == 0 {
                return Err(ImageVariantsError::Config(format!(
                    "variants.sizes.{name} must be a positive width"
                )));
            }
        }
        Ok(())
    }
}

fn is_valid_size_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl Default for SizeTable {
    fn default() -> Self {
        Self(IndexMap::from([
            ("sm".to_string(), 300),
            ("md".to_string(), 600),
            ("lg".to_string(), 900),
        ]))
    }
}

impl FromIterator<(String, u32)> for SizeTable {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses `sm=300,md=600` as given on the command line.
impl FromStr for SizeTable {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut sizes = IndexMap::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, width) = entry
                .split_once('=')
                .ok_or_else(|| format!("expected NAME=WIDTH, got '{entry}'"))?;
            let width: u32 = width
                .trim()
                .parse()
                .map_err(|_| format!("invalid width in '{entry}'"))?;
            sizes.insert(name.trim().to_string(), width);
        }
        if sizes.is_empty() {
            return Err("at least one NAME=WIDTH pair is required".to_string());
        }
        Ok(Self(sizes))
    }
}

impl fmt::Display for SizeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.iter().map(|(n, w)| format!("{n}={w}")).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
#[path = "sizes_tests.rs"]
mod tests;
