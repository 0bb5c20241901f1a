//! Batch generation of WebP and responsive variants.

mod codec;

pub use codec::{DEFAULT_QUALITY, WebPCodec, scaled_dimensions};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ImageVariantsError, Result};
use crate::scanner::ImageRecord;
use crate::variants::{SizeTable, variant_paths};

/// Whether existing variants are regenerated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Regenerate every variant on every run.
    #[default]
    Always,
    /// Only write variants whose destination does not exist yet.
    Missing,
}

/// Files touched while converting one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageConversion {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// A per-image failure; the batch continued past it.
#[derive(Debug)]
pub struct ConversionFailure {
    pub path: PathBuf,
    pub error: ImageVariantsError,
}

/// Totals for a conversion batch.
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub processed: usize,
    pub written: usize,
    pub skipped: usize,
    /// Images in formats that are audited but not converted (GIF).
    pub unsupported: Vec<PathBuf>,
    pub failures: Vec<ConversionFailure>,
}

impl ConversionSummary {
    #[must_use]
    pub fn converted(&self) -> usize {
        self.processed - self.failures.len()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Receives progress events from [`Converter::convert_all`].
pub trait ConversionObserver {
    fn on_start(&mut self, _image: &ImageRecord) {}
    fn on_written(&mut self, _path: &Path) {}
    fn on_skipped(&mut self, _path: &Path) {}
    fn on_unsupported(&mut self, _image: &ImageRecord) {}
    fn on_failed(&mut self, _image: &ImageRecord, _error: &ImageVariantsError) {}
    fn on_finish(&mut self, _image: &ImageRecord) {}
}

/// Observer that ignores every event.
impl ConversionObserver for () {}

pub struct Converter {
    sizes: SizeTable,
    codec: WebPCodec,
    overwrite: OverwritePolicy,
}

impl Converter {
    #[must_use]
    pub const fn new(sizes: SizeTable, codec: WebPCodec) -> Self {
        Self {
            sizes,
            codec,
            overwrite: OverwritePolicy::Always,
        }
    }

    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: OverwritePolicy) -> Self {
        self.overwrite = overwrite;
        self
    }

    fn should_write(&self, dest: &Path) -> bool {
        match self.overwrite {
            OverwritePolicy::Always => true,
            OverwritePolicy::Missing => !dest.exists(),
        }
    }

    fn needs_work(&self, image: &ImageRecord) -> bool {
        variant_paths(image, &self.sizes)
            .all_paths()
            .any(|dest| self.should_write(dest))
    }

    /// Writes the canonical WebP, then for each size the WebP and the
    /// original-format resize. The source is decoded once.
    ///
    /// # Errors
    /// Returns the first decode, encode or write error; variants written
    /// before the failure stay on disk.
    pub fn convert_image(&self, image: &ImageRecord) -> Result<ImageConversion> {
        self.convert_image_with(image, &mut ())
    }

    fn convert_image_with<O: ConversionObserver>(
        &self,
        image: &ImageRecord,
        observer: &mut O,
    ) -> Result<ImageConversion> {
        let mut conversion = ImageConversion::default();
        let paths = variant_paths(image, &self.sizes);

        if !self.needs_work(image) {
            for dest in paths.all_paths() {
                observer.on_skipped(dest);
                conversion.skipped.push(dest.to_path_buf());
            }
            return Ok(conversion);
        }

        let source = self.codec.decode(&image.path)?;

        self.write_step(&paths.webp, &mut conversion, observer, |dest| {
            self.codec.write_webp(&source, dest)
        })?;

        for variant in &paths.responsive {
            let resized = self.codec.resize(&source, variant.width);
            self.write_step(&variant.webp_path, &mut conversion, observer, |dest| {
                self.codec.write_webp(&resized, dest)
            })?;
            self.write_step(&variant.original_path, &mut conversion, observer, |dest| {
                self.codec.write_original(&resized, dest, image.extension)
            })?;
        }

        Ok(conversion)
    }

    fn write_step<O, W>(
        &self,
        dest: &Path,
        conversion: &mut ImageConversion,
        observer: &mut O,
        write: W,
    ) -> Result<()>
    where
        O: ConversionObserver,
        W: FnOnce(&Path) -> Result<()>,
    {
        if self.should_write(dest) {
            write(dest)?;
            observer.on_written(dest);
            conversion.written.push(dest.to_path_buf());
        } else {
            observer.on_skipped(dest);
            conversion.skipped.push(dest.to_path_buf());
        }
        Ok(())
    }

    /// Converts every image in order. A failing image is recorded and the
    /// batch moves on; nothing is retried.
    pub fn convert_all<'a, I, O>(&self, images: I, observer: &mut O) -> ConversionSummary
    where
        I: IntoIterator<Item = &'a ImageRecord>,
        O: ConversionObserver,
    {
        let mut summary = ConversionSummary::default();

        for image in images {
            if !image.extension.is_convertible() {
                observer.on_unsupported(image);
                summary.unsupported.push(image.path.clone());
                continue;
            }

            observer.on_start(image);
            summary.processed += 1;
            match self.convert_image_with(image, observer) {
                Ok(conversion) => {
                    summary.written += conversion.written.len();
                    summary.skipped += conversion.skipped.len();
                }
                Err(error) => {
                    observer.on_failed(image, &error);
                    summary.failures.push(ConversionFailure {
                        path: image.path.clone(),
                        error,
                    });
                }
            }
            observer.on_finish(image);
        }

        summary
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
