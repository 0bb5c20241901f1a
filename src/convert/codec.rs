use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};

use crate::error::{ImageVariantsError, Result};
use crate::scanner::ImageExtension;

pub const DEFAULT_QUALITY: u8 = 85;

/// Width and height after scaling to `target_width`, keeping the aspect
/// ratio. Images already narrower than the target keep their size.
#[must_use]
pub fn scaled_dimensions(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    if width == 0 || target_width >= width {
        return (width, height);
    }
    let scaled = (u64::from(height) * u64::from(target_width) + u64::from(width) / 2)
        / u64::from(width);
    let scaled = u32::try_from(scaled).unwrap_or(height).max(1);
    (target_width, scaled)
}

/// Decodes originals and writes WebP and original-format variants.
#[derive(Debug, Clone, Copy)]
pub struct WebPCodec {
    quality: u8,
}

impl WebPCodec {
    #[must_use]
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.min(100),
        }
    }

    #[must_use]
    pub const fn quality(&self) -> u8 {
        self.quality
    }

    /// Decodes an image, sniffing the format from its contents.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not a decodable image.
    pub fn decode(&self, path: &Path) -> Result<DynamicImage> {
        let to_error = |source| ImageVariantsError::Decode {
            path: path.to_path_buf(),
            source,
        };
        ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(to_error)
    }

    /// Scales `img` down to `target_width` when it is wider.
    #[must_use]
    pub fn resize(&self, img: &DynamicImage, target_width: u32) -> DynamicImage {
        let (width, height) = img.dimensions();
        let (new_width, new_height) = scaled_dimensions(width, height, target_width);
        if (new_width, new_height) == (width, height) {
            return img.clone();
        }
        img.resize_exact(new_width, new_height, FilterType::Lanczos3)
    }

    /// Encodes `img` as lossy WebP at the configured quality and writes it.
    ///
    /// # Errors
    /// Returns an error if encoding or writing fails.
    pub fn write_webp(&self, img: &DynamicImage, dest: &Path) -> Result<()> {
        // The WebP encoder only accepts 8-bit RGB or RGBA buffers.
        let img = if img.color().has_alpha() {
            DynamicImage::ImageRgba8(img.to_rgba8())
        } else {
            DynamicImage::ImageRgb8(img.to_rgb8())
        };
        let encoder =
            webp::Encoder::from_image(&img).map_err(|reason| ImageVariantsError::WebPEncode {
                path: dest.to_path_buf(),
                reason: reason.to_string(),
            })?;
        // `encode` unwraps libwebp errors (e.g. sides over 16383 px).
        let memory = encoder
            .encode_simple(false, f32::from(self.quality))
            .map_err(|e| ImageVariantsError::WebPEncode {
                path: dest.to_path_buf(),
                reason: format!("{e:?}"),
            })?;
        fs::write(dest, &*memory)?;
        Ok(())
    }

    /// Writes `img` in the original's format.
    ///
    /// # Errors
    /// Returns an error if the encoder rejects the image or the file cannot be written.
    pub fn write_original(
        &self,
        img: &DynamicImage,
        dest: &Path,
        extension: ImageExtension,
    ) -> Result<()> {
        let to_error = |source| ImageVariantsError::Save {
            path: dest.to_path_buf(),
            source,
        };
        match extension {
            // JPEG has no alpha channel.
            ImageExtension::Jpg | ImageExtension::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
                .save_with_format(dest, extension.image_format())
                .map_err(to_error),
            ImageExtension::Png | ImageExtension::Gif => img
                .save_with_format(dest, extension.image_format())
                .map_err(to_error),
        }
    }
}

impl Default for WebPCodec {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY)
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
