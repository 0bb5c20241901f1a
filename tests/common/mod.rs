#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the image-variants binary.
#[macro_export]
macro_rules! image_variants {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("image-variants"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        self.ensure_parent(&path);
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an `.image-variants.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".image-variants.toml", content);
    }

    /// Writes a solid-color image; the format follows the extension.
    pub fn create_image(&self, relative_path: &str, width: u32, height: u32) {
        let path = self.dir.path().join(relative_path);
        self.ensure_parent(&path);
        RgbImage::from_pixel(width, height, Rgb([200, 120, 40]))
            .save(&path)
            .expect("Failed to write image");
    }

    /// Writes a PNG with a translucent alpha channel.
    pub fn create_rgba_png(&self, relative_path: &str, width: u32, height: u32) {
        let path = self.dir.path().join(relative_path);
        self.ensure_parent(&path);
        RgbaImage::from_pixel(width, height, Rgba([20, 40, 220, 128]))
            .save_with_format(&path, image::ImageFormat::Png)
            .expect("Failed to write image");
    }

    /// Returns true if `relative_path` exists in the temp directory.
    pub fn exists(&self, relative_path: &str) -> bool {
        self.dir.path().join(relative_path).exists()
    }

    /// Width and height of an image in the temp directory.
    pub fn dimensions(&self, relative_path: &str) -> (u32, u32) {
        image::image_dimensions(self.dir.path().join(relative_path))
            .expect("Failed to read image dimensions")
    }

    fn ensure_parent(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
