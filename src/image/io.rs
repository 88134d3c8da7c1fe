//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/BMP/TGA into an owned RGB buffer
//!   (alpha and extra precision are dropped).
//! - `save_rgb_image`: write a buffer; the format follows the extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - [`ImageStore`]: the load/save seam used by the interactive shell.
use super::PixelBuffer;
use crate::error::{Error, Result};
use image::{DynamicImage, RgbImage};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Load an image from disk and convert it to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    debug!("loaded {} ({width}x{height})", path.display());
    PixelBuffer::from_raw(width, height, img.into_raw())
}

/// Save an RGB buffer; the encoder is picked from the file extension.
pub fn save_rgb_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let (width, height) = buffer.dimensions();
    let image = RgbImage::from_raw(width as u32, height as u32, buffer.as_raw().to_vec())
        .ok_or(Error::InvalidDimensions { width, height })?;
    DynamicImage::ImageRgb8(image)
        .save(path)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("saved {} ({width}x{height})", path.display());
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Loads and saves images by the name a user typed.
pub trait ImageStore {
    fn load(&mut self, name: &str) -> Result<PixelBuffer>;
    fn save(&mut self, buffer: &PixelBuffer, name: &str) -> Result<()>;
}

/// Store backed by the file system. Relative names resolve against `root`
/// when one is set, otherwise against the working directory.
#[derive(Clone, Debug, Default)]
pub struct FileStore {
    root: Option<PathBuf>,
}

impl FileStore {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        let path = name.as_ref();
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ImageStore for FileStore {
    fn load(&mut self, name: &str) -> Result<PixelBuffer> {
        load_rgb_image(&self.resolve(name))
    }

    fn save(&mut self, buffer: &PixelBuffer, name: &str) -> Result<()> {
        save_rgb_image(buffer, &self.resolve(name))
    }
}
