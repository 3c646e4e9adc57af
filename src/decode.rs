use std::path::Path;

use anyhow::{Context, Result};

/// Raw RGBA8 pixel data, 4 bytes per pixel in row-major order.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Boundary between image I/O and the clustering pipeline. The pipeline only
/// ever sees a `PixelBuffer`, so tests can feed it synthetic data.
pub trait ImageDecoder {
    fn decode(&self, source: &Path) -> Result<PixelBuffer>;
}

/// Production decoder: reads an image file from disk, preserving alpha.
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(&self, source: &Path) -> Result<PixelBuffer> {
        let img = image::open(source).with_context(|| {
            if !source.exists() {
                format!("file not found: {}", source.display())
            } else {
                format!(
                    "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                    source.display()
                )
            }
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(PixelBuffer::new(width, height, rgba.into_raw()))
    }
}
