use crate::errors::{Result, ViewerError};
use image::{DynamicImage, ImageBuffer, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::time::Instant;

const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;
const MMAP_THRESHOLD: u64 = 50 * 1024 * 1024;
const MAX_MEGAPIXELS: u64 = 100;

/// Byte order of the three samples that make up a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

impl ChannelOrder {
    /// Offsets of the red, green and blue samples inside a pixel.
    pub fn offsets(self) -> (usize, usize, usize) {
        match self {
            ChannelOrder::Rgb => (0, 1, 2),
            ChannelOrder::Bgr => (2, 1, 0),
        }
    }
}

/// An 8-bit, 3-channel image. The channel order travels with the pixels so
/// consumers never have to guess it.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbImage,
    order: ChannelOrder,
    path: Option<PathBuf>,
}

impl SourceImage {
    pub fn new(pixels: RgbImage, order: ChannelOrder) -> Self {
        Self {
            pixels,
            order,
            path: None,
        }
    }

    /// Wraps a row-major buffer of `width * height * 3` samples.
    pub fn from_raw(width: u32, height: u32, order: ChannelOrder, data: Vec<u8>) -> Result<Self> {
        let len = data.len();
        let pixels: RgbImage = ImageBuffer::from_raw(width, height, data).ok_or_else(|| {
            ViewerError::InvalidInput {
                message: format!(
                    "buffer of {} bytes cannot hold a {}x{} 3-channel image",
                    len, width, height
                ),
            }
        })?;
        Ok(Self::new(pixels, order))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw samples in the image's own channel order.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Opaque RGBA copy for display, independent of the stored order.
    pub fn to_rgba8(&self) -> RgbaImage {
        let (r, g, b) = self.order.offsets();
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let p = self.pixels.get_pixel(x, y).0;
            Rgba([p[r], p[g], p[b], 255])
        })
    }
}

pub fn load_image(path: &Path) -> Result<SourceImage> {
    if !path.exists() {
        return Err(ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: "File not found".to_string(),
        });
    }

    let file_size = std::fs::metadata(path)
        .map_err(|e| ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .len();
    if file_size > MAX_FILE_SIZE {
        return Err(ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: format!(
                "File too large: {}MB (max {}MB)",
                file_size / (1024 * 1024),
                MAX_FILE_SIZE / (1024 * 1024)
            ),
        });
    }

    let (width, height) = image::image_dimensions(path).map_err(|e| ViewerError::ImageLoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    ensure_within_pixel_limit(path, width, height)?;

    let started = Instant::now();
    let decoded = if file_size > MMAP_THRESHOLD {
        load_image_memory_mapped(path)?
    } else {
        image::open(path).map_err(|e| ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        duration_ms = started.elapsed().as_millis() as u64,
        "image decoded"
    );

    // Alpha, if any, is dropped; 16-bit and float sources are rescaled to 8 bits
    let mut image = SourceImage::new(decoded.to_rgb8(), ChannelOrder::Rgb);
    image.path = Some(path.to_path_buf());
    Ok(image)
}

// Checked against the header so oversized images are rejected before decoding
fn ensure_within_pixel_limit(path: &Path, width: u32, height: u32) -> Result<()> {
    let pixels = width as u64 * height as u64;
    if pixels > MAX_MEGAPIXELS * 1_000_000 {
        return Err(ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: format!(
                "Image too large: {}x{} is {:.1}MP (max {}MP)",
                width,
                height,
                pixels as f64 / 1_000_000.0,
                MAX_MEGAPIXELS
            ),
        });
    }
    Ok(())
}

fn load_image_memory_mapped(path: &Path) -> Result<DynamicImage> {
    use memmap2::Mmap;
    use std::fs::File;

    let file = File::open(path).map_err(|e| ViewerError::ImageLoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| ViewerError::ImageLoadError {
        path: path.to_path_buf(),
        message: format!("Memory mapping failed: {}", e),
    })?;

    image::load_from_memory(&mmap).map_err(|e| ViewerError::ImageLoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
