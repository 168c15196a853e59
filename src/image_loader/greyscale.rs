use super::loader::SourceImage;
use crate::errors::{Result, ViewerError};
use image::GrayImage;

// BT.601 luma weights in 14-bit fixed point; they sum to 1 << 14.
const WEIGHT_R: u32 = 4899;
const WEIGHT_G: u32 = 9617;
const WEIGHT_B: u32 = 1868;
const SHIFT: u32 = 14;
const HALF: u32 = 1 << (SHIFT - 1);

/// Luma of a single pixel, rounded to the nearest integer.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = (WEIGHT_R * r as u32 + WEIGHT_G * g as u32 + WEIGHT_B * b as u32 + HALF) >> SHIFT;
    y.min(255) as u8
}

/// Converts a 3-channel image to a single-channel intensity buffer of the
/// same size. The image's channel-order tag decides which sample is red.
pub fn to_greyscale(image: &SourceImage) -> Result<GrayImage> {
    let (width, height) = image.dimensions();
    let raw = image.as_raw();
    let expected = width as usize * height as usize * 3;
    if raw.len() != expected {
        return Err(ViewerError::InvalidInput {
            message: format!(
                "expected {} samples for {}x{} image, found {}",
                expected,
                width,
                height,
                raw.len()
            ),
        });
    }

    let (r, g, b) = image.channel_order().offsets();
    let samples: Vec<u8> = raw
        .chunks_exact(3)
        .map(|px| luma(px[r], px[g], px[b]))
        .collect();

    GrayImage::from_raw(width, height, samples).ok_or_else(|| ViewerError::InvalidInput {
        message: format!("could not build {}x{} greyscale buffer", width, height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_loader::ChannelOrder;

    #[test]
    fn test_black_and_white_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
    }

    #[test]
    fn test_primary_weights() {
        // 0.299 * 255, 0.587 * 255, 0.114 * 255 rounded
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_all_black_image() {
        let image = SourceImage::from_raw(2, 2, ChannelOrder::Rgb, vec![0; 12]).unwrap();
        let grey = to_greyscale(&image).unwrap();
        assert_eq!(grey.dimensions(), (2, 2));
        assert!(grey.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_channel_order_is_respected() {
        let rgb = SourceImage::from_raw(2, 1, ChannelOrder::Rgb, vec![200, 40, 10, 0, 0, 255]).unwrap();
        let bgr = SourceImage::from_raw(2, 1, ChannelOrder::Bgr, vec![10, 40, 200, 255, 0, 0]).unwrap();

        let a = to_greyscale(&rgb).unwrap();
        let b = to_greyscale(&bgr).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
        assert_eq!(a.get_pixel(1, 0).0[0], 29);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let data: Vec<u8> = (0..(17 * 9 * 3)).map(|i| (i * 37 % 256) as u8).collect();
        let image = SourceImage::from_raw(17, 9, ChannelOrder::Rgb, data).unwrap();

        let first = to_greyscale(&image).unwrap();
        let second = to_greyscale(&image).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_uniform_colour_gives_uniform_grey() {
        let image = SourceImage::from_raw(3, 3, ChannelOrder::Rgb, [90u8, 120, 33].repeat(9)).unwrap();
        let grey = to_greyscale(&image).unwrap();
        let expected = luma(90, 120, 33);
        assert!(grey.as_raw().iter().all(|&v| v == expected));
    }
}
