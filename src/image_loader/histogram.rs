use super::mask::Mask;
use crate::errors::{Result, ViewerError};
use image::GrayImage;

/// Number of intensity levels in an 8-bit greyscale histogram.
pub const BINS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; BINS],
}

impl Histogram {
    pub fn counts(&self) -> &[u64; BINS] {
        &self.counts
    }

    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// Number of pixels that contributed.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Most populated level, lowest one on ties. `None` when nothing was counted.
    pub fn peak_level(&self) -> Option<u8> {
        let max = self.max_count();
        if max == 0 {
            return None;
        }
        self.counts
            .iter()
            .position(|&c| c == max)
            .map(|level| level as u8)
    }
}

// Calculate greyscale histogram, optionally restricted to the pixels a mask selects
pub fn compute_histogram(grey: &GrayImage, mask: Option<&Mask>) -> Result<Histogram> {
    let mut counts = [0u64; BINS];

    match mask {
        None => {
            for &v in grey.as_raw() {
                counts[v as usize] += 1;
            }
        }
        Some(mask) => {
            if mask.dimensions() != grey.dimensions() {
                return Err(ViewerError::DimensionMismatch {
                    expected: grey.dimensions(),
                    actual: mask.dimensions(),
                });
            }
            for (&v, &selected) in grey.as_raw().iter().zip(mask.as_slice()) {
                if selected {
                    counts[v as usize] += 1;
                }
            }
        }
    }

    Ok(Histogram { counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| image::Luma([((x * 7 + y * 13) % 256) as u8]))
    }

    #[test]
    fn test_sum_equals_pixel_count() {
        let grey = ramp(31, 17);
        let hist = compute_histogram(&grey, None).unwrap();
        assert_eq!(hist.counts().len(), BINS);
        assert_eq!(hist.total(), 31 * 17);
    }

    #[test]
    fn test_uniform_image() {
        let grey = GrayImage::from_pixel(6, 4, image::Luma([42]));
        let hist = compute_histogram(&grey, None).unwrap();
        assert_eq!(hist.count(42), 24);
        assert_eq!(hist.total(), 24);
        assert_eq!(hist.peak_level(), Some(42));
        for level in (0..=255u8).filter(|&l| l != 42) {
            assert_eq!(hist.count(level), 0);
        }
    }

    #[test]
    fn test_mask_restricts_counts() {
        let grey = ramp(10, 10);
        let mask = Mask::from_fn(10, 10, |x, y| (x + y) % 3 == 0);
        let hist = compute_histogram(&grey, Some(&mask)).unwrap();
        assert_eq!(hist.total(), mask.selected_count());

        // Cross-check against a direct count
        let mut expected = [0u64; BINS];
        for (x, y, p) in grey.enumerate_pixels() {
            if mask.is_selected(x, y) {
                expected[p.0[0] as usize] += 1;
            }
        }
        assert_eq!(hist.counts(), &expected);
    }

    #[test]
    fn test_all_false_mask() {
        let grey = ramp(4, 4);
        let mask = Mask::new(4, 4, vec![false; 16]).unwrap();
        let hist = compute_histogram(&grey, Some(&mask)).unwrap();
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.max_count(), 0);
        assert_eq!(hist.peak_level(), None);
    }

    #[test]
    fn test_all_true_mask_matches_unmasked() {
        let grey = ramp(8, 5);
        let mask = Mask::from_fn(8, 5, |_, _| true);
        assert_eq!(
            compute_histogram(&grey, Some(&mask)).unwrap(),
            compute_histogram(&grey, None).unwrap()
        );
    }

    #[test]
    fn test_mask_dimension_mismatch() {
        let grey = ramp(4, 3);
        let mask = Mask::from_fn(3, 4, |_, _| true);
        match compute_histogram(&grey, Some(&mask)) {
            Err(ViewerError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, (4, 3));
                assert_eq!(actual, (3, 4));
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }
}
