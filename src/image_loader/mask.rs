use crate::errors::{Result, ViewerError};
use image::GrayImage;

/// Row-major pixel selector with the same dimensions as the image it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    selected: Vec<bool>,
}

impl Mask {
    pub fn new(width: u32, height: u32, selected: Vec<bool>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if selected.len() != expected {
            return Err(ViewerError::InvalidInput {
                message: format!(
                    "mask of {} entries cannot cover a {}x{} image",
                    selected.len(),
                    width,
                    height
                ),
            });
        }
        Ok(Self {
            width,
            height,
            selected,
        })
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let selected = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            selected,
        }
    }

    /// 8-bit mask image: any non-zero sample selects its pixel.
    pub fn from_luma(image: &GrayImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            selected: image.as_raw().iter().map(|&v| v != 0).collect(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_selected(&self, x: u32, y: u32) -> bool {
        x < self.width
            && y < self.height
            && self.selected[y as usize * self.width as usize + x as usize]
    }

    pub fn selected_count(&self) -> u64 {
        self.selected.iter().filter(|&&s| s).count() as u64
    }

    pub(crate) fn as_slice(&self) -> &[bool] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(Mask::new(2, 2, vec![true; 4]).is_ok());
        let err = Mask::new(2, 2, vec![true; 3]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_from_fn_is_row_major() {
        // Select only the right column of a 2x3 mask
        let mask = Mask::from_fn(2, 3, |x, _| x == 1);
        assert_eq!(mask.as_slice(), &[false, true, false, true, false, true]);
        assert!(mask.is_selected(1, 2));
        assert!(!mask.is_selected(0, 2));
        assert!(!mask.is_selected(5, 0));
        assert_eq!(mask.selected_count(), 3);
    }

    #[test]
    fn test_from_luma_nonzero_selects() {
        let image = GrayImage::from_raw(3, 1, vec![0, 1, 255]).unwrap();
        let mask = Mask::from_luma(&image);
        assert_eq!(mask.dimensions(), (3, 1));
        assert_eq!(mask.as_slice(), &[false, true, true]);
    }
}
