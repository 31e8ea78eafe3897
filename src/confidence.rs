//! # General confidence objects
//!
//! This module provides generic confidence traits and structures for use by different algorithms.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use image::GrayImage;
use crate::error::*;

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

/// Raw disparity values less than or equal to this sentinel mark pixels with no stereo match.
pub const INVALID_DISPARITY: i16 = -16;

/// Q4.4 fixed point scale: a raw disparity divided by this gives the disparity in pixels.
pub const DISPARITY_SCALE: f32 = 16.0;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// A disparity map of signed 16-bit values in Q4.4 fixed point format.
///
/// Values at or below [`INVALID_DISPARITY`] mark unmatched pixels. The map is stored row-major
/// and must share its dimensions with the grayscale image it was matched against.
pub struct DisparityImage {
    data: Vec<i16>,
    width: usize,
    height: usize
}

/// A per-pixel confidence map over a disparity map.
///
/// Each byte scores the reliability of the disparity estimate at the same index, with 0 reserved
/// for pixels with no valid disparity.
pub struct ConfidenceMap {
    data: Vec<u8>,
    width: usize,
    height: usize
}

// -----------------------------------------------------------------------------------------------
// TRAITS
// -----------------------------------------------------------------------------------------------

pub trait ConfidenceAlgorithm {
    /// Compute the confidence map of the given disparity map and rectified grayscale image.
    fn compute(&mut self, disparity: &DisparityImage, grayscale: &GrayImage)
        -> Result<ConfidenceMap>;
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl DisparityImage {
    /// Create a new map with every pixel marked invalid.
    pub fn new(width: usize, height: usize) -> Self {
        DisparityImage {
            data: vec![INVALID_DISPARITY; width * height],
            width,
            height
        }
    }

    /// Create a map from existing raw Q4.4 values in row-major order.
    ///
    /// Panics if `data` does not contain exactly `width * height` elements.
    pub fn from_vec(width: usize, height: usize, data: Vec<i16>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "disparity data length {} does not match {}x{}",
            data.len(),
            width,
            height
        );

        DisparityImage {
            data,
            width,
            height
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> i16 {
        self.data[y * self.width + x]
    }

    pub fn put(&mut self, x: usize, y: usize, val: i16) {
        self.data[y * self.width + x] = val;
    }

    /// True if the pixel at the given position holds a valid match.
    pub fn is_valid(&self, x: usize, y: usize) -> bool {
        self.get(x, y) > INVALID_DISPARITY
    }

    /// The disparity at the given position in pixels, or `None` if the pixel is unmatched.
    pub fn disparity_px(&self, x: usize, y: usize) -> Option<f32> {
        match self.is_valid(x, y) {
            true => Some(self.get(x, y) as f32 / DISPARITY_SCALE),
            false => None
        }
    }

    pub fn as_slice(&self) -> &[i16] {
        &self.data
    }
}

impl ConfidenceMap {
    pub fn new(width: usize, height: usize) -> Self {
        ConfidenceMap {
            data: vec![0; width * height],
            width,
            height
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn put(&mut self, x: usize, y: usize, val: u8) {
        self.data[y * self.width + x] = val;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Converts the map into a Luma8 image, scores mapping directly to intensities.
    pub fn to_luma(&self) -> GrayImage {

        let mut new = image::GrayImage::new(
            self.width as u32,
            self.height as u32
        );

        for y in 0..new.height() {
            for x in 0..new.width() {
                *new.get_pixel_mut(x, y) = image::Luma([
                    self.get(x as usize, y as usize)
                ]);
            }
        }

        new
    }
}
