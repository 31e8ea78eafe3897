//! # Error standards
//!
//! This module provides a standardised error enum and result type for this crate.

// -----------------------------------------------------------------------------------------------
// TYPES
// -----------------------------------------------------------------------------------------------

/// Standard result type used in the confidence crate.
pub type Result<T> = std::result::Result<T, Error>;

// -----------------------------------------------------------------------------------------------
// ENUMERATIONS
// -----------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "Disparity map ({disp_width}x{disp_height}) and grayscale image \
        ({gray_width}x{gray_height}) have different dimensions"
    )]
    DimensionMismatch {
        disp_width: usize,
        disp_height: usize,
        gray_width: usize,
        gray_height: usize
    }
}
