//! # Confidence Computation
//!
//! This crate provides per-pixel confidence scoring for stereo disparity maps, along with a
//! colour ramp visualisation of the resulting scores.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

mod confidence;
mod error;
pub mod colormap;
pub mod fusion;

// -----------------------------------------------------------------------------------------------
// EXPORTS
// -----------------------------------------------------------------------------------------------

pub mod prelude {
    pub use crate::confidence::{
        ConfidenceAlgorithm, ConfidenceMap, DisparityImage, DISPARITY_SCALE, INVALID_DISPARITY,
    };
    pub use crate::colormap::colorize;
    pub use crate::error::Error;
}
