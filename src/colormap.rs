//! # Colour ramp visualisation
//!
//! This module renders a confidence map through a fixed jet-style colour ramp for display and
//! debugging. Zero-confidence pixels are drawn pure black as a "no data" cue.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use image::RgbImage;

use crate::confidence::ConfidenceMap;

// -----------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Render the given confidence map through the colour ramp into an RGB image.
///
/// This pass is independent of how the map was produced, any confidence map renders the same
/// way. Low scores come out blue, high scores red.
pub fn colorize(confidence: &ConfidenceMap) -> RgbImage {

    let mut rgb = RgbImage::new(
        confidence.width() as u32,
        confidence.height() as u32
    );

    for y in 0..rgb.height() {
        for x in 0..rgb.width() {
            let val = confidence.get(x as usize, y as usize);

            *rgb.get_pixel_mut(x, y) = image::Rgb(ramp(val));
        }
    }

    rgb
}

// -----------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Map a single confidence byte onto the ramp.
///
/// Zero is special-cased to pure black. All other values are normalised to `t` in `(0, 1]` and
/// pass through five linear segments: dark blue to blue, blue to cyan, cyan to yellow, yellow
/// to red, red to dark red. Channel fractions are scaled to bytes by truncation.
fn ramp(val: u8) -> [u8; 3] {
    if val == 0 {
        return [0, 0, 0];
    }

    let t = val as f32 / 255.0;

    let (r, g, b) = if t < 0.125 {
        (0.0, 0.0, 0.5 + 0.5 * (t / 0.125))
    }
    else if t < 0.375 {
        (0.0, (t - 0.125) / 0.25, 1.0)
    }
    else if t < 0.625 {
        ((t - 0.375) / 0.25, 1.0, 1.0 - (t - 0.375) / 0.25)
    }
    else if t < 0.875 {
        (1.0, 1.0 - (t - 0.625) / 0.25, 0.0)
    }
    else {
        (1.0 - 0.5 * ((t - 0.875) / 0.125), 0.0, 0.0)
    };

    [
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8
    ]
}
