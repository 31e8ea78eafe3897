//! # Signal fusion confidence computation
//!
//! This module scores each disparity pixel by fusing three independent signals: match validity,
//! local image texture and local disparity noise. Validity gates the score outright, while the
//! texture and noise terms combine multiplicatively, so either weak texture or a noisy
//! neighbourhood alone is enough to suppress a pixel.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use image::GrayImage;
use log::debug;
use serde::Deserialize;

use crate::confidence::{ConfidenceAlgorithm, ConfidenceMap, DisparityImage, INVALID_DISPARITY};
use crate::error::*;

#[cfg(feature = "statistics")]
use plotters::prelude::*;

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

/// Default gradient magnitude at which the texture score saturates.
pub const DEFAULT_TEXTURE_CAP: f32 = 200.0;

/// Default local variance (in squared raw Q4.4 units) at which the variance score is one half.
pub const DEFAULT_VARIANCE_HALF_LIFE: f32 = 400.0;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

pub struct SignalFusion {
    params: Params
}

/// Tuning parameters for the fusion.
///
/// The defaults are calibrated empirically and should be adjusted per sensor and lens rather
/// than edited here.
#[derive(Deserialize, Debug)]
pub struct Params {
    /// Gradient magnitude above which extra texture confers no additional confidence.
    pub texture_cap: f32,

    /// Local disparity variance at which the variance score drops to 0.5. Larger values
    /// tolerate noisier maps.
    pub variance_half_life: f32
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Params {
            texture_cap: DEFAULT_TEXTURE_CAP,
            variance_half_life: DEFAULT_VARIANCE_HALF_LIFE
        }
    }
}

impl SignalFusion {
    /// Create a new instance of the algorithm with the given parameters.
    pub fn new(params: Params) -> Self {
        Self {
            params
        }
    }

    /// Sobel gradient magnitude estimate at the given pixel.
    ///
    /// Border pixels have no full 3x3 neighbourhood and are treated as textureless, returning 0.
    /// Interior pixels return `|gx| + |gy|`, a cheap monotone stand-in for the true gradient
    /// magnitude, in approximately `[0, 1020]` for 8-bit input.
    fn texture_magnitude(grayscale: &GrayImage, x: u32, y: u32) -> i32 {
        let (width, height) = grayscale.dimensions();

        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            return 0;
        }

        let px = |dx: i32, dy: i32| -> i32 {
            grayscale.get_pixel(
                (x as i32 + dx) as u32,
                (y as i32 + dy) as u32
            )[0] as i32
        };

        // Horizontal and vertical Sobel responses with the standard 1/2/1 weights
        let gx = px(1, -1) + 2 * px(1, 0) + px(1, 1)
            - px(-1, -1) - 2 * px(-1, 0) - px(-1, 1);
        let gy = px(-1, 1) + 2 * px(0, 1) + px(1, 1)
            - px(-1, -1) - 2 * px(0, -1) - px(1, -1);

        gx.abs() + gy.abs()
    }

    /// Population variance of the valid disparity samples in a 3x3 window around the given
    /// pixel, in squared raw Q4.4 units.
    ///
    /// The window is clamped to the map edges. Unmatched samples are skipped entirely, and
    /// fewer than 2 valid samples yields 0 variance.
    fn local_variance(disparity: &DisparityImage, x: usize, y: usize) -> f32 {
        let x_min = x.saturating_sub(1);
        let y_min = y.saturating_sub(1);
        let x_max = (x + 1).min(disparity.width() - 1);
        let y_max = (y + 1).min(disparity.height() - 1);

        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        let mut count = 0u32;

        for wy in y_min..=y_max {
            for wx in x_min..=x_max {
                let d = disparity.get(wx, wy);

                if d > INVALID_DISPARITY {
                    let d = d as f64;
                    sum += d;
                    sum_sq += d * d;
                    count += 1;
                }
            }
        }

        // A single sample has no meaningful variance
        if count < 2 {
            return 0.0;
        }

        let mean = sum / count as f64;
        let mut var = sum_sq / count as f64 - mean * mean;

        // Cancellation can leave a tiny negative residue
        if var < 0.0 {
            var = 0.0;
        }

        var as f32
    }
}

impl ConfidenceAlgorithm for SignalFusion {
    /// Compute the confidence map for the given disparity map and grayscale image.
    fn compute(&mut self, disparity: &DisparityImage, grayscale: &GrayImage)
        -> Result<ConfidenceMap>
    {
        let (gray_width, gray_height) = grayscale.dimensions();

        if disparity.width() != gray_width as usize
            || disparity.height() != gray_height as usize
        {
            return Err(Error::DimensionMismatch {
                disp_width: disparity.width(),
                disp_height: disparity.height(),
                gray_width: gray_width as usize,
                gray_height: gray_height as usize
            });
        }

        let mut conf_map = ConfidenceMap::new(disparity.width(), disparity.height());

        // Number of pixels scored above zero, for the summary log
        let mut num_scored = 0usize;

        for y in 0..disparity.height() {
            for x in 0..disparity.width() {

                // An unmatched pixel scores zero no matter what the other signals say
                if !disparity.is_valid(x, y) {
                    conf_map.put(x, y, 0);
                    continue;
                }

                let magnitude = Self::texture_magnitude(grayscale, x as u32, y as u32);
                let variance = Self::local_variance(disparity, x, y);

                // Texture saturates at the cap, noise decays on a reciprocal curve
                let texture_score = (magnitude as f32 / self.params.texture_cap).min(1.0);
                let variance_score = self.params.variance_half_life
                    / (self.params.variance_half_life + variance);

                let mut raw = texture_score * variance_score * 255.0;

                if raw < 0.0 {
                    raw = 0.0;
                }
                else if raw > 255.0 {
                    raw = 255.0;
                }

                // Truncate rather than round, matching the reference output
                let val = raw as u8;

                conf_map.put(x, y, val);

                if val > 0 {
                    num_scored += 1;
                }
            }
        }

        debug!(
            "Confidence computed for {}x{} map, {} of {} pixels scored above zero",
            conf_map.width(),
            conf_map.height(),
            num_scored,
            conf_map.width() * conf_map.height()
        );

        // ---- PLOTTING ----
        #[cfg(feature = "statistics")]
        {
            let mut histogram = [0usize; 256];
            for &val in conf_map.as_slice() {
                histogram[val as usize] += 1;
            }

            let max_count = histogram.iter().max().copied().unwrap_or(0) + 1;

            let hist_area = BitMapBackend::new(
                "plots/fusion/confidence_hist.png",
                (800, 600)
            ).into_drawing_area();
            hist_area.fill(&WHITE).unwrap();

            let mut chart = ChartBuilder::on(&hist_area)
                .caption("Confidence distribution", ("sans-serif", 20).into_font())
                .margin(5)
                .x_label_area_size(30)
                .y_label_area_size(30)
                .build_ranged(
                    0..256usize,
                    0..max_count
                ).unwrap();

            chart.configure_mesh().draw().unwrap();

            chart
                .draw_series(LineSeries::new(
                    histogram.iter().enumerate().map(|(val, &count)| (val, count)),
                    &RED
                )).unwrap()
                .label("Pixel count")
                .legend(|(x, y)|
                    PathElement::new(vec![(x, y), (x + 20, y)], &RED
                ));

            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw().unwrap();

            println!("Stats plotting complete");
        }

        Ok(conf_map)
    }
}
