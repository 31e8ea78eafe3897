//! # Colour ramp properties
//!
//! Integration tests for the confidence colour ramp.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use cv_confidence::prelude::*;

// -----------------------------------------------------------------------------------------------
// HELPERS
// -----------------------------------------------------------------------------------------------

/// Confidence map of a single score.
fn uniform_conf(width: usize, height: usize, val: u8) -> ConfidenceMap {
    let mut conf = ConfidenceMap::new(width, height);

    for y in 0..height {
        for x in 0..width {
            conf.put(x, y, val);
        }
    }

    conf
}

/// Render a single score and return its RGB triple.
fn ramp_colour(val: u8) -> [u8; 3] {
    let rgb = colorize(&uniform_conf(2, 2, val));
    rgb.get_pixel(0, 0).0
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------

/// Zero confidence renders pure black everywhere, the "no data" cue.
#[test]
fn zero_renders_black() {
    let rgb = colorize(&uniform_conf(8, 8, 0));

    for (_, _, px) in rgb.enumerate_pixels() {
        assert_eq!(px.0, [0, 0, 0]);
    }
}

/// The faintest non-zero score is already distinguishable from the black cue.
#[test]
fn lowest_score_is_not_black() {
    assert_ne!(ramp_colour(1), [0, 0, 0]);
}

/// Full confidence lands deep in the red end of the ramp.
#[test]
fn full_scale_is_red() {
    let [r, g, b] = ramp_colour(255);

    assert!(r > 100, "red channel {} too low", r);
    assert_eq!(g, 0);
    assert_eq!(b, 0);
}

/// A midscale score renders a visible colour.
#[test]
fn midscale_is_visible() {
    let [r, g, b] = ramp_colour(128);

    assert!(r > 0 || g > 0 || b > 0);
}

/// Spot checks along all five segments of the ramp.
///
/// Expected triples are computed from the segment equations; channel bytes are allowed one
/// count of slack for float truncation landing either side of a half-count boundary.
#[test]
fn segment_spot_checks() {
    let cases: [(u8, [i32; 3]); 5] = [
        (16, [0, 0, 191]),    // dark blue to blue
        (64, [0, 128, 255]),  // blue to cyan
        (128, [129, 255, 125]), // cyan to yellow
        (192, [255, 124, 0]), // yellow to red
        (255, [127, 0, 0])    // red to dark red
    ];

    for (val, expected) in &cases {
        let actual = ramp_colour(*val);

        for ch in 0..3 {
            assert!(
                (actual[ch] as i32 - expected[ch]).abs() <= 1,
                "value {} channel {}: got {}, expected about {}",
                val,
                ch,
                actual[ch],
                expected[ch]
            );
        }
    }
}

/// Repeat renders over the same map are byte-identical.
#[test]
fn colorize_is_deterministic() {
    let mut conf = ConfidenceMap::new(16, 16);
    for y in 0..16 {
        for x in 0..16 {
            conf.put(x, y, (x * 16 + y) as u8);
        }
    }

    let first = colorize(&conf);
    let second = colorize(&conf);

    assert_eq!(first.as_raw(), second.as_raw());
}

/// The ramp reads any confidence map, not just ones the fusion pass produced.
#[test]
fn arbitrary_maps_render() {
    let conf = ConfidenceMap::new(3, 5);
    let rgb = colorize(&conf);

    assert_eq!(rgb.dimensions(), (3, 5));
}
