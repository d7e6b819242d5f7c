//! Vegetation classification
//!
//! Derives a boolean vegetation mask from an RGB raster by thresholding in
//! HSV space, with optional LAB lightness equalization and illumination
//! normalization ahead of the threshold test.

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use image::RgbImage;
use rayon::prelude::*;
use tracing::debug;

use crate::color::{self, Hsv};
use crate::mask::VegetationMask;
use crate::models::SegmentationOptions;

/// Lower bound of the green band, inclusive (hue in half-degrees).
const LOWER_GREEN: Hsv = Hsv {
    h: 35,
    s: 25,
    v: 25,
};

/// Upper bound of the green band, inclusive.
const UPPER_GREEN: Hsv = Hsv {
    h: 85,
    s: 255,
    v: 255,
};

/// Classify the vegetation pixels of an RGB raster.
///
/// With `use_lab_color_space` the raster's LAB lightness is equalized before
/// the HSV conversion; with `normalize_illumination` the HSV value channel
/// is equalized before thresholding. The two steps are independent and
/// composable. The input raster is never mutated.
pub fn detect_vegetation(image: &RgbImage, options: &SegmentationOptions) -> VegetationMask {
    let (width, height) = image.dimensions();

    let normalized: Cow<RgbImage> = if options.use_lab_color_space {
        Cow::Owned(color::equalize_lightness(image))
    } else {
        Cow::Borrowed(image)
    };

    let mut hsv = color::rgb_to_hsv_raster(&normalized);

    if options.normalize_illumination {
        color::equalize_value_channel(&mut hsv, width, height);
    }

    let data: Vec<bool> = hsv.par_iter().map(|pixel| in_green_band(*pixel)).collect();
    let mask = VegetationMask::from_raw(width, height, data);

    debug!(
        width,
        height,
        vegetation = mask.count(),
        "vegetation mask computed"
    );
    mask
}

fn in_green_band(pixel: Hsv) -> bool {
    in_range(pixel, LOWER_GREEN, UPPER_GREEN)
}

/// Closed-interval test on all three channels.
fn in_range(pixel: Hsv, lower: Hsv, upper: Hsv) -> bool {
    (lower.h..=upper.h).contains(&pixel.h)
        && (lower.s..=upper.s).contains(&pixel.s)
        && (lower.v..=upper.v).contains(&pixel.v)
}
