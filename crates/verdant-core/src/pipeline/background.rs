//! Background rendering policies.
//!
//! Non-vegetation pixels are either replaced with flat white or with a
//! blurred grayscale rendition of the original; vegetation pixels are left
//! byte-identical to the source under both policies.

use image::{Rgb, RgbImage};
use imageproc::filter::gaussian_blur_f32;

use crate::mask::VegetationMask;

/// Gaussian sigma of the pretty-background blur.
const BLUR_SIGMA: f32 = 5.0;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Replace non-vegetation pixels with pure white.
pub fn apply_white_background(image: &RgbImage, mask: &VegetationMask) -> RgbImage {
    let mut result = image.clone();
    for (x, y, pixel) in result.enumerate_pixels_mut() {
        if !mask.get(x, y) {
            *pixel = WHITE;
        }
    }
    result
}

/// Replace non-vegetation pixels with a blurred grayscale rendition.
///
/// The whole raster is converted to luminance grayscale and Gaussian
/// blurred once; non-vegetation pixels take the blurred gray broadcast
/// across all three channels.
pub fn apply_pretty_effect(image: &RgbImage, mask: &VegetationMask) -> RgbImage {
    let blurred = gaussian_blur_f32(&image::imageops::grayscale(image), BLUR_SIGMA);

    let mut result = image.clone();
    for (x, y, pixel) in result.enumerate_pixels_mut() {
        if !mask.get(x, y) {
            let gray = blurred.get_pixel(x, y)[0];
            *pixel = Rgb([gray, gray, gray]);
        }
    }
    result
}
