//! HSV and LAB conversions over the `palette` primitives.
//!
//! The conversion formulas themselves live in `palette`; this module only
//! rescales between `palette`'s floating point ranges and the 8-bit
//! conventions the rest of the pipeline works in.

use image::{GrayImage, Luma, RgbImage};
use imageproc::contrast::equalize_histogram;
use palette::{Clamp, IntoColor, Lab, Srgb};
use rayon::prelude::*;

/// Byte-scaled HSV pixel.
///
/// Hue is stored in half-degrees (0..=179) so the full wheel fits a byte;
/// saturation and value use the full 0..=255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert one 8-bit RGB pixel to byte-scaled HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let srgb = Srgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    );
    let hsv: palette::Hsv = srgb.into_color();

    let half_degrees = hsv.hue.into_positive_degrees() / 2.0;
    Hsv {
        h: (half_degrees.round() as u16 % 180) as u8,
        s: (hsv.saturation * 255.0).round() as u8,
        v: (hsv.value * 255.0).round() as u8,
    }
}

/// Convert a whole raster to byte-scaled HSV, row-major.
pub fn rgb_to_hsv_raster(image: &RgbImage) -> Vec<Hsv> {
    image
        .as_raw()
        .par_chunks_exact(3)
        .map(|pixel| rgb_to_hsv(pixel[0], pixel[1], pixel[2]))
        .collect()
}

/// Equalize the histogram of the LAB lightness channel.
///
/// Each pixel is converted to CIE L*a*b*, the byte-scaled L channel is
/// equalized on its own, and the raster is rebuilt from the equalized
/// lightness and the untouched a/b chroma. Out-of-gamut results of the
/// return trip are clamped into sRGB.
pub fn equalize_lightness(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();

    let labs: Vec<Lab> = image
        .as_raw()
        .par_chunks_exact(3)
        .map(|pixel| {
            let srgb = Srgb::new(
                f32::from(pixel[0]) / 255.0,
                f32::from(pixel[1]) / 255.0,
                f32::from(pixel[2]) / 255.0,
            );
            srgb.into_color()
        })
        .collect();

    // L is 0-100 in palette; rescale to a byte channel for equalization.
    let lightness = GrayImage::from_fn(width, height, |x, y| {
        let l = labs[(y * width + x) as usize].l;
        Luma([(l * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8])
    });
    let equalized = equalize_histogram(&lightness);

    let mut result = RgbImage::new(width, height);
    result
        .par_chunks_exact_mut(3)
        .enumerate()
        .for_each(|(i, pixel)| {
            let l = f32::from(equalized.as_raw()[i]) * (100.0 / 255.0);
            let lab = Lab::new(l, labs[i].a, labs[i].b);
            let rgb: Srgb = lab.into_color();
            let rgb = rgb.clamp();
            pixel[0] = (rgb.red * 255.0).round() as u8;
            pixel[1] = (rgb.green * 255.0).round() as u8;
            pixel[2] = (rgb.blue * 255.0).round() as u8;
        });
    result
}

/// Equalize the histogram of the value channel in place.
///
/// Hue and saturation pass through unchanged.
pub fn equalize_value_channel(hsv: &mut [Hsv], width: u32, height: u32) {
    let value = GrayImage::from_fn(width, height, |x, y| {
        Luma([hsv[(y * width + x) as usize].v])
    });
    let equalized = equalize_histogram(&value);

    let flattened = equalized.as_raw();
    hsv.par_iter_mut()
        .enumerate()
        .for_each(|(i, pixel)| pixel.v = flattened[i]);
}
