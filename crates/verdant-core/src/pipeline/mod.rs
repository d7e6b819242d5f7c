//! Mask compositing pipeline
//!
//! Consumes an RGB raster and its vegetation mask, optionally repairs small
//! gaps in the mask, then renders the final raster with one of two
//! background policies. Hole filling always runs before background
//! rendering, so a filled hole is treated as vegetation by the policy.

mod background;
mod fill_holes;


pub use background::{apply_pretty_effect, apply_white_background};
pub use fill_holes::{close_mask, fill_small_holes, DEFAULT_MAX_HOLE_AREA};

use std::borrow::Cow;

use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::mask::VegetationMask;
use crate::models::{FillHolesMethod, ProcessOptions};

/// Render the final raster from an image and its vegetation mask.
///
/// Verifies the mask dimensions before any pixel work, fills mask holes when
/// requested, and applies the selected background policy to non-vegetation
/// pixels. The output always has the input's dimensions; inputs are never
/// mutated.
pub fn process_image(
    image: &RgbImage,
    mask: &VegetationMask,
    options: &ProcessOptions,
) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    if mask.dimensions() != (width, height) {
        return Err(Error::MaskDimensionMismatch {
            image_width: width,
            image_height: height,
            mask_width: mask.width(),
            mask_height: mask.height(),
        });
    }

    let mask: Cow<VegetationMask> = if options.fill_holes {
        let filled = match options.fill_holes_method {
            FillHolesMethod::Morphology => close_mask(mask),
            FillHolesMethod::Contour => fill_small_holes(mask, options.max_hole_area),
        };
        debug!(
            method = options.fill_holes_method.as_str(),
            added = filled.count() - mask.count(),
            "filled mask holes"
        );
        Cow::Owned(filled)
    } else {
        Cow::Borrowed(mask)
    };

    let result = if options.pretty_result {
        apply_pretty_effect(image, &mask)
    } else {
        apply_white_background(image, &mask)
    };
    Ok(result)
}
