//! Image decoding to in-memory RGB rasters.

use std::path::Path;

use image::RgbImage;

use crate::error::Result;

/// Decode an image file into an 8-bit RGB raster.
///
/// Accepts any container format the `image` crate reads; alpha channels and
/// higher bit depths are folded into 8-bit RGB by the conversion.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    Ok(image::open(path.as_ref())?.to_rgb8())
}
