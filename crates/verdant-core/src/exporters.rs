//! Image encoding of processed rasters.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::Result;

/// Write a processed raster to disk as lossless PNG.
pub fn export_png<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    image.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}
