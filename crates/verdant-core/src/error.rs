//! Error types for the processing pipeline.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by classification, compositing, and the image plumbing.
///
/// Configuration and dimension errors are raised before any pixel work;
/// no operation ever returns a partially written raster or a default mask
/// in place of an error.
#[derive(Debug, Error)]
pub enum Error {
    /// An unrecognized hole-filling method name was supplied.
    #[error("unknown fill holes method {0:?}, expected \"morphology\" or \"contour\"")]
    InvalidFillHolesMethod(String),

    /// Mask dimensions differ from the raster they are applied to.
    #[error(
        "mask dimensions {mask_width}x{mask_height} do not match image dimensions {image_width}x{image_height}"
    )]
    MaskDimensionMismatch {
        image_width: u32,
        image_height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    /// Filesystem error while reading or writing an image.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Decode or encode failure from the underlying image codec.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
