//! Color space conversions and channel equalization
//!
//! Bridges between 8-bit RGB rasters and the byte-scaled HSV representation
//! the green-band thresholds are expressed in, plus the histogram
//! equalization steps the classifier composes.

mod conversions;


pub use conversions::{
    equalize_lightness, equalize_value_channel, rgb_to_hsv, rgb_to_hsv_raster, Hsv,
};
