//! Data models for Verdant
//!
//! Option structs for segmentation and compositing, mirroring the parameters
//! an external configuration surface (CLI, GUI) exposes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Options controlling vegetation classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationOptions {
    /// Equalize the histogram of the HSV value channel before thresholding,
    /// flattening the brightness distribution the green band is tested in.
    #[serde(default = "default_true")]
    pub normalize_illumination: bool,

    /// Equalize LAB lightness before converting to HSV, so shadowed green
    /// regions are less likely to fall outside the hue band.
    #[serde(default = "default_true")]
    pub use_lab_color_space: bool,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            normalize_illumination: true,
            use_lab_color_space: true,
        }
    }
}

/// Options controlling mask compositing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Fill small holes in the vegetation mask before rendering.
    #[serde(default)]
    pub fill_holes: bool,

    /// Strategy used when `fill_holes` is set.
    #[serde(default)]
    pub fill_holes_method: FillHolesMethod,

    /// Render non-vegetation areas as blurred grayscale instead of flat white.
    #[serde(default)]
    pub pretty_result: bool,

    /// Largest hole area, in pixels, the contour method fills.
    #[serde(default = "default_max_hole_area")]
    pub max_hole_area: f64,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            fill_holes: false,
            fill_holes_method: FillHolesMethod::default(),
            pretty_result: false,
            max_hole_area: default_max_hole_area(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_hole_area() -> f64 {
    crate::pipeline::DEFAULT_MAX_HOLE_AREA
}

/// Hole-filling strategy for the vegetation mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FillHolesMethod {
    /// Morphological closing with a 5x5 elliptical kernel. Closes small gaps
    /// and thin breaks uniformly, at the cost of merging regions separated by
    /// narrow gaps.
    #[default]
    Morphology,

    /// Contour-based filling. Only fills holes bounded entirely within a
    /// vegetation region and below the area ceiling, leaving large holes and
    /// the exterior background untouched.
    Contour,
}

impl FillHolesMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillHolesMethod::Morphology => "morphology",
            FillHolesMethod::Contour => "contour",
        }
    }
}

impl fmt::Display for FillHolesMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillHolesMethod {
    type Err = Error;

    /// Parse a method name. Anything outside the known set is a configuration
    /// error, never a silent fallback.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "morphology" => Ok(FillHolesMethod::Morphology),
            "contour" => Ok(FillHolesMethod::Contour),
            other => Err(Error::InvalidFillHolesMethod(other.to_string())),
        }
    }
}
