//! Verdant Core Library
//!
//! Core functionality for extracting vegetation from RGB images: color-based
//! segmentation and mask-driven compositing.

pub mod color;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod mask;
pub mod models;
pub mod pipeline;
pub mod segmentation;

// Re-export commonly used types
pub use error::{Error, Result};
pub use mask::VegetationMask;
pub use models::{FillHolesMethod, ProcessOptions, SegmentationOptions};
pub use pipeline::{fill_small_holes, process_image};
pub use segmentation::detect_vegetation;
