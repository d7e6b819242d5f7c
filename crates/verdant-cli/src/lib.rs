//! Shared utilities for verdant-cli
//!
//! Reusable helpers for input expansion and output path handling, kept out
//! of `main.rs` so they can be tested and reused.

pub mod processing;

pub use processing::{determine_output_path, expand_inputs, SUPPORTED_EXTENSIONS};
