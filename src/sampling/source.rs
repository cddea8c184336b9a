//! Image decoding module
//!
//! This module provides the decode collaborator the sampler loads its source image through.

mod reader;
mod image_crate_source;

pub use reader::ImageSource;
pub use image_crate_source::ImageCrateSource;
