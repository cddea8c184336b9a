//! Image encoding module
//!
//! This module provides the encode collaborator samples are persisted through.

mod writer;
mod image_crate_sink;

pub use writer::ImageSink;
pub use image_crate_sink::ImageCrateSink;
