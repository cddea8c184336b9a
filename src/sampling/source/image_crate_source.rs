//! Image decoder backed by the `image` crate.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;
use crate::sampling::common::error::{Result, SamplerError};
use crate::sampling::source::reader::ImageSource;

/// Decodes any raster format the `image` crate recognises (PNG, JPEG, BMP, TIFF, ...).
///
/// The format is guessed from the file contents first, so a mislabelled
/// extension still decodes as long as the bytes are a supported image.
pub struct ImageCrateSource;

impl ImageSource for ImageCrateSource {
    fn load(&self, path: &Path) -> Result<DynamicImage> {
        debug!("Decoding image from {}", path.display());

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(SamplerError::Decode)?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }
}
