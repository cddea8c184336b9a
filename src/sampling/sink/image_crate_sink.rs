use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::debug;
use crate::sampling::common::error::{Result, SamplerError};
use crate::sampling::sink::writer::ImageSink;

/// Writes samples with the `image` crate, picking the format from the path's extension.
pub struct ImageCrateSink;

impl ImageSink for ImageCrateSink {
    fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        debug!("Encoding {}x{} sample to {}", image.width(), image.height(), path.display());

        let format = ImageFormat::from_path(path).map_err(SamplerError::Encode)?;

        // JPEG has no alpha channel
        if format == ImageFormat::Jpeg && image.color().has_alpha() {
            return image
                .to_rgb8()
                .save_with_format(path, format)
                .map_err(SamplerError::Encode);
        }

        image.save_with_format(path, format).map_err(SamplerError::Encode)
    }
}
