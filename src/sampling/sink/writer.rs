use std::path::Path;

use image::DynamicImage;
use crate::sampling::common::error::Result;

pub trait ImageSink {
    fn save(&self, image: &DynamicImage, path: &Path) -> Result<()>;
}
