use std::path::Path;

use image::DynamicImage;
use crate::sampling::common::error::Result;

pub trait ImageSource {
    fn load(&self, path: &Path) -> Result<DynamicImage>;
}
