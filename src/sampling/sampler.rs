use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, info, instrument, warn};

use crate::sampling::{
    common::error::{Result, SamplerError},
    config::SamplerConfig,
    geometry::{Rectangle, SampleSet},
    placement::{PositionSource, RandomPositions, place_regions},
    sink::{ImageCrateSink, ImageSink},
    source::{ImageCrateSource, ImageSource},
};

/// One extracted region together with the rectangle it was cut from.
#[derive(Debug, Clone)]
pub struct Sample {
    pub region: Rectangle,
    pub image: DynamicImage,
}

/// Samples non-overlapping fixed-size regions from a single image.
///
/// The source image is decoded once at construction and never mutated. A
/// sampler is meant for a single owner; share it across threads only behind
/// external synchronisation.
pub struct RegionSampler<W: ImageSink> {
    image: DynamicImage,
    sink: W,
    config: SamplerConfig,
}

impl RegionSampler<ImageCrateSink> {
    /// Loads the image at `path` with the default decoder and encoder.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(&ImageCrateSource, ImageCrateSink, path, SamplerConfig::default())
    }
}

impl<W: ImageSink> RegionSampler<W> {
    /// Loads the image at `path` through `source`.
    ///
    /// Any decode failure is reported as [`SamplerError::InvalidArgument`].
    pub fn open_with<S: ImageSource, P: AsRef<Path>>(
        source: &S,
        sink: W,
        path: P,
        config: SamplerConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let image = source.load(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Image load failed");
            SamplerError::InvalidArgument(format!("Unable to load image from {}", path.display()))
        })?;

        info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Loaded source image"
        );
        Ok(Self::from_image(image, sink, config))
    }

    pub fn from_image(image: DynamicImage, sink: W, config: SamplerConfig) -> Self {
        Self {
            image,
            sink,
            config,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SamplerConfig) {
        self.config = config;
    }

    /// Checks that a `sample_width` x `sample_height` region is positive and
    /// no larger than the image.
    pub fn validate_sample_size(&self, sample_width: i64, sample_height: i64) -> Result<()> {
        self.sample_extent(sample_width, sample_height).map(|_| ())
    }

    fn sample_extent(&self, sample_width: i64, sample_height: i64) -> Result<(u32, u32)> {
        if sample_width <= 0 || sample_height <= 0 {
            return Err(SamplerError::InvalidArgument(format!(
                "Sample size must be positive, got {}x{}",
                sample_width, sample_height
            )));
        }
        if sample_width > i64::from(self.width()) || sample_height > i64::from(self.height()) {
            return Err(SamplerError::InvalidArgument(format!(
                "Sample size {}x{} exceeds image dimensions {}x{}",
                sample_width,
                sample_height,
                self.width(),
                self.height()
            )));
        }
        // Both values are now within 1..=u32::MAX
        Ok((sample_width as u32, sample_height as u32))
    }

    /// Places `count` non-overlapping regions without extracting any pixels.
    #[instrument(skip(self, positions))]
    pub fn sample_regions<P: PositionSource + ?Sized>(
        &self,
        sample_width: i64,
        sample_height: i64,
        count: usize,
        positions: &mut P,
    ) -> Result<SampleSet> {
        let (sample_width, sample_height) = self.sample_extent(sample_width, sample_height)?;
        place_regions(
            self.width(),
            self.height(),
            sample_width,
            sample_height,
            count,
            self.config.max_attempts,
            positions,
        )
    }

    /// Extracts `count` random non-overlapping samples using OS-seeded randomness.
    pub fn generate_samples(
        &self,
        sample_width: i64,
        sample_height: i64,
        count: usize,
    ) -> Result<Vec<Sample>> {
        let mut positions = RandomPositions::from_entropy();
        self.generate_samples_with(sample_width, sample_height, count, &mut positions)
    }

    /// Extracts `count` non-overlapping samples placed with `positions`.
    ///
    /// Either all `count` samples are returned, in placement order, or an
    /// error is returned and nothing is extracted.
    pub fn generate_samples_with<P: PositionSource + ?Sized>(
        &self,
        sample_width: i64,
        sample_height: i64,
        count: usize,
        positions: &mut P,
    ) -> Result<Vec<Sample>> {
        let regions = self.sample_regions(sample_width, sample_height, count, positions)?;

        let samples = {
            let _span = tracing::info_span!("extract_samples", count = regions.len()).entered();
            self.extract(&regions)
        };

        info!(
            count = samples.len(),
            sample_width,
            sample_height,
            "Generated samples"
        );
        Ok(samples)
    }

    /// Copies the pixels under each rectangle, preserving order.
    pub fn extract(&self, regions: &SampleSet) -> Vec<Sample> {
        regions
            .iter()
            .map(|region| Sample {
                region: *region,
                image: self
                    .image
                    .crop_imm(region.left, region.top, region.width(), region.height()),
            })
            .collect()
    }

    /// Default destinations for `count` samples: `{stem}_{index}.{extension}`,
    /// inside the configured output directory when there is one.
    pub fn default_output_paths(&self, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let name = format!(
                    "{}_{}.{}",
                    self.config.default_stem, i, self.config.default_extension
                );
                match &self.config.output_dir {
                    Some(dir) => dir.join(name),
                    None => PathBuf::from(name),
                }
            })
            .collect()
    }

    /// Writes each sample to its path, in order, and returns the paths written.
    ///
    /// Without `output_paths`, [`Self::default_output_paths`] is used. A path
    /// list whose length differs from `samples` is rejected before anything is
    /// written. Encoder errors are returned as-is and files already written are
    /// left in place.
    #[instrument(skip(self, samples, output_paths), fields(count = samples.len()))]
    pub fn persist_samples<P: AsRef<Path>>(
        &self,
        samples: &[Sample],
        output_paths: Option<&[P]>,
    ) -> Result<Vec<PathBuf>> {
        let paths: Vec<PathBuf> = match output_paths {
            Some(paths) => {
                if paths.len() != samples.len() {
                    return Err(SamplerError::InvalidArgument(format!(
                        "Number of samples ({}) and output paths ({}) must be equal",
                        samples.len(),
                        paths.len()
                    )));
                }
                paths.iter().map(|p| p.as_ref().to_path_buf()).collect()
            }
            None => {
                if let Some(dir) = &self.config.output_dir {
                    std::fs::create_dir_all(dir)?;
                }
                self.default_output_paths(samples.len())
            }
        };

        for (sample, path) in samples.iter().zip(&paths) {
            self.sink.save(&sample.image, path)?;
            debug!(path = %path.display(), "Wrote sample");
        }

        info!(count = paths.len(), "Persisted samples");
        Ok(paths)
    }

    /// [`Self::persist_samples`] with the default output paths.
    pub fn persist_samples_default(&self, samples: &[Sample]) -> Result<Vec<PathBuf>> {
        self.persist_samples::<PathBuf>(samples, None)
    }
}
