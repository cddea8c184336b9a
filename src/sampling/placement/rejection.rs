use tracing::{debug, warn};

use crate::sampling::common::error::{Result, SamplerError};
use crate::sampling::geometry::{Rectangle, SampleSet};
use crate::sampling::placement::positions::PositionSource;

/// Default number of candidate placements tried before giving up.
pub const MAX_ATTEMPTS: usize = 1000;

/// Places `count` non-overlapping `sample_width` x `sample_height` regions
/// inside an `image_width` x `image_height` image.
///
/// Each attempt draws `left` from `0..=image_width - sample_width` and `top`
/// from `0..=image_height - sample_height`, horizontal coordinate first. The
/// candidate is accepted iff it overlaps no previously accepted region.
/// Accepted regions are returned in acceptance order.
///
/// A zero-sized sample, or one larger than the image, is rejected with
/// [`SamplerError::InvalidArgument`] before any draw. When `max_attempts` runs out before `count` regions are placed, all work is
/// discarded and [`SamplerError::InsufficientSamples`] is returned.
pub fn place_regions<P: PositionSource + ?Sized>(
    image_width: u32,
    image_height: u32,
    sample_width: u32,
    sample_height: u32,
    count: usize,
    max_attempts: usize,
    positions: &mut P,
) -> Result<SampleSet> {
    if sample_width == 0 || sample_height == 0 {
        return Err(SamplerError::InvalidArgument(format!(
            "Sample size must be positive, got {}x{}",
            sample_width, sample_height
        )));
    }
    let (Some(max_left), Some(max_top)) = (
        image_width.checked_sub(sample_width),
        image_height.checked_sub(sample_height),
    ) else {
        return Err(SamplerError::InvalidArgument(format!(
            "Sample size {}x{} exceeds image dimensions {}x{}",
            sample_width, sample_height, image_width, image_height
        )));
    };

    let mut accepted = SampleSet::with_capacity(count);
    let mut attempts = 0;

    while accepted.len() < count && attempts < max_attempts {
        attempts += 1;
        let left = positions.draw(max_left);
        let top = positions.draw(max_top);
        // left <= max_left and top <= max_top, so neither edge can overflow
        let candidate = Rectangle::new(left, top, left + sample_width, top + sample_height);

        if accepted.try_insert(candidate) {
            debug!(left, top, attempt = attempts, "Accepted region");
        }
    }

    if accepted.len() < count {
        warn!(
            requested = count,
            placed = accepted.len(),
            attempts,
            "Attempt cap exhausted before all regions were placed"
        );
        return Err(SamplerError::InsufficientSamples {
            requested: count,
            placed: accepted.len(),
            attempts,
        });
    }

    debug!(placed = accepted.len(), attempts, "Placement complete");
    Ok(accepted)
}
