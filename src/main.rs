use region_sampler::logger;
use region_sampler::sampling::RegionSampler;

use tracing::{error, info};

const SAMPLE_WIDTH: i64 = 100;
const SAMPLE_HEIGHT: i64 = 100;
const SAMPLE_COUNT: usize = 3;

fn main() -> anyhow::Result<()> {
    logger::init();

    let input = std::env::args().nth(1).unwrap_or_else(|| "input.jpg".to_string());
    info!("Sampling regions from {}", input);

    let sampler = RegionSampler::open(&input)?;
    info!("Image size: {}x{}", sampler.width(), sampler.height());

    let samples = match sampler.generate_samples(SAMPLE_WIDTH, SAMPLE_HEIGHT, SAMPLE_COUNT) {
        Ok(samples) => samples,
        Err(e) => {
            error!("Sampling failed: {}", e);
            return Err(e.into());
        }
    };

    for sample in &samples {
        info!("Region: {:?}", sample.region);
    }

    let paths = sampler.persist_samples_default(&samples)?;
    for path in &paths {
        info!("Sample saved to {}", path.display());
    }

    Ok(())
}
