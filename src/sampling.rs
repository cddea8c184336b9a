//! Random non-overlapping region sampling
//!
//! This module places fixed-size rectangles at random positions inside a single
//! image, extracts the pixels under them and persists the results, with the
//! decoder, encoder and random source behind traits so each can be swapped.

pub mod common;
pub mod config;
pub mod geometry;
pub mod placement;
pub mod sink;
pub mod source;
mod sampler;


pub use common::{
    Result,
    SamplerError,
};

pub use config::{
    SamplerConfig,
    SamplerConfigBuilder,
};

pub use geometry::{
    Rectangle,
    SampleSet,
};

pub use placement::{
    MAX_ATTEMPTS,
    PositionSource,
    RandomPositions,
    place_regions,
};

pub use sink::{
    ImageCrateSink,
    ImageSink,
};

pub use source::{
    ImageCrateSource,
    ImageSource,
};

pub use sampler::{
    RegionSampler,
    Sample,
};
