use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unable to generate non-overlapping samples: placed {placed} of {requested} in {attempts} attempts")]
    InsufficientSamples {
        requested: usize,
        placed: usize,
        attempts: usize,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SamplerError>;
