pub mod logger;
pub mod sampling;
