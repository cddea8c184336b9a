//! Common utilities module
//!
//! This module contains shared utilities used across the region sampler.

pub mod error;

pub use error::{Result, SamplerError};
