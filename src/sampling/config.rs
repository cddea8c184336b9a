//! Region sampler configuration types

use std::path::PathBuf;

use crate::sampling::placement::MAX_ATTEMPTS;

/// Configuration for sampling and persisting regions
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Candidate placements tried before sampling fails
    pub max_attempts: usize,
    /// File stem of default output paths (`{stem}_{index}.{extension}`)
    pub default_stem: String,
    /// Extension of default output paths; selects the encoded format
    pub default_extension: String,
    /// Directory default output paths are placed in, current directory when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            default_stem: "sample".to_string(),
            default_extension: "jpg".to_string(),
            output_dir: None,
        }
    }
}

impl SamplerConfig {
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }
}

/// Builder for SamplerConfig
#[derive(Default)]
pub struct SamplerConfigBuilder {
    max_attempts: Option<usize>,
    default_stem: Option<String>,
    default_extension: Option<String>,
    output_dir: Option<Option<PathBuf>>,
}

impl SamplerConfigBuilder {
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn default_stem(mut self, stem: impl Into<String>) -> Self {
        self.default_stem = Some(stem.into());
        self
    }

    pub fn default_extension(mut self, extension: impl Into<String>) -> Self {
        self.default_extension = Some(extension.into());
        self
    }

    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn build(self) -> SamplerConfig {
        let default = SamplerConfig::default();
        SamplerConfig {
            max_attempts: self.max_attempts.unwrap_or(default.max_attempts),
            default_stem: self.default_stem.unwrap_or(default.default_stem),
            default_extension: self.default_extension.unwrap_or(default.default_extension),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
        }
    }
}
