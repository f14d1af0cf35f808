//! Configuration for the alignment engine.
//!
//! `AlignConfig` carries the three knobs that drive candidate filtering and
//! recursion: the common-prefix length, the spelling-similarity threshold, and
//! the recursion bound.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// Candidate pairs must agree on this many leading characters (0 disables the check).
    #[serde(alias = "mincpl")]
    pub min_common_prefix: usize,
    /// Spelling similarity threshold; `1.0` accepts identical tokens only.
    #[serde(alias = "minsim")]
    pub min_similarity: f64,
    /// Deepest recursion level allowed to look for anchors. Negative values
    /// stop the run before the first level.
    #[serde(alias = "maxrec")]
    pub max_recursion: i64,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            min_common_prefix: 0,
            min_similarity: 1.0,
            max_recursion: 10,
        }
    }
}

impl AlignConfig {
    pub fn exact() -> Self {
        Self::default()
    }

    /// Cognate-friendly settings: three shared leading characters and 60% similarity.
    pub fn cognates() -> Self {
        Self {
            min_common_prefix: 3,
            min_similarity: 0.6,
            ..Default::default()
        }
    }

    pub fn builder() -> AlignConfigBuilder {
        AlignConfigBuilder {
            inner: AlignConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_similarity.is_finite()
            || self.min_similarity < 0.0
            || self.min_similarity > 1.0
        {
            return Err(ConfigError::InvalidMinSimilarity {
                value: self.min_similarity,
            });
        }
        Ok(())
    }

    pub fn is_exact(&self) -> bool {
        self.min_similarity == 1.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("[UNL_CFG_001] min_similarity must be in [0.0, 1.0] and finite (got {value})")]
    InvalidMinSimilarity { value: f64 },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidMinSimilarity { .. } => "UNL_CFG_001",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlignConfigBuilder {
    inner: AlignConfig,
}

impl Default for AlignConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlignConfigBuilder {
    pub fn new() -> Self {
        AlignConfig::builder()
    }

    pub fn min_common_prefix(mut self, value: usize) -> Self {
        self.inner.min_common_prefix = value;
        self
    }

    pub fn min_similarity(mut self, value: f64) -> Self {
        self.inner.min_similarity = value;
        self
    }

    pub fn max_recursion(mut self, value: i64) -> Self {
        self.inner.max_recursion = value;
        self
    }

    pub fn build(self) -> Result<AlignConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
