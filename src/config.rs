//! Conversion policy and execution settings.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{TexconvError, TexconvResult};

/// Caller policy that steers format resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionPolicy {
    /// Premultiply color by alpha before upload.
    pub premultiply_alpha: bool,
    /// The GPU backend cannot bind 3-channel formats; widen them to 4 channels.
    pub avoid_three_component_formats: bool,
}

/// Threading and chunking controls for buffer conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionThreading {
    /// Split conversions into rayon chunks when `true`.
    pub parallel: bool,
    /// Texels per chunk in parallel mode.
    pub chunk_texels: usize,
    /// Optional explicit worker thread count. `None` uses the global pool.
    pub threads: Option<usize>,
}

impl Default for ConversionThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_texels: 16 * 1024,
            threads: None,
        }
    }
}

impl ConversionThreading {
    /// Chunk size clamped to at least one texel.
    pub fn normalized_chunk_texels(&self) -> usize {
        self.chunk_texels.max(1)
    }

    /// Dedicated pool when `threads` is set, `None` to use the global pool.
    pub fn build_pool(&self) -> TexconvResult<Option<rayon::ThreadPool>> {
        let Some(n) = self.threads else {
            return Ok(None);
        };
        if n == 0 {
            return Err(TexconvError::validation(
                "conversion threading 'threads' must be >= 1 when set",
            ));
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map(Some)
            .map_err(|e| {
                TexconvError::validation(format!("failed to build rayon thread pool: {e}"))
            })
    }
}

/// Top-level upload settings, typically loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Format resolution policy.
    pub policy: ConversionPolicy,
    /// Conversion execution settings.
    pub threading: ConversionThreading,
}

impl UploadConfig {
    /// Parse from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> TexconvResult<Self> {
        serde_json::from_str(s).map_err(|e| TexconvError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
