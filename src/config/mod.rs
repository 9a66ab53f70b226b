//! Feed configuration.
//!
//! Tunables that are configuration rather than layout contract: the
//! default body line cap and the simulated fetch latency interval. The
//! page size and all geometry constants are deliberately not here - they
//! are fixed contracts owned by the provider and layout engine.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::provider::Latency;

/// Error loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document failed to parse.
    #[error("invalid feed configuration: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Feed-level configuration with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Default maximum visible body lines per review; 0 disables
    /// truncation feed-wide.
    pub max_lines: usize,
    /// Lower bound of the simulated fetch latency, in milliseconds.
    pub latency_min_ms: u64,
    /// Upper bound of the simulated fetch latency, in milliseconds.
    pub latency_max_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_lines: 3,
            latency_min_ms: 100,
            latency_max_ms: 1000,
        }
    }
}

impl FeedConfig {
    /// Parse a configuration from a TOML document.
    ///
    /// Missing fields take their defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// The latency setting for the content provider.
    ///
    /// Both bounds zero means no artificial delay.
    pub fn latency(&self) -> Latency {
        if self.latency_min_ms == 0 && self.latency_max_ms == 0 {
            Latency::None
        } else {
            Latency::Uniform {
                min: Duration::from_millis(self.latency_min_ms),
                max: Duration::from_millis(self.latency_max_ms.max(self.latency_min_ms)),
            }
        }
    }
}
