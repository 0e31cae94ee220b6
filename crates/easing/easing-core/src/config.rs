//! Sampling configuration for curve previews.

use serde::{Deserialize, Serialize};

/// Upper bound on [`SampleConfig::samples`]; larger requests are clamped.
pub const MAX_SAMPLES: usize = 65_536;

/// How a curve is sampled for display.
/// Missing fields fall back to [`SampleConfig::default`] when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Number of points, including both endpoints. At most [`MAX_SAMPLES`].
    pub samples: usize,
    /// First input value.
    pub start: f32,
    /// Last input value.
    pub end: f32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            samples: 64,
            start: 0.0,
            end: 1.0,
        }
    }
}

impl SampleConfig {
    pub fn with_samples(samples: usize) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }
}
