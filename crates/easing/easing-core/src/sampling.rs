//! Evenly spaced sampling of a curve, for previews and reference tables.

use serde::{Deserialize, Serialize};

use crate::catalog::resolve;
use crate::config::{SampleConfig, MAX_SAMPLES};
use crate::descriptor::EasingFn;
use crate::variant::EasingVariant;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub x: f32,
    pub y: f32,
}

/// Sample `variant` at `config.samples` points from `config.start` to
/// `config.end` inclusive. Counts above [`MAX_SAMPLES`] are clamped.
pub fn sample(variant: EasingVariant, config: &SampleConfig) -> Vec<CurveSample> {
    resolve(variant).sample(config)
}

pub(crate) fn sample_fn(f: EasingFn, config: &SampleConfig) -> Vec<CurveSample> {
    let SampleConfig {
        samples,
        start,
        end,
    } = *config;
    if samples > MAX_SAMPLES {
        log::warn!("clamping easing sample count {samples} to {MAX_SAMPLES}");
    }
    match samples.min(MAX_SAMPLES) {
        0 => Vec::new(),
        1 => vec![CurveSample { x: start, y: f(start) }],
        n => {
            let span = end - start;
            let last = (n - 1) as f32;
            (0..n)
                .map(|i| {
                    // pin the final input so rounding never misses `end`
                    let x = if i == n - 1 {
                        end
                    } else {
                        start + span * (i as f32 / last)
                    };
                    CurveSample { x, y: f(x) }
                })
                .collect()
        }
    }
}
