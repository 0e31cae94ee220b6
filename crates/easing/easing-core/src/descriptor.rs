//! Display metadata and evaluator bundle for one easing variant.

use serde::Serialize;

use crate::config::SampleConfig;
use crate::sampling::{sample_fn, CurveSample};
use crate::variant::{EasingFamily, EasingVariant};

/// Pure evaluator signature shared by every catalog entry.
pub type EasingFn = fn(f32) -> f32;

/// One catalog entry. Instances live in a `static` table and are handed out
/// as `&'static` references; they are never built at runtime.
///
/// The strings are for display and tooling only. `formula` is kept exactly
/// as authored even where it disagrees with `evaluate` (see `EaseOut2`).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct EasingDescriptor {
    pub variant: EasingVariant,
    pub name: &'static str,
    pub description: &'static str,
    pub formula: &'static str,
    pub simplified_formula: &'static str,
    #[serde(skip)]
    pub evaluate: EasingFn,
}

impl EasingDescriptor {
    /// Entry whose formula has no separate reduced form.
    pub(crate) const fn new(
        variant: EasingVariant,
        name: &'static str,
        description: &'static str,
        formula: &'static str,
        evaluate: EasingFn,
    ) -> Self {
        Self {
            variant,
            name,
            description,
            formula,
            simplified_formula: formula,
            evaluate,
        }
    }

    pub(crate) const fn simplified(mut self, simplified_formula: &'static str) -> Self {
        self.simplified_formula = simplified_formula;
        self
    }

    #[inline]
    pub fn evaluate(&self, x: f32) -> f32 {
        (self.evaluate)(x)
    }

    #[inline]
    pub fn family(&self) -> EasingFamily {
        self.variant.family()
    }

    /// True when the catalog carries an algebraic reduction of `formula`.
    pub fn has_simplified_formula(&self) -> bool {
        self.simplified_formula != self.formula
    }

    /// Evenly spaced samples of this curve, see [`crate::sampling::sample`].
    pub fn sample(&self, config: &SampleConfig) -> Vec<CurveSample> {
        sample_fn(self.evaluate, config)
    }
}
