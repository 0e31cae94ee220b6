//! Easing Core (engine-agnostic)
//!
//! A closed catalog of normalized easing curves. Each [`EasingVariant`]
//! resolves to a static [`EasingDescriptor`] carrying display metadata and a
//! pure `f32 -> f32` evaluator. Nothing here schedules, clocks or renders;
//! consumers feed progress values in and read eased values out.
//!
//! ```
//! use easing_core::{evaluate, resolve, EasingVariant};
//!
//! assert_eq!(evaluate(0.5, EasingVariant::EaseIn), 0.25);
//! let d = resolve(EasingVariant::EaseOut);
//! assert_eq!(d.name, "Ease Out");
//! assert_eq!(d.evaluate(0.5), 0.75);
//! ```

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod functions;
pub mod sampling;
pub mod variant;

// Re-exports for consumers (adapters)
pub use catalog::{
    catalog, catalog_json, descriptors, evaluate, evaluate_named, resolve, resolve_name,
    resolve_ordinal, Catalog, Ease, CATALOG_VERSION,
};
pub use config::{SampleConfig, MAX_SAMPLES};
pub use descriptor::{EasingDescriptor, EasingFn};
pub use error::EasingError;
pub use sampling::{sample, CurveSample};
pub use variant::{EasingFamily, EasingVariant};

/// Easing result type
pub type Result<T> = core::result::Result<T, EasingError>;
