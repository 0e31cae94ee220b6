//! Error types for easing lookups.
//!
//! Evaluation itself never fails; only resolving an open identifier (a name
//! or an ordinal) can.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// No descriptor is registered under this name or ordinal.
    #[error("Unknown easing variant: {identifier}")]
    UnknownVariant { identifier: String },
}

impl EasingError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownVariant { .. } => "lookup",
        }
    }
}
