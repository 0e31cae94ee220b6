//! Closed set of easing identifiers.
//!
//! Declaration order is part of the public contract: ordinals index the
//! descriptor table and callers may persist them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingVariant {
    Linear,

    // Exponential
    EaseIn,
    EaseIn2,
    EaseIn3,

    EaseOut,
    EaseOut2,
    EaseOut3,

    EaseInOut,
    EaseInOut2,
    EaseInOut3,

    // Circular
    EaseInCircular,
    EaseOutCircular,
    EaseInOutCircular,

    // Bounce
    EaseInBounce,
    EaseInBounce2,
    EaseInBounce3,

    EaseOutBounce,
    EaseOutBounce2,
    EaseOutBounce3,

    EaseInOutBounce,
    EaseInOutBounce2,
    EaseInOutBounce3,
}

/// Coarse grouping used by tooling to organise the catalog.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingFamily {
    Linear,
    Exponential,
    Circular,
    Bounce,
}

impl EasingVariant {
    pub const COUNT: usize = 22;

    /// Every variant in declaration order.
    pub const ALL: [EasingVariant; Self::COUNT] = [
        EasingVariant::Linear,
        EasingVariant::EaseIn,
        EasingVariant::EaseIn2,
        EasingVariant::EaseIn3,
        EasingVariant::EaseOut,
        EasingVariant::EaseOut2,
        EasingVariant::EaseOut3,
        EasingVariant::EaseInOut,
        EasingVariant::EaseInOut2,
        EasingVariant::EaseInOut3,
        EasingVariant::EaseInCircular,
        EasingVariant::EaseOutCircular,
        EasingVariant::EaseInOutCircular,
        EasingVariant::EaseInBounce,
        EasingVariant::EaseInBounce2,
        EasingVariant::EaseInBounce3,
        EasingVariant::EaseOutBounce,
        EasingVariant::EaseOutBounce2,
        EasingVariant::EaseOutBounce3,
        EasingVariant::EaseInOutBounce,
        EasingVariant::EaseInOutBounce2,
        EasingVariant::EaseInOutBounce3,
    ];

    /// Zero-based position in declaration order.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Inverse of [`EasingVariant::ordinal`].
    pub fn from_ordinal(index: usize) -> Result<Self, EasingError> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            log::debug!("easing ordinal {index} is out of range");
            EasingError::UnknownVariant {
                identifier: index.to_string(),
            }
        })
    }

    /// Stable machine key, identical to the serde representation.
    pub const fn identifier(self) -> &'static str {
        use EasingVariant::*;
        match self {
            Linear => "linear",
            EaseIn => "easeIn",
            EaseIn2 => "easeIn2",
            EaseIn3 => "easeIn3",
            EaseOut => "easeOut",
            EaseOut2 => "easeOut2",
            EaseOut3 => "easeOut3",
            EaseInOut => "easeInOut",
            EaseInOut2 => "easeInOut2",
            EaseInOut3 => "easeInOut3",
            EaseInCircular => "easeInCircular",
            EaseOutCircular => "easeOutCircular",
            EaseInOutCircular => "easeInOutCircular",
            EaseInBounce => "easeInBounce",
            EaseInBounce2 => "easeInBounce2",
            EaseInBounce3 => "easeInBounce3",
            EaseOutBounce => "easeOutBounce",
            EaseOutBounce2 => "easeOutBounce2",
            EaseOutBounce3 => "easeOutBounce3",
            EaseInOutBounce => "easeInOutBounce",
            EaseInOutBounce2 => "easeInOutBounce2",
            EaseInOutBounce3 => "easeInOutBounce3",
        }
    }

    pub const fn family(self) -> EasingFamily {
        use EasingVariant::*;
        match self {
            Linear => EasingFamily::Linear,
            EaseIn | EaseIn2 | EaseIn3 | EaseOut | EaseOut2 | EaseOut3 | EaseInOut
            | EaseInOut2 | EaseInOut3 => EasingFamily::Exponential,
            EaseInCircular | EaseOutCircular | EaseInOutCircular => EasingFamily::Circular,
            EaseInBounce | EaseInBounce2 | EaseInBounce3 | EaseOutBounce | EaseOutBounce2
            | EaseOutBounce3 | EaseInOutBounce | EaseInOutBounce2 | EaseInOutBounce3 => {
                EasingFamily::Bounce
            }
        }
    }

    /// True for the curves that switch formula at x = 0.5.
    pub const fn is_piecewise(self) -> bool {
        use EasingVariant::*;
        matches!(
            self,
            EaseInOut
                | EaseInOut2
                | EaseInOut3
                | EaseInOutCircular
                | EaseInOutBounce
                | EaseInOutBounce2
                | EaseInOutBounce3
        )
    }
}

impl fmt::Display for EasingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Accepts `EaseInOut2`, `easeInOut2`, `ease_in_out_2`, `ease-in-out-2` and
/// `Ease In Out 2`. See [`crate::catalog::resolve_name`].
impl FromStr for EasingVariant {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::catalog::resolve_name(s).map(|d| d.variant)
    }
}

impl TryFrom<usize> for EasingVariant {
    type Error = EasingError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_ordinal(index)
    }
}
