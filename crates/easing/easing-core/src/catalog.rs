//! The descriptor table and lookups over it.
//!
//! `DESCRIPTORS` is indexed by [`EasingVariant::ordinal`], so its order must
//! match the enum declaration. Name lookups go through an index built once on
//! first use.

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::descriptor::EasingDescriptor;
use crate::error::EasingError;
use crate::functions as f;
use crate::variant::EasingVariant;

pub const CATALOG_VERSION: &str = "1.0.0";

const SHRINK_OFFSET_SIMPLIFY: &str = "Shrink, offset, simplify In / Out";

static DESCRIPTORS: [EasingDescriptor; EasingVariant::COUNT] = {
    use EasingVariant::*;
    [
        EasingDescriptor::new(Linear, "Linear", "No easing", "y = x", f::linear),
        // Exponential
        EasingDescriptor::new(EaseIn, "Ease In", "Quadratic", "y = x^2", f::ease_in),
        EasingDescriptor::new(EaseIn2, "Ease In 2", "Cubic", "y = x^3", f::ease_in2),
        EasingDescriptor::new(EaseIn3, "Ease In 3", "Octic", "y = x^8", f::ease_in3),
        EasingDescriptor::new(
            EaseOut,
            "Ease Out",
            "Inverse quadratic",
            "y = 1-(1-x)^2",
            f::ease_out,
        ),
        EasingDescriptor::new(
            EaseOut2,
            "Ease Out 2",
            "Inverse cubic",
            "y = 1-(1-x)^3",
            f::ease_out2,
        ),
        EasingDescriptor::new(
            EaseOut3,
            "Ease Out 3",
            "Inverse octic",
            "y = 1-(1-x)^8",
            f::ease_out3,
        ),
        EasingDescriptor::new(
            EaseInOut,
            "Ease In Out",
            SHRINK_OFFSET_SIMPLIFY,
            "y = (x<0.5) ? (2x)^2/2 : 0.5+(1-(2(1-x))^2)/2",
            f::ease_in_out,
        )
        .simplified("y = (x<0.5) ? 2x^2 : -2x^2+4x-1"),
        EasingDescriptor::new(
            EaseInOut2,
            "Ease In Out 2",
            SHRINK_OFFSET_SIMPLIFY,
            "y = (x<0.5) ? (2x)^3/2 : 0.5+(1-(2(1-x))^3)/2",
            f::ease_in_out2,
        )
        .simplified("y = (x<0.5) ? 4x^3 : 4x^3-12x^2+12x-3"),
        EasingDescriptor::new(
            EaseInOut3,
            "Ease In Out 3",
            SHRINK_OFFSET_SIMPLIFY,
            "y = (x<0.5) ? (2x)^8/2 : 0.5+(1-(2(1-x))^8)/2",
            f::ease_in_out3,
        )
        .simplified("y = (x<0.5) ? 128x^8 : 0.5+(1-(2(1-x))^8)/2"),
        // Circular
        EasingDescriptor::new(
            EaseInCircular,
            "Ease In Circular",
            "Inverse square root, inverse power",
            "y = 1-sqrt(1-x^2)",
            f::ease_in_circular,
        ),
        EasingDescriptor::new(
            EaseOutCircular,
            "Ease Out Circular",
            "Square root, power, inverse",
            "y = sqrt(1-(1-x)^2)",
            f::ease_out_circular,
        )
        .simplified("y = sqrt(-(x-2)x)"),
        EasingDescriptor::new(
            EaseInOutCircular,
            "Ease In Out Circular",
            SHRINK_OFFSET_SIMPLIFY,
            "y = (x<0.5) ? (1-sqrt(1-(2x)^2))/2 : 0.5+sqrt(1-((2(1-x))^2))/2",
            f::ease_in_out_circular,
        )
        .simplified("y = (x<0.5) ? 0.5(1-sqrt(1-4x^2)) : 0.5(sqrt(-4(x-2)x-3)+1)"),
        // Bounce
        EasingDescriptor::new(
            EaseInBounce,
            "Ease In Bounce",
            "Offset power composition",
            "y = 2x^3-x^2",
            f::ease_in_bounce,
        )
        .simplified("y = x^2(2x-1)"),
        EasingDescriptor::new(
            EaseInBounce2,
            "Ease In Bounce 2",
            "Offset power composition",
            "y = 3x^3-2x^2",
            f::ease_in_bounce2,
        )
        .simplified("y = x^2(3x-2)"),
        EasingDescriptor::new(
            EaseInBounce3,
            "Ease In Bounce 3",
            "Offset power composition",
            "y = 4x^3-3x^2",
            f::ease_in_bounce3,
        )
        .simplified("y = x^2(4x-3)"),
        EasingDescriptor::new(
            EaseOutBounce,
            "Ease Out Bounce",
            "Inverse offset power composition",
            "y = 1-(2(1-x)^3-(1-x)^2)",
            f::ease_out_bounce,
        )
        .simplified("y = x(x(2x-5)+4)"),
        EasingDescriptor::new(
            EaseOutBounce2,
            "Ease Out Bounce 2",
            "Inverse offfset power composition",
            "y = 1-(3(1-x)^3-2(1-x)^2)",
            f::ease_out_bounce2,
        )
        .simplified("y = x(x(3x-7)+5)"),
        EasingDescriptor::new(
            EaseOutBounce3,
            "Ease Out Bounce 3",
            "Inverse offset power composition",
            "y = 1-(4(1-x)^3-3(1-x)^2)",
            f::ease_out_bounce3,
        )
        .simplified("y = x(x(4x-9)+6)"),
        EasingDescriptor::new(
            EaseInOutBounce,
            "Ease In Out Bounce",
            SHRINK_OFFSET_SIMPLIFY,
            "y = (x<0.5) ? (2(2x)^3-(2x)^2)*0.5 : 1-(2(2(1-x))^3-(2(1-x))^2)*0.5",
            f::ease_in_out_bounce,
        )
        .simplified("y = (x<0.5) ? 8x^3-2x^2 : 8x^3-22x^2+20x-5"),
        EasingDescriptor::new(
            EaseInOutBounce2,
            "Ease In Out Bounce 2",
            SHRINK_OFFSET_SIMPLIFY,
            "y = (x<0.5) ? (3(2x)^3- (2x)^2)*0.5 : 1-(3(2(1-x))^3-2(2(1-x))^2)*0.5",
            f::ease_in_out_bounce2,
        )
        .simplified("y = (x<0.5) ? 12x^3-4x^2 : 12x^3-32x^2+28x-7"),
        EasingDescriptor::new(
            EaseInOutBounce3,
            "Ease In Out Bounce 3",
            "Shrink, offset In / Out",
            "y = ((x<0.5) ? (4(2x)^3-3(2x)^2)*0.5 : 1-(4(2(1-x))^3-3(2(1-x))^2)*0.5",
            f::ease_in_out_bounce3,
        )
        .simplified("y = (x<0.5) ? 16x^3-6x^2 : 16x^3-42x^2+36x-9"),
    ]
};

/// Normalized name -> variant. Keys are lowercase ASCII with separators
/// stripped, so `Ease In Out 2`, `ease_in_out_2` and `easeInOut2` collide.
static NAME_INDEX: Lazy<HashMap<String, EasingVariant>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(EasingVariant::COUNT * 2);
    for d in &DESCRIPTORS {
        index.insert(normalize_name(d.variant.identifier()), d.variant);
        index.insert(normalize_name(d.name), d.variant);
    }
    log::debug!("easing name index built with {} keys", index.len());
    index
});

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Descriptor for `variant`. Constant time; always succeeds.
#[inline]
pub fn resolve(variant: EasingVariant) -> &'static EasingDescriptor {
    &DESCRIPTORS[variant.ordinal()]
}

/// Descriptor for a variant given by name, in any of the accepted spellings.
pub fn resolve_name(name: &str) -> Result<&'static EasingDescriptor, EasingError> {
    match NAME_INDEX.get(normalize_name(name).as_str()) {
        Some(variant) => Ok(resolve(*variant)),
        None => {
            log::debug!("no easing registered under {name:?}");
            Err(EasingError::UnknownVariant {
                identifier: name.to_string(),
            })
        }
    }
}

/// Descriptor for the variant at `index` in declaration order.
pub fn resolve_ordinal(index: usize) -> Result<&'static EasingDescriptor, EasingError> {
    EasingVariant::from_ordinal(index).map(resolve)
}

/// Shorthand for `resolve(variant).evaluate(x)`.
#[inline]
pub fn evaluate(x: f32, variant: EasingVariant) -> f32 {
    resolve(variant).evaluate(x)
}

pub fn evaluate_named(x: f32, name: &str) -> Result<f32, EasingError> {
    resolve_name(name).map(|d| d.evaluate(x))
}

/// All descriptors in declaration order.
pub fn descriptors() -> impl ExactSizeIterator<Item = &'static EasingDescriptor> {
    DESCRIPTORS.iter()
}

/// Serializable snapshot of the whole catalog, for tooling.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub version: &'static str,
    pub easings: Vec<&'static EasingDescriptor>,
}

pub fn catalog() -> Catalog {
    Catalog {
        version: CATALOG_VERSION,
        easings: descriptors().collect(),
    }
}

pub fn catalog_json() -> serde_json::Result<String> {
    serde_json::to_string(&catalog())
}

/// Method form of [`evaluate`] on the progress value itself.
pub trait Ease {
    fn ease(self, variant: EasingVariant) -> Self;
    fn ease_with(self, descriptor: &EasingDescriptor) -> Self;
}

impl Ease for f32 {
    #[inline]
    fn ease(self, variant: EasingVariant) -> f32 {
        evaluate(self, variant)
    }

    #[inline]
    fn ease_with(self, descriptor: &EasingDescriptor) -> f32 {
        descriptor.evaluate(self)
    }
}
