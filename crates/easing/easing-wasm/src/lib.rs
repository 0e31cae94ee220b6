//! wasm-bindgen surface over `easing-core`.
//!
//! Curves are addressed by name from JS, so every entry point goes through
//! the open-identifier lookup and can fail with `UnknownVariant`.

use easing_core::{
    catalog_json, resolve, resolve_name, CurveSample, EasingDescriptor, EasingError,
    EasingVariant, SampleConfig,
};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn lookup(name: &str) -> Result<&'static EasingDescriptor, JsError> {
    resolve_name(name).map_err(|e| {
        log::warn!("easing lookup failed ({}): {e}", e.category());
        JsError::new(&e.to_string())
    })
}

fn identifiers() -> Vec<&'static str> {
    EasingVariant::ALL.iter().map(|v| v.identifier()).collect()
}

fn sample_named(name: &str, cfg: &SampleConfig) -> Result<Vec<CurveSample>, EasingError> {
    resolve_name(name).map(|d| d.sample(cfg))
}

/// Bumped whenever exported signatures change.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

/// Evaluate the curve registered under `name` at `x`.
#[wasm_bindgen]
pub fn evaluate_easing(name: &str, x: f32) -> Result<f32, JsError> {
    Ok(lookup(name)?.evaluate(x))
}

/// Sample a curve for preview. `config` is a `SampleConfig`-shaped object or
/// undefined/null for defaults. Returns `[{ x, y }, ...]`.
#[wasm_bindgen]
pub fn sample_easing(name: &str, config: JsValue) -> Result<JsValue, JsError> {
    let cfg: SampleConfig = if jsvalue_is_undefined_or_null(&config) {
        SampleConfig::default()
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    let points = sample_named(name, &cfg).map_err(|e| JsError::new(&e.to_string()))?;
    swb::to_value(&points).map_err(|e| JsError::new(&e.to_string()))
}

/// Variant identifiers in catalog order.
#[wasm_bindgen]
pub fn list_easings() -> Result<JsValue, JsError> {
    swb::to_value(&identifiers()).map_err(|e| JsError::new(&e.to_string()))
}

/// Expose the full catalog (names, descriptions, formulas) as JSON for tooling/UI.
#[wasm_bindgen]
pub fn get_easing_catalog_json() -> Result<String, JsError> {
    catalog_json().map_err(|e| JsError::new(&e.to_string()))
}

/// A resolved curve held on the JS side, avoiding a name lookup per frame.
#[wasm_bindgen]
pub struct WasmEasing {
    variant: EasingVariant,
}

#[wasm_bindgen]
impl WasmEasing {
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<WasmEasing, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        Ok(WasmEasing {
            variant: lookup(name)?.variant,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn identifier(&self) -> String {
        self.variant.identifier().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        resolve(self.variant).name.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        resolve(self.variant).description.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn formula(&self) -> String {
        resolve(self.variant).formula.to_string()
    }

    #[wasm_bindgen(getter, js_name = simplifiedFormula)]
    pub fn simplified_formula(&self) -> String {
        resolve(self.variant).simplified_formula.to_string()
    }

    #[wasm_bindgen]
    pub fn evaluate(&self, x: f32) -> f32 {
        resolve(self.variant).evaluate(x)
    }
}
