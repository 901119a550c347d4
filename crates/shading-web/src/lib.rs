//! WASM bridge for shading-core.
//!
//! Exposes the easing catalogue, the polygon builder and gradient ramps to a
//! browser host. Every export is a thin wrapper over a plain Rust helper in
//! [`bridge`] that returns `shading_core::Result`, so the logic is testable
//! without a JS runtime.

pub mod bridge;

use wasm_bindgen::prelude::*;

fn to_js(err: shading_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install the panic hook and console logger. Call once from JS before anything else.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("shading-web: initialized ({} easing curves)", shading_core::Easing::COUNT);
}

/// Catalogue names in index order.
#[wasm_bindgen]
pub fn easing_names() -> js_sys::Array {
    bridge::easing_names()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Evaluate catalogue curve `index` at `t`.
#[wasm_bindgen]
pub fn ease(index: i32, t: f64) -> Result<f64, JsValue> {
    bridge::ease(index, t).map_err(to_js)
}

/// SVG path data for a polygon fitted into the frame `(x, y, width, height)`.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn polygon_svg(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    sides: u32,
    radius: f64,
    start_angle: f64,
    style: u8,
    inflection: f64,
) -> Result<String, JsValue> {
    let frame = bridge::frame(x, y, width, height);
    bridge::polygon_svg(&frame, sides, radius, start_angle, style, inflection).map_err(to_js)
}

/// RGBA8 bytes for `width` samples of the gradient described by `json`.
#[wasm_bindgen]
pub fn gradient_ramp(json: &str, width: u32) -> Result<Vec<u8>, JsValue> {
    bridge::gradient_ramp(json, width).map_err(to_js)
}
