// bridge.rs
//
// Plain-Rust side of the wasm exports. Converts JS-friendly scalars into
// shading-core types and back.

use glam::DVec2;
use shading_core::{Easing, PolygonParams, PolygonStyle, Rect, Result, ShadingGradient};

pub fn easing_names() -> Vec<&'static str> {
    Easing::ALL.iter().map(|e| e.name()).collect()
}

pub fn ease(index: i32, t: f64) -> Result<f64> {
    let f = shading_core::lookup(index as i64)?;
    Ok(f(t))
}

pub fn frame(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect {
        origin: DVec2::new(x, y),
        size: DVec2::new(width, height),
    }
}

pub fn polygon_svg(
    frame: &Rect,
    sides: u32,
    radius: f64,
    start_angle: f64,
    style: u8,
    inflection: f64,
) -> Result<String> {
    let params = PolygonParams::new(sides as usize)
        .with_radius(radius)
        .with_start_angle(start_angle)
        .with_style(PolygonStyle::from_index(style as i64)?)
        .with_inflection(inflection);
    Ok(params.build_in_frame(frame)?.to_svg_path_data())
}

pub fn gradient_ramp(json: &str, width: u32) -> Result<Vec<u8>> {
    let gradient = ShadingGradient::from_json(json)?;
    let ramp = gradient.ramp(width as usize);
    Ok(bytemuck::cast_slice(ramp.as_slice()).to_vec())
}
