//! Browser bindings.
//!
//! Everything crosses the boundary as flat `f64` arrays (`[x0, y0, x1, y1, ...]`
//! or `[θ0, θ1, ...]`) or as SVG text, so the JS side needs no glue types.

use crate::errors::GeneratorError;
use crate::float_types::Real;
use nalgebra::Point2;
use wasm_bindgen::prelude::*;

pub mod correspondence_js;

pub use correspondence_js::CorrespondenceJs;

fn to_js_error(error: GeneratorError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn flatten_points<'a>(points: impl IntoIterator<Item = &'a Point2<Real>>) -> Vec<f64> {
    points
        .into_iter()
        .flat_map(|p| [p.x as f64, p.y as f64])
        .collect()
}

/// `|alpha·mult − beta|`, the sample rate the inputs are linked by.
#[wasm_bindgen(js_name = sampleRate)]
pub fn sample_rate(alpha: i32, beta: i32, mult: i32) -> Result<f64, JsValue> {
    crate::correspondence::sample_rate(alpha.into(), beta.into(), mult.into())
        .map(|rate| rate as f64)
        .map_err(to_js_error)
}
