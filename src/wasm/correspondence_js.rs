use super::{flatten_points, to_js_error};
use crate::config::GeneratorConfig;
use crate::correspondence::Correspondence;
use crate::chords::ChordSet;
use crate::render::Palette;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct CorrespondenceJs {
    pub(crate) inner: Correspondence,
    config: GeneratorConfig,
}

fn flatten_chords(chords: &ChordSet) -> Vec<f64> {
    chords
        .iter()
        .flat_map(|chord| [chord.theta0 as f64, chord.theta1 as f64])
        .collect()
}

#[wasm_bindgen]
impl CorrespondenceJs {
    #[wasm_bindgen(constructor)]
    pub fn new(alpha: i32, beta: i32, mult: i32) -> Result<CorrespondenceJs, JsValue> {
        let config = GeneratorConfig::default();
        let inner = Correspondence::build(alpha.into(), beta.into(), mult.into(), &config).map_err(to_js_error)?;
        Ok(CorrespondenceJs { inner, config })
    }

    #[wasm_bindgen(getter, js_name = sampleRate)]
    pub fn sample_rate(&self) -> f64 {
        self.inner.bundle.sample_rate as f64
    }

    #[wasm_bindgen(getter, js_name = reducedA)]
    pub fn reduced_a(&self) -> f64 {
        self.inner.bundle.reduced_a as f64
    }

    #[wasm_bindgen(getter, js_name = reducedB)]
    pub fn reduced_b(&self) -> f64 {
        self.inner.bundle.reduced_b as f64
    }

    /// `true` when the dance should be drawn with full lines.
    #[wasm_bindgen(getter, js_name = danceExtended)]
    pub fn dance_extended(&self) -> bool {
        self.inner.dance_extent == crate::chords::ChordExtent::Extended
    }

    #[wasm_bindgen(js_name = danceChords)]
    pub fn dance_chords(&self) -> Vec<f64> {
        flatten_chords(&self.inner.dance)
    }

    #[wasm_bindgen(js_name = modularChords)]
    pub fn modular_chords(&self) -> Vec<f64> {
        flatten_chords(&self.inner.modular_table)
    }

    #[wasm_bindgen(js_name = knotAnchors)]
    pub fn knot_anchors(&self) -> Vec<f64> {
        flatten_points(&self.inner.knot.anchors)
    }

    #[wasm_bindgen(js_name = multiplierAnchors)]
    pub fn multiplier_anchors(&self) -> Vec<f64> {
        flatten_points(&self.inner.multiplier_knot.anchors)
    }

    pub fn samples(&self) -> Vec<f64> {
        flatten_points(&self.inner.samples.points)
    }

    #[wasm_bindgen(js_name = curvePoints)]
    pub fn curve_points(&self) -> Vec<f64> {
        flatten_points(&self.inner.epicycloid.to_points())
    }

    #[wasm_bindgen(js_name = toSvg)]
    pub fn to_svg(&self) -> String {
        self.inner
            .to_svg(&self.config, &mut Palette::default())
            .to_string()
    }
}
