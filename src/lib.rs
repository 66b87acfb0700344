//! Four planar constructions that show one integer sequence in different ways:
//! **torus-knot strands**, **epicycloids**, **planet-dance chord diagrams** and
//! **modular multiplication tables**.
//!
//! The crate only produces geometry (chords, anchor points, sample points, curve
//! points). Drawing is done through the [`Renderer`](traits::Renderer)
//! capability, with an SVG backend behind the `svg-io` feature.
//!
//! ```
//! use planet_dance::{GeneratorConfig, correspondence::Correspondence};
//!
//! let view = Correspondence::build(5, 2, 41, &GeneratorConfig::default()).unwrap();
//! assert_eq!(view.bundle.sample_rate, 203);
//! assert_eq!(view.samples.len(), 203);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render constructions to SVG documents
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to generate large chord sets and curves
//! - **wasm**: `wasm-bindgen` exports for browser front ends
//! - **cli**: the `planet-dance` command line tool

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod config;
pub mod integer;
pub mod clip;
pub mod chords;
pub mod torus;
pub mod epicycloid;
pub mod correspondence;
pub mod traits;
pub mod render;
pub mod io;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use chords::{Chord, ChordExtent, ChordSet};
pub use config::{AxisConvention, EpicycloidForm, GeneratorConfig};
pub use correspondence::{Correspondence, CorrespondenceBundle};
pub use epicycloid::Epicycloid;
pub use errors::GeneratorError;
pub use torus::{SamplePointSet, StrandFamily};
