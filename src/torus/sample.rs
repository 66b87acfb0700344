//! Discrete stops along a single torus strand.

use crate::config::AxisConvention;
use crate::errors::{GeneratorError, checked_sample_count};
use crate::float_types::{MAX_SAMPLES, Real};
use crate::integer::wrap_unit;
use nalgebra::Point2;

/// `m` evenly timed points on the strand `(a, b)`:
/// `(x_k, y_k) = ((a·k/m) mod 1, (b·k/m) mod 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePointSet {
    pub a: i64,
    pub b: i64,
    pub convention: AxisConvention,
    pub points: Vec<Point2<Real>>,
}

impl SamplePointSet {
    /// # Errors
    /// [`GeneratorError::InvalidSampleRate`] when `m <= 0`.
    pub fn generate(a: i64, b: i64, m: i64) -> Result<Self, GeneratorError> {
        Self::generate_with(a, b, m, AxisConvention::Standard, MAX_SAMPLES)
    }

    pub fn generate_with(
        a: i64,
        b: i64,
        m: i64,
        convention: AxisConvention,
        limit: usize,
    ) -> Result<Self, GeneratorError> {
        let count = checked_sample_count(m, limit)?;
        let m = count as Real;
        let points = (0..count)
            .map(|k| {
                let t = k as Real / m;
                let (x, y) = convention.orient(wrap_unit(a as Real * t), wrap_unit(b as Real * t));
                Point2::new(x, y)
            })
            .collect();
        tracing::debug!(a, b, count, "sampled torus strand");
        Ok(Self { a, b, convention, points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2<Real>> {
        self.points.iter()
    }
}
