//! **Epicycloids traced as dense point sequences**
//!
//! ## **Classic Form**
//! ```text
//! x(t) = a·cos(t + φ) + b·cos((a/b)·t + φ)
//! y(t) = a·sin(t + φ) + b·sin((a/b)·t + φ)
//! ```
//! The curve only closes when `a/b` is rational, and even then it may need many
//! turns, so it is traced over a long fixed interval ([`PERIOD`] = 20π by default).
//!
//! ## **Normalized Form**
//! ```text
//! x(t) = (a·cos(b·t + φ) + b·cos(a·t + φ)) / (a + b)
//! y(t) = (a·sin(b·t + φ) + b·sin(a·t + φ)) / (a + b)
//! ```
//! Same family of figures, scaled so that same-signed rates stay inside the unit disc.
//!
//! ## **Sampling**
//! `n = ⌈period/step⌉` parameter values spread evenly over `[0, period]`, both
//! ends included, so the last point always sits at `t = period`.
//!
//! [`PERIOD`]: crate::float_types::PERIOD

use crate::config::{EpicycloidForm, GeneratorConfig};
use crate::errors::GeneratorError;
use crate::float_types::Real;
use geo::{Coord, LineString};
use nalgebra::Point2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A validated epicycloid description. Cheap to copy; every call to
/// [`Epicycloid::points`] replays the same deterministic sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epicycloid {
    pub a: i64,
    pub b: i64,
    pub period: Real,
    pub step: Real,
    pub phase: Real,
    pub form: EpicycloidForm,
    count: usize,
}

impl Epicycloid {
    /// Classic epicycloid over the default period and step.
    ///
    /// # Errors
    /// [`GeneratorError::DivisionByZero`] when `b == 0`.
    ///
    /// # Example
    /// ```
    /// # use planet_dance::epicycloid::Epicycloid;
    /// let curve = Epicycloid::new(5, 2).unwrap();
    /// assert_eq!(curve.len(), 629);
    /// ```
    pub fn new(a: i64, b: i64) -> Result<Self, GeneratorError> {
        Self::from_config(a, b, &GeneratorConfig::default())
    }

    /// Epicycloid using the period, step, phase and form of `config`.
    pub fn from_config(a: i64, b: i64, config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::with_interval(a, b, config.period, config.step, config.curve_phase, config.curve_form, config.max_samples)
    }

    /// Fully explicit constructor.
    ///
    /// # Errors
    /// - [`GeneratorError::DivisionByZero`] when `b == 0`, or when `a + b == 0` for
    ///   the normalized form.
    /// - [`GeneratorError::InvalidInterval`] when `period` or `step` is not positive and finite.
    /// - [`GeneratorError::ExcessiveSampleRate`] when `⌈period/step⌉ > limit`.
    pub fn with_interval(
        a: i64,
        b: i64,
        period: Real,
        step: Real,
        phase: Real,
        form: EpicycloidForm,
        limit: usize,
    ) -> Result<Self, GeneratorError> {
        if b == 0 {
            return Err(GeneratorError::DivisionByZero { context: "epicycloid rate ratio a/b" });
        }
        if form == EpicycloidForm::Normalized && a.checked_add(b) == Some(0) {
            return Err(GeneratorError::DivisionByZero { context: "normalized epicycloid scale 1/(a+b)" });
        }
        if !(period.is_finite() && period > 0.0 && step.is_finite() && step > 0.0) {
            return Err(GeneratorError::InvalidInterval { period, step });
        }

        let exact = (period / step).ceil();
        if !exact.is_finite() || exact > limit as Real {
            return Err(GeneratorError::ExcessiveSampleRate {
                requested: if exact.is_finite() { exact as u64 } else { u64::MAX },
                limit,
            });
        }
        let count = (exact as usize).max(1);

        Ok(Self { a, b, period, step, phase, form, count })
    }

    /// Number of points, `⌈period/step⌉`.
    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Curve parameter of sample `index`.
    #[inline]
    pub fn time_at(&self, index: usize) -> Real {
        if self.count <= 1 {
            0.0
        } else {
            self.period * index as Real / (self.count - 1) as Real
        }
    }

    /// Point of the curve at parameter `t`.
    pub fn point_at(&self, t: Real) -> Point2<Real> {
        let a = self.a as Real;
        let b = self.b as Real;
        let phase = self.phase;
        match self.form {
            EpicycloidForm::Classic => {
                let ratio = a / b;
                let (s0, c0) = (t + phase).sin_cos();
                let (s1, c1) = (ratio * t + phase).sin_cos();
                Point2::new(a * c0 + b * c1, a * s0 + b * s1)
            },
            EpicycloidForm::Normalized => {
                let scale = 1.0 / (a + b);
                let (s0, c0) = (b * t + phase).sin_cos();
                let (s1, c1) = (a * t + phase).sin_cos();
                Point2::new(scale * (a * c0 + b * c1), scale * (a * s0 + b * s1))
            },
        }
    }

    /// Lazy, restartable walk over the samples.
    pub const fn points(&self) -> EpicycloidPoints {
        EpicycloidPoints { curve: *self, next: 0 }
    }

    /// All samples, collected.
    #[cfg(not(feature = "parallel"))]
    pub fn to_points(&self) -> Vec<Point2<Real>> {
        self.points().collect()
    }

    /// All samples, evaluated in parallel.
    #[cfg(feature = "parallel")]
    pub fn to_points(&self) -> Vec<Point2<Real>> {
        (0..self.count)
            .into_par_iter()
            .map(|index| self.point_at(self.time_at(index)))
            .collect()
    }

    /// The samples as an open polyline.
    pub fn to_line_string(&self) -> LineString<Real> {
        LineString::new(
            self.points()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect(),
        )
    }
}

/// Iterator returned by [`Epicycloid::points`].
#[derive(Debug, Clone)]
pub struct EpicycloidPoints {
    curve: Epicycloid,
    next: usize,
}

impl Iterator for EpicycloidPoints {
    type Item = Point2<Real>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.curve.count {
            return None;
        }
        let point = self.curve.point_at(self.curve.time_at(self.next));
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.curve.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EpicycloidPoints {}
