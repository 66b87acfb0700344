//! Generator configuration
//!
//! The Python and browser renditions of these constructions disagree on a handful
//! of conventions (axis orientation of the torus, phase of the angles, the exact
//! epicycloid formula). Every such point of divergence is an explicit field here
//! instead of a hidden constant.

use crate::errors::GeneratorError;
use crate::float_types::{
    DANCE_RESOLUTION, DEFAULT_STEP, EXTENDED_VIEWPORT, MAX_SAMPLES, PERIOD, Real,
};

/// Orientation of the unit-square torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisConvention {
    /// Strand `a·y = b·x`: direction `(a, b)`, sample `k` at `(a·k/m, b·k/m)`.
    /// The multiplier strand of a correspondence is `(1, mult)`.
    #[default]
    Standard,
    /// Every point mirrored across the diagonal: slope `a/b`, sample `k` at
    /// `(b·k/m, a·k/m)`, multiplier strand `(mult, 1)`.
    Transposed,
}

impl AxisConvention {
    /// Orients a standard-convention `(x, y)` pair.
    #[inline]
    pub const fn orient(self, x: Real, y: Real) -> (Real, Real) {
        match self {
            AxisConvention::Standard => (x, y),
            AxisConvention::Transposed => (y, x),
        }
    }

    /// Strand rates of the multiplier knot paired with `(alpha, beta)`.
    pub const fn multiplier_rates(self, mult: i64) -> (i64, i64) {
        match self {
            AxisConvention::Standard => (1, mult),
            AxisConvention::Transposed => (mult, 1),
        }
    }
}

/// Formula used to trace an epicycloid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpicycloidForm {
    /// `x = a·cos(t+φ) + b·cos((a/b)·t+φ)`, `y` likewise with `sin`.
    #[default]
    Classic,
    /// `x = (a·cos(b·t+φ) + b·cos(a·t+φ)) / (a+b)`, `y` likewise with `sin`.
    /// Fits inside the unit disc whenever `a` and `b` share a sign.
    Normalized,
}

/// Tunables shared by every generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Parameter interval an epicycloid is traced over.
    pub period: Real,
    /// Parameter increment between epicycloid samples.
    pub step: Real,
    /// Chord count of the "continuous" planet dance.
    pub dance_resolution: usize,
    /// Added to both angles of every chord when computing endpoints.
    pub chord_phase: Real,
    /// Phase φ of the epicycloid.
    pub curve_phase: Real,
    pub convention: AxisConvention,
    pub curve_form: EpicycloidForm,
    /// Refuse any sample or point count above this.
    pub max_samples: usize,
    /// Half-width of the square extended chords are clipped to.
    pub extended_viewport: Real,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            period: PERIOD,
            step: DEFAULT_STEP,
            dance_resolution: DANCE_RESOLUTION,
            chord_phase: 0.0,
            curve_phase: 0.0,
            convention: AxisConvention::Standard,
            curve_form: EpicycloidForm::Classic,
            max_samples: MAX_SAMPLES,
            extended_viewport: EXTENDED_VIEWPORT,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_period(mut self, period: Real) -> Self {
        self.period = period;
        self
    }

    pub const fn with_step(mut self, step: Real) -> Self {
        self.step = step;
        self
    }

    pub const fn with_dance_resolution(mut self, resolution: usize) -> Self {
        self.dance_resolution = resolution;
        self
    }

    pub const fn with_chord_phase(mut self, phase: Real) -> Self {
        self.chord_phase = phase;
        self
    }

    pub const fn with_curve_phase(mut self, phase: Real) -> Self {
        self.curve_phase = phase;
        self
    }

    pub const fn with_convention(mut self, convention: AxisConvention) -> Self {
        self.convention = convention;
        self
    }

    pub const fn with_curve_form(mut self, form: EpicycloidForm) -> Self {
        self.curve_form = form;
        self
    }

    pub const fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub const fn with_extended_viewport(mut self, half_width: Real) -> Self {
        self.extended_viewport = half_width;
        self
    }

    /// Checks the curve interval and dance resolution before any generator runs.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.period.is_finite() && self.period > 0.0 && self.step.is_finite() && self.step > 0.0) {
            return Err(GeneratorError::InvalidInterval {
                period: self.period,
                step: self.step,
            });
        }
        if self.dance_resolution == 0 {
            return Err(GeneratorError::InvalidSampleRate(0));
        }
        if self.dance_resolution > self.max_samples {
            return Err(GeneratorError::ExcessiveSampleRate {
                requested: self.dance_resolution as u64,
                limit: self.max_samples,
            });
        }
        Ok(())
    }
}
