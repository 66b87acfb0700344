//! **Linked views of one integer sequence**
//!
//! For knot parameters `(α, β)` and a multiplier `mult`, the sampling rate
//! ```text
//! m = |α·mult − β|
//! ```
//! makes four constructions show the same sequence:
//! - the planet dance of the reduced pair `(α/d, β/d)`, `d = gcd(α, β)`,
//! - the modular multiplication table `MMT(m, mult)`,
//! - the epicycloid of the reduced pair,
//! - the torus strands `(α/d, β/d)` and the multiplier strand, the latter
//!   sampled `m` times.
//!
//! The smaller compositions [`KnotSampleDance`] and [`DanceAndEpicycloid`]
//! pair subsets of the same generators, and [`KnotFamilies`] overlays any
//! number of strands on one torus.

use crate::chords::{ChordExtent, ChordSet};
use crate::config::GeneratorConfig;
use crate::epicycloid::Epicycloid;
use crate::errors::GeneratorError;
use crate::integer::gcd;
use crate::torus::{SamplePointSet, StrandFamily};

/// The parameters coupling the four artifacts of a correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrespondenceBundle {
    pub alpha: i64,
    pub beta: i64,
    pub mult: i64,
    pub reduced_a: i64,
    pub reduced_b: i64,
    /// `|alpha·mult − beta|`
    pub sample_rate: i64,
}

impl CorrespondenceBundle {
    /// Reduces `(alpha, beta)` and derives the shared sampling rate.
    ///
    /// # Errors
    /// [`GeneratorError::InvalidKnotParameters`] when `alpha == beta == 0`, and
    /// [`GeneratorError::ArithmeticOverflow`] when `alpha·mult − beta` leaves `i64`.
    pub fn new(alpha: i64, beta: i64, mult: i64) -> Result<Self, GeneratorError> {
        let (reduced_a, reduced_b) = reduce(alpha, beta)?;
        let sample_rate = sample_rate(alpha, beta, mult)?;
        if mult == 0 {
            tracing::warn!(alpha, beta, "multiplier 0 gives a horizontal multiplier strand");
        }
        Ok(Self { alpha, beta, mult, reduced_a, reduced_b, sample_rate })
    }
}

/// Divides `(alpha, beta)` by their gcd.
///
/// # Errors
/// [`GeneratorError::InvalidKnotParameters`] when both are zero.
pub fn reduce(alpha: i64, beta: i64) -> Result<(i64, i64), GeneratorError> {
    let d = gcd(alpha, beta);
    if d == 0 {
        return Err(GeneratorError::InvalidKnotParameters { alpha, beta });
    }
    // d may be 2^63, so divide in i128; the quotients always fit back into i64.
    let div = |value: i64| (value as i128 / d as i128) as i64;
    Ok((div(alpha), div(beta)))
}

/// `|alpha·mult − beta|`, computed without overflow.
pub fn sample_rate(alpha: i64, beta: i64, mult: i64) -> Result<i64, GeneratorError> {
    alpha
        .checked_mul(mult)
        .and_then(|product| product.checked_sub(beta))
        .and_then(i64::checked_abs)
        .ok_or(GeneratorError::ArithmeticOverflow("sample rate |alpha·mult − beta|"))
}

/// Everything needed to draw the four linked views.
#[derive(Debug, Clone, PartialEq)]
pub struct Correspondence {
    pub bundle: CorrespondenceBundle,
    /// Planet dance of the reduced pair at the continuous resolution.
    pub dance: ChordSet,
    /// Segment or line, from the signs of the reduced pair.
    pub dance_extent: ChordExtent,
    /// `MMT(sample_rate, mult)`.
    pub modular_table: ChordSet,
    pub epicycloid: Epicycloid,
    /// Strands of the reduced knot.
    pub knot: StrandFamily,
    /// Strands of the multiplier knot.
    pub multiplier_knot: StrandFamily,
    /// `sample_rate` stops along the multiplier knot.
    pub samples: SamplePointSet,
}

impl Correspondence {
    /// Builds all four artifacts for `(alpha, beta, mult)`.
    ///
    /// # Errors
    /// Fails before producing anything when the bundle cannot be formed, when
    /// the sampling rate is zero (`alpha·mult == beta`), or when any generator
    /// rejects its derived parameters.
    ///
    /// # Example
    /// ```
    /// # use planet_dance::{GeneratorConfig, correspondence::Correspondence};
    /// let view = Correspondence::build(5, 2, 41, &GeneratorConfig::default()).unwrap();
    /// assert_eq!(view.bundle.sample_rate, 203);
    /// assert_eq!(view.modular_table.len(), 203);
    /// ```
    pub fn build(alpha: i64, beta: i64, mult: i64, config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let bundle = CorrespondenceBundle::new(alpha, beta, mult)?;
        let CorrespondenceBundle { reduced_a: a, reduced_b: b, sample_rate: m, .. } = bundle;
        let limit = config.max_samples;

        let dance = ChordSet::generate_with_limit(a, b, config.dance_resolution as i64, limit)?;
        let modular_table = ChordSet::modular_with_limit(m, mult, limit)?;
        let epicycloid = Epicycloid::from_config(a, b, config)?;

        let (ma, mb) = config.convention.multiplier_rates(mult);
        let knot = StrandFamily::generate_with(a, b, config.convention, limit)?;
        let multiplier_knot = StrandFamily::generate_with(ma, mb, config.convention, limit)?;
        let samples = SamplePointSet::generate_with(ma, mb, m, config.convention, limit)?;

        tracing::debug!(alpha, beta, mult, sample_rate = m, "built correspondence");

        Ok(Self {
            bundle,
            dance_extent: ChordExtent::for_rates(a, b),
            dance,
            modular_table,
            epicycloid,
            knot,
            multiplier_knot,
            samples,
        })
    }
}

/// A reduced knot sampled `m` times next to the `m`-sampled planet dance of
/// the same pair.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotSampleDance {
    pub reduced_a: i64,
    pub reduced_b: i64,
    pub knot: StrandFamily,
    pub samples: SamplePointSet,
    pub dance: ChordSet,
    pub dance_extent: ChordExtent,
}

impl KnotSampleDance {
    /// Reduces `(alpha, beta)` and samples both its strand and its planet
    /// dance `m` times.
    ///
    /// # Errors
    /// [`GeneratorError::InvalidKnotParameters`] when `alpha == beta == 0`,
    /// [`GeneratorError::InvalidSampleRate`] when `m <= 0`, and
    /// [`GeneratorError::ExcessiveSampleRate`] when `m` or the strand count
    /// exceeds `config.max_samples`.
    ///
    /// # Example
    /// ```
    /// # use planet_dance::{GeneratorConfig, correspondence::KnotSampleDance};
    /// let scene = KnotSampleDance::build(68, 2, 100, &GeneratorConfig::default()).unwrap();
    /// assert_eq!((scene.reduced_a, scene.reduced_b), (34, 1));
    /// assert_eq!(scene.samples.len(), scene.dance.len());
    /// ```
    pub fn build(alpha: i64, beta: i64, m: i64, config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        let (a, b) = reduce(alpha, beta)?;
        let limit = config.max_samples;
        let knot = StrandFamily::generate_with(a, b, config.convention, limit)?;
        let samples = SamplePointSet::generate_with(a, b, m, config.convention, limit)?;
        let dance = ChordSet::generate_with_limit(a, b, m, limit)?;
        Ok(Self {
            reduced_a: a,
            reduced_b: b,
            knot,
            samples,
            dance,
            dance_extent: ChordExtent::for_rates(a, b),
        })
    }
}

/// The continuous planet dance of a reduced pair beside its epicycloid.
#[derive(Debug, Clone, PartialEq)]
pub struct DanceAndEpicycloid {
    pub reduced_a: i64,
    pub reduced_b: i64,
    pub dance: ChordSet,
    pub dance_extent: ChordExtent,
    pub epicycloid: Epicycloid,
}

impl DanceAndEpicycloid {
    /// Reduces `(alpha, beta)` and builds its planet dance at
    /// `config.dance_resolution` together with its epicycloid.
    ///
    /// # Errors
    /// Any [`GeneratorConfig::validate`] failure,
    /// [`GeneratorError::InvalidKnotParameters`] when `alpha == beta == 0`, and
    /// [`GeneratorError::DivisionByZero`] when the reduced pair has no
    /// epicycloid (`beta == 0`, or `a + b == 0` in the normalized form).
    ///
    /// # Example
    /// ```
    /// # use planet_dance::{ChordExtent, GeneratorConfig, correspondence::DanceAndEpicycloid};
    /// let scene = DanceAndEpicycloid::build(-6, 4, &GeneratorConfig::default()).unwrap();
    /// assert_eq!((scene.reduced_a, scene.reduced_b), (-3, 2));
    /// assert_eq!(scene.dance_extent, ChordExtent::Extended);
    /// ```
    pub fn build(alpha: i64, beta: i64, config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let (a, b) = reduce(alpha, beta)?;
        let dance = ChordSet::generate_with_limit(a, b, config.dance_resolution as i64, config.max_samples)?;
        let epicycloid = Epicycloid::from_config(a, b, config)?;
        Ok(Self {
            reduced_a: a,
            reduced_b: b,
            dance,
            dance_extent: ChordExtent::for_rates(a, b),
            epicycloid,
        })
    }
}

/// Several strands drawn on one torus, one of them optionally sampled.
///
/// Rates are used as given, without reduction, so `(2, 4)` draws the doubled
/// family.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotFamilies {
    pub families: Vec<StrandFamily>,
    /// Index into `families` of the sampled strand.
    pub sampled: Option<usize>,
    pub samples: Option<SamplePointSet>,
}

impl KnotFamilies {
    /// Builds a strand family per `(a, b)` in `knots` and, when `sample` is
    /// `Some((index, m))`, `m` stops along knot `index`.
    ///
    /// # Errors
    /// [`GeneratorError::InvalidKnotIndex`] when `index` is out of range,
    /// [`GeneratorError::InvalidSampleRate`] when `m <= 0`, and any
    /// [`StrandFamily`] failure (e.g. [`GeneratorError::DegenerateSlope`]).
    ///
    /// # Example
    /// ```
    /// # use planet_dance::{GeneratorConfig, correspondence::KnotFamilies};
    /// let knots = KnotFamilies::build(&[(1, 1), (1, 3), (41, 1)], Some((2, 366)), &GeneratorConfig::default()).unwrap();
    /// assert_eq!(knots.families.len(), 3);
    /// assert_eq!(knots.samples.map(|s| s.len()), Some(366));
    /// ```
    pub fn build(
        knots: &[(i64, i64)],
        sample: Option<(usize, i64)>,
        config: &GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        let limit = config.max_samples;
        if let Some((index, _)) = sample {
            if index >= knots.len() {
                return Err(GeneratorError::InvalidKnotIndex { index, count: knots.len() });
            }
        }

        let families = knots
            .iter()
            .map(|&(a, b)| StrandFamily::generate_with(a, b, config.convention, limit))
            .collect::<Result<Vec<_>, _>>()?;
        let samples = sample
            .map(|(index, m)| {
                let (a, b) = knots[index];
                SamplePointSet::generate_with(a, b, m, config.convention, limit)
            })
            .transpose()?;

        tracing::debug!(knots = families.len(), sampled = ?sample, "built knot families");

        Ok(Self { families, sampled: sample.map(|(index, _)| index), samples })
    }
}
