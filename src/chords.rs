//! **Planet dances and modular multiplication tables as chord sets**
//!
//! A planet dance `S(a, b, m)` samples two points orbiting the unit circle at
//! integer rates `a` and `b` at `m` evenly spaced instants and joins each pair:
//! ```text
//! θ₀(k) = 2π·a·k/m
//! θ₁(k) = 2π·b·k/m        k ∈ {0, 1, ..., m-1}
//! ```
//! The modular multiplication table `MMT(n, mult)` joins every residue `p` to
//! `mult·p mod n`, which is exactly `S(1, mult, n)`.
//!
//! Chords whose endpoints coincide on the circle are *degenerate*. They are kept
//! in the set (the index structure matters to the correspondence) and filtered
//! only when turned into drawable primitives.

use crate::clip::{centered_square, clip_line};
use crate::errors::{GeneratorError, checked_sample_count};
use crate::float_types::{DEGENERACY_DIGITS, DENSE_CHORD_COUNT, MAX_SAMPLES, Real, TAU};
use geo::{Line, coord};
use nalgebra::{Point2, Vector2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A pair of angles (radians, not reduced) on the unit circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub theta0: Real,
    pub theta1: Real,
}

impl Chord {
    pub const fn new(theta0: Real, theta1: Real) -> Self {
        Self { theta0, theta1 }
    }

    /// Both angles as fractions of a full turn, in `[0, 1)`.
    pub fn turns(&self) -> (Real, Real) {
        (
            (self.theta0 / TAU).rem_euclid(1.0),
            (self.theta1 / TAU).rem_euclid(1.0),
        )
    }

    /// True when both endpoints land on the same point of the circle, comparing
    /// turns rounded to [`DEGENERACY_DIGITS`] fractional digits.
    pub fn is_degenerate(&self) -> bool {
        rounded_turn(self.theta0) == rounded_turn(self.theta1)
    }

    /// Endpoints on the unit circle after rotating both angles by `phase`.
    pub fn endpoints(&self, phase: Real) -> (Point2<Real>, Point2<Real>) {
        let (s0, c0) = (self.theta0 + phase).sin_cos();
        let (s1, c1) = (self.theta1 + phase).sin_cos();
        (Point2::new(c0, s0), Point2::new(c1, s1))
    }
}

/// Rounded fractional turn; a value that rounds up to a whole turn wraps to 0.
fn rounded_turn(theta: Real) -> i64 {
    let scale = (10.0 as Real).powi(DEGENERACY_DIGITS);
    let units = ((theta / TAU).rem_euclid(1.0) * scale).round() as i64;
    units.rem_euclid(scale as i64)
}

/// How a chord set should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordExtent {
    /// Segments between the two endpoints on the circle.
    Bounded,
    /// Full lines through both endpoints.
    Extended,
}

impl ChordExtent {
    /// Opposite-signed rates are drawn as full lines.
    pub const fn for_rates(a: i64, b: i64) -> Self {
        if a.signum() * b.signum() < 0 {
            ChordExtent::Extended
        } else {
            ChordExtent::Bounded
        }
    }
}

/// A drawable chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChordPrimitive {
    /// Circle-bounded segment.
    Segment(Line<Real>),
    /// A full line, already clipped to the viewport.
    Extended(Line<Real>),
}

impl ChordPrimitive {
    pub const fn line(&self) -> &Line<Real> {
        match self {
            ChordPrimitive::Segment(line) | ChordPrimitive::Extended(line) => line,
        }
    }
}

/// The `m` chords of a planet dance, in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSet {
    pub a: i64,
    pub b: i64,
    pub chords: Vec<Chord>,
}

impl ChordSet {
    /// Generates `S(a, b, m)`.
    ///
    /// # Errors
    /// [`GeneratorError::InvalidSampleRate`] when `m <= 0`, and
    /// [`GeneratorError::ExcessiveSampleRate`] when `m` exceeds [`MAX_SAMPLES`].
    ///
    /// # Example
    /// ```
    /// # use planet_dance::chords::ChordSet;
    /// let dance = ChordSet::generate(5, 2, 203).unwrap();
    /// assert_eq!(dance.len(), 203);
    /// ```
    pub fn generate(a: i64, b: i64, m: i64) -> Result<Self, GeneratorError> {
        Self::generate_with_limit(a, b, m, MAX_SAMPLES)
    }

    /// [`ChordSet::generate`] with a caller-chosen bound on `m`.
    pub fn generate_with_limit(a: i64, b: i64, m: i64, limit: usize) -> Result<Self, GeneratorError> {
        let count = checked_sample_count(m, limit)?;
        let chords = Self::sample(a, b, count);
        tracing::debug!(a, b, m, "generated planet dance chords");
        Ok(Self { a, b, chords })
    }

    /// The modular multiplication table `MMT(modulus, mult)`, i.e. `S(1, mult, modulus)`.
    pub fn modular(modulus: i64, mult: i64) -> Result<Self, GeneratorError> {
        Self::generate(1, mult, modulus)
    }

    /// [`ChordSet::modular`] with a caller-chosen bound on `modulus`.
    pub fn modular_with_limit(modulus: i64, mult: i64, limit: usize) -> Result<Self, GeneratorError> {
        Self::generate_with_limit(1, mult, modulus, limit)
    }

    #[cfg(not(feature = "parallel"))]
    fn sample(a: i64, b: i64, m: usize) -> Vec<Chord> {
        (0..m).map(|k| Self::chord_at(a, b, k, m)).collect()
    }

    #[cfg(feature = "parallel")]
    fn sample(a: i64, b: i64, m: usize) -> Vec<Chord> {
        (0..m)
            .into_par_iter()
            .map(|k| Self::chord_at(a, b, k, m))
            .collect()
    }

    #[inline]
    fn chord_at(a: i64, b: i64, k: usize, m: usize) -> Chord {
        let k = k as Real;
        let m = m as Real;
        Chord::new(TAU * (a as Real) * k / m, TAU * (b as Real) * k / m)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    /// Chords that a renderer should actually draw.
    pub fn non_degenerate(&self) -> impl Iterator<Item = &Chord> + '_ {
        self.chords.iter().filter(|chord| !chord.is_degenerate())
    }

    /// Drawing style implied by the rates of this set.
    pub const fn extent(&self) -> ChordExtent {
        ChordExtent::for_rates(self.a, self.b)
    }

    /// Stroke opacity the dense sets were drawn with.
    pub fn suggested_opacity(&self) -> Real {
        if self.chords.len() > DENSE_CHORD_COUNT { 0.05 } else { 1.0 }
    }

    /// Turns every non-degenerate chord into a drawable line.
    ///
    /// Extended chords are clipped to the square `[-viewport, viewport]²`; a chord
    /// whose line misses that square is dropped.
    pub fn primitives(&self, extent: ChordExtent, phase: Real, viewport: Real) -> Vec<ChordPrimitive> {
        let bounds = centered_square(viewport);
        self.non_degenerate()
            .filter_map(|chord| {
                let (p, q) = chord.endpoints(phase);
                match extent {
                    ChordExtent::Bounded => Some(ChordPrimitive::Segment(Line::new(
                        coord! { x: p.x, y: p.y },
                        coord! { x: q.x, y: q.y },
                    ))),
                    ChordExtent::Extended => {
                        let direction: Vector2<Real> = q - p;
                        clip_line(p, direction, &bounds).map(ChordPrimitive::Extended)
                    },
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ChordSet {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chords.iter()
    }
}
