//! Strand families of a linear loop on the square torus.
//!
//! Under wraparound the line `a·y = b·x` becomes the family of parallel lines
//! `a·y − b·x ∈ ℤ`. With `M = max(|a|, |b|)`, the family meets the edges of the
//! unit square at `M + 1` evenly spaced positions along one pair of opposite
//! edges:
//! ```text
//! |b| ≥ |a|  →  (i/|b|, 0) and (i/|b|, 1)     i ∈ {0, ..., M}
//! |a| > |b|  →  (0, i/|a|) and (1, i/|a|)
//! ```
//! Each anchor together with the direction `(a, b)` fixes one line; a renderer
//! extends it or uses [`StrandFamily::segments`] for the part inside the square.

use crate::clip::{clip_line, unit_square};
use crate::config::AxisConvention;
use crate::errors::GeneratorError;
use crate::float_types::{MAX_SAMPLES, Real};
use crate::integer::gcd;
use geo::Line;
use nalgebra::{Point2, Vector2};
use std::collections::BTreeSet;

/// Edge anchors of every translate of one strand.
#[derive(Debug, Clone, PartialEq)]
pub struct StrandFamily {
    pub a: i64,
    pub b: i64,
    pub convention: AxisConvention,
    /// `2·(M+1)` points, in pairs lying on opposite edges.
    pub anchors: Vec<Point2<Real>>,
}

impl StrandFamily {
    /// Anchors of the strand `(a, b)` in the standard orientation.
    ///
    /// # Errors
    /// [`GeneratorError::DegenerateSlope`] when `a == b == 0`.
    ///
    /// # Example
    /// ```
    /// # use planet_dance::torus::StrandFamily;
    /// let family = StrandFamily::generate(3, 2).unwrap();
    /// assert_eq!(family.anchors.len(), 8);
    /// ```
    pub fn generate(a: i64, b: i64) -> Result<Self, GeneratorError> {
        Self::generate_with(a, b, AxisConvention::Standard, MAX_SAMPLES)
    }

    /// Anchors in the given orientation, refusing families with more than
    /// `limit` lines.
    pub fn generate_with(a: i64, b: i64, convention: AxisConvention, limit: usize) -> Result<Self, GeneratorError> {
        if a == 0 && b == 0 {
            return Err(GeneratorError::DegenerateSlope);
        }

        let abs_a = a.unsigned_abs();
        let abs_b = b.unsigned_abs();
        let major = abs_a.max(abs_b);
        // M + 1 lines, each contributing two anchors.
        if major >= limit as u64 {
            return Err(GeneratorError::ExcessiveSampleRate {
                requested: major.saturating_add(1),
                limit,
            });
        }

        let on_x_edges = abs_b >= abs_a;
        let spacing = (if on_x_edges { abs_b } else { abs_a }) as Real;

        let mut anchors = Vec::with_capacity(2 * (major as usize + 1));
        for index in 0..=major {
            let offset = index as Real / spacing;
            let (first, second) = if on_x_edges {
                ((offset, 0.0), (offset, 1.0))
            } else {
                ((0.0, offset), (1.0, offset))
            };
            for (x, y) in [first, second] {
                let (x, y) = convention.orient(x, y);
                anchors.push(Point2::new(x, y));
            }
        }

        if gcd(a, b) > 1 {
            tracing::warn!(a, b, "strand rates share a factor; lines repeat");
        }
        tracing::debug!(a, b, anchors = anchors.len(), "generated strand anchors");

        Ok(Self { a, b, convention, anchors })
    }

    /// Direction shared by every line of the family.
    pub fn direction(&self) -> Vector2<Real> {
        let (x, y) = self.convention.orient(self.a as Real, self.b as Real);
        Vector2::new(x, y)
    }

    /// `dy/dx` of the family, `None` for vertical strands.
    pub fn slope(&self) -> Option<Real> {
        let direction = self.direction();
        if direction.x == 0.0 { None } else { Some(direction.y / direction.x) }
    }

    /// True when `gcd(a, b) == 1`, i.e. the family is a single closed loop.
    pub const fn is_reduced(&self) -> bool {
        gcd(self.a, self.b) == 1
    }

    /// Anchors grouped as the two edge points of each line.
    pub fn anchor_pairs(&self) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
        self.anchors.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Integer `c` of the family line `a·y − b·x = c` through `anchor`.
    fn line_offset(&self, anchor: &Point2<Real>) -> i64 {
        let (x, y) = self.convention.orient(anchor.x, anchor.y);
        (self.a as Real * y - self.b as Real * x).round() as i64
    }

    /// The part of every anchor line that lies inside the unit square.
    ///
    /// Lines that only graze a corner contribute nothing. Most lines are
    /// reached from two anchors; each is reported once.
    pub fn segments(&self) -> Vec<Line<Real>> {
        let bounds = unit_square();
        let direction = self.direction();
        let mut seen = BTreeSet::new();
        self.anchors
            .iter()
            .filter(|anchor| seen.insert(self.line_offset(anchor)))
            .filter_map(|anchor| clip_line(*anchor, direction, &bounds))
            .collect()
    }
}
