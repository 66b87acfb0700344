//! Target-independent rendering helpers.

use crate::chords::{ChordExtent, ChordSet};
use crate::epicycloid::Epicycloid;
use crate::float_types::Real;
use crate::torus::{SamplePointSet, StrandFamily};
use crate::traits::{ColorChooser, Renderer};
use geo::{Geometry, GeometryCollection, Point};

/// Colors of the browser rendition, cycled in order.
pub const DEFAULT_COLORS: [&str; 7] = [
    "#227c9d", "#17c3b2", "#c67b35", "#a877ba", "#ffcb77", "#47865b", "#fe6d73",
];

/// Deterministic [`ColorChooser`] cycling through a fixed list.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<String>,
    next: usize,
}

impl Palette {
    /// An empty list falls back to black.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            colors.push("black".to_string());
        }
        Self { colors, next: 0 }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS)
    }
}

impl ColorChooser for Palette {
    fn next_color(&mut self) -> String {
        let color = self.colors[self.next % self.colors.len()].clone();
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}

/// Collects everything drawn into a `geo` geometry collection: chords and
/// strands as lines, samples as points, curves as line strings.
#[derive(Debug, Clone, Default)]
pub struct GeometryRenderer {
    geometry: Vec<Geometry<Real>>,
}

impl GeometryRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for GeometryRenderer {
    type Output = GeometryCollection<Real>;

    fn draw_chords(&mut self, chords: &ChordSet, extent: ChordExtent, phase: Real, viewport: Real) {
        self.geometry.extend(
            chords
                .primitives(extent, phase, viewport)
                .into_iter()
                .map(|primitive| Geometry::Line(*primitive.line())),
        );
    }

    fn draw_strands(&mut self, family: &StrandFamily, _color: &str) {
        self.geometry
            .extend(family.segments().into_iter().map(Geometry::Line));
    }

    fn draw_samples(&mut self, samples: &SamplePointSet, _color: &str) {
        self.geometry.extend(
            samples
                .iter()
                .map(|p| Geometry::Point(Point::new(p.x, p.y))),
        );
    }

    fn draw_curve(&mut self, curve: &Epicycloid, _color: &str) {
        self.geometry
            .push(Geometry::LineString(curve.to_line_string()));
    }

    fn finish(self) -> Self::Output {
        GeometryCollection(self.geometry)
    }
}
