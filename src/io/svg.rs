//! SVG output of the constructions, built on the [`svg`](https://crates.io/crates/svg) crate.
//!
//! Each construction becomes a *panel*: a nested `<svg>` whose `viewBox` is the
//! construction's own coordinate box, with the y axis flipped so that the math
//! convention (y up) survives. Compositions lay panels out on a grid.

use crate::chords::{ChordExtent, ChordSet};
use crate::clip::centered_square;
use crate::config::GeneratorConfig;
use crate::correspondence::{Correspondence, DanceAndEpicycloid, KnotFamilies, KnotSampleDance};
use crate::epicycloid::Epicycloid;
use crate::float_types::Real;
use crate::io::IoError;
use crate::torus::{SamplePointSet, StrandFamily};
use crate::traits::{ColorChooser, Renderer};
use ::svg::{Document, Node};
use ::svg::node::element::{Circle, Element, Group, Path, Polyline, Rectangle, SVG};
use geo::{BoundingRect, Rect, coord};
use std::fmt::Write as _;

/// Pixel edge length of one panel.
pub const PANEL_SIZE: Real = 400.0;

const TITLE_HEIGHT: Real = 24.0;
const CHORD_COLOR: &str = "#222";
const SAMPLE_COLOR: &str = "black";

/// Renders into one SVG panel covering `bounds`.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    bounds: Rect<Real>,
    stroke_width: Real,
    content: Group,
    title: Option<String>,
    square_drawn: bool,
}

impl SvgRenderer {
    pub fn new(bounds: Rect<Real>) -> Self {
        let stroke_width = bounds.width().max(bounds.height()) / 600.0;
        Self {
            bounds,
            stroke_width,
            content: Group::new().set("transform", "scale(1,-1)"),
            title: None,
            square_drawn: false,
        }
    }

    /// Panel for a chord diagram: the circle with a small margin, or the
    /// extended-line viewport.
    pub fn for_chords(extent: ChordExtent, viewport: Real) -> Self {
        match extent {
            ChordExtent::Bounded => Self::new(centered_square(1.1)),
            ChordExtent::Extended => Self::new(centered_square(viewport)),
        }
    }

    /// Panel for the unit-square torus.
    pub fn for_torus() -> Self {
        Self::new(Rect::new(coord! { x: -0.05, y: -0.05 }, coord! { x: 1.05, y: 1.05 }))
    }

    /// Panel fitted around a curve, with a 5% margin.
    pub fn for_curve(curve: &Epicycloid) -> Self {
        let bounds = curve
            .to_line_string()
            .bounding_rect()
            .unwrap_or_else(|| centered_square(1.0));
        let half = 0.5 * bounds.width().max(bounds.height()).max(Real::EPSILON) * 1.05;
        let center = bounds.center();
        Self::new(Rect::new(
            coord! { x: center.x - half, y: center.y - half },
            coord! { x: center.x + half, y: center.y + half },
        ))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn push<T: Into<Box<dyn Node>>>(&mut self, node: T) {
        let content = std::mem::replace(&mut self.content, Group::new());
        self.content = content.add(node);
    }

    fn draw_square(&mut self) {
        if self.square_drawn {
            return;
        }
        self.square_drawn = true;
        let outline = Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", 1.0)
            .set("height", 1.0)
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", self.stroke_width);
        self.push(outline);
    }

    fn lines_path(lines: impl IntoIterator<Item = geo::Line<Real>>) -> String {
        let mut d = String::new();
        for line in lines {
            let _ = write!(
                d,
                "M{:.6} {:.6}L{:.6} {:.6}",
                line.start.x, line.start.y, line.end.x, line.end.y
            );
        }
        d
    }
}

impl Renderer for SvgRenderer {
    type Output = SVG;

    fn draw_chords(&mut self, chords: &ChordSet, extent: ChordExtent, phase: Real, viewport: Real) {
        if extent == ChordExtent::Bounded {
            let circle = Circle::new()
                .set("cx", 0.0)
                .set("cy", 0.0)
                .set("r", 1.0)
                .set("fill", "none")
                .set("stroke", CHORD_COLOR)
                .set("stroke-opacity", 0.5)
                .set("stroke-width", self.stroke_width);
            self.push(circle);
        }
        let primitives = chords.primitives(extent, phase, viewport);
        let d = Self::lines_path(primitives.iter().map(|primitive| *primitive.line()));
        if d.is_empty() {
            return;
        }
        let path = Path::new()
            .set("d", d)
            .set("fill", "none")
            .set("stroke", CHORD_COLOR)
            .set("stroke-opacity", chords.suggested_opacity())
            .set("stroke-width", self.stroke_width);
        self.push(path);
    }

    fn draw_strands(&mut self, family: &StrandFamily, color: &str) {
        self.draw_square();
        let d = Self::lines_path(family.segments());
        if d.is_empty() {
            return;
        }
        let path = Path::new()
            .set("d", d)
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-opacity", 0.8)
            .set("stroke-width", 2.0 * self.stroke_width);
        self.push(path);
    }

    fn draw_samples(&mut self, samples: &SamplePointSet, color: &str) {
        let radius = 3.0 * self.stroke_width;
        let mut group = Group::new().set("fill", color);
        for point in samples.iter() {
            group = group.add(
                Circle::new()
                    .set("cx", point.x)
                    .set("cy", point.y)
                    .set("r", radius),
            );
        }
        self.push(group);
    }

    fn draw_curve(&mut self, curve: &Epicycloid, color: &str) {
        let mut points = String::new();
        for point in curve.points() {
            let _ = write!(points, "{:.6},{:.6} ", point.x, point.y);
        }
        let polyline = Polyline::new()
            .set("points", points.trim_end().to_string())
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-opacity", 0.9)
            .set("stroke-width", 2.0 * self.stroke_width);
        self.push(polyline);
    }

    fn finish(self) -> SVG {
        let min = self.bounds.min();
        let max = self.bounds.max();
        let mut panel = SVG::new()
            .set("viewBox", (min.x, -max.y, self.bounds.width(), self.bounds.height()))
            .add(self.content);
        if let Some(title) = self.title {
            panel = panel.set("aria-label", title);
        }
        panel
    }
}

/// Places panels on a grid, row-major, each with its title above it.
pub fn grid(panels: Vec<(Option<String>, SVG)>, columns: usize) -> Document {
    let columns = columns.max(1);
    let rows = panels.len().div_ceil(columns).max(1);
    let cell_height = PANEL_SIZE + TITLE_HEIGHT;
    let mut document = Document::new()
        .set("width", PANEL_SIZE * columns as Real)
        .set("height", cell_height * rows as Real)
        .set("viewBox", (0.0, 0.0, PANEL_SIZE * columns as Real, cell_height * rows as Real));

    for (index, (title, panel)) in panels.into_iter().enumerate() {
        let x = PANEL_SIZE * (index % columns) as Real;
        let y = cell_height * (index / columns) as Real;
        if let Some(title) = title {
            let mut label = Element::new("text");
            label.assign("x", x + 0.5 * PANEL_SIZE);
            label.assign("y", y + 0.75 * TITLE_HEIGHT);
            label.assign("text-anchor", "middle");
            label.assign("font-family", "sans-serif");
            label.assign("font-size", 14.0);
            label.append(::svg::node::Text::new(title));
            document = document.add(label);
        }
        let panel = panel
            .set("x", x)
            .set("y", y + TITLE_HEIGHT)
            .set("width", PANEL_SIZE)
            .set("height", PANEL_SIZE);
        document = document.add(panel);
    }
    document
}

/// Serializes a document.
pub fn write_svg<W: std::io::Write>(document: &Document, writer: W) -> Result<(), IoError> {
    ::svg::write(writer, document)?;
    Ok(())
}

fn chord_panel(chords: &ChordSet, extent: ChordExtent, config: &GeneratorConfig, title: String) -> (Option<String>, SVG) {
    let mut renderer = SvgRenderer::for_chords(extent, config.extended_viewport).with_title(title.clone());
    renderer.draw_chords(chords, extent, config.chord_phase, config.extended_viewport);
    (Some(title), renderer.finish())
}

fn curve_panel(curve: &Epicycloid, color: &str) -> (Option<String>, SVG) {
    let title = "Epicycloid".to_string();
    let mut renderer = SvgRenderer::for_curve(curve).with_title(title.clone());
    renderer.draw_curve(curve, color);
    (Some(title), renderer.finish())
}

impl ChordSet {
    /// A single-panel drawing of this chord set.
    pub fn to_svg(&self, extent: ChordExtent, config: &GeneratorConfig) -> Document {
        let title = if self.a == 1 {
            format!("MMT({}, {})", self.len(), self.b)
        } else {
            format!("S({}, {}, {})", self.a, self.b, self.len())
        };
        grid(vec![chord_panel(self, extent, config, title)], 1)
    }
}

impl Correspondence {
    /// The four linked views: planet dance (top left), torus strands (top
    /// right), modular multiplication table (bottom left), epicycloid (bottom right).
    pub fn to_svg(&self, config: &GeneratorConfig, colors: &mut impl ColorChooser) -> Document {
        let bundle = &self.bundle;
        let dance = chord_panel(
            &self.dance,
            self.dance_extent,
            config,
            format!("Planet Dance \u{3b1} = {} \u{3b2} = {}", bundle.alpha, bundle.beta),
        );

        let torus_title = format!(
            "Linear Loops on Torus ({}, {}) and ({}, {})",
            bundle.alpha, bundle.beta, self.multiplier_knot.a, self.multiplier_knot.b
        );
        let mut torus = SvgRenderer::for_torus().with_title(torus_title.clone());
        torus.draw_strands(&self.knot, &colors.next_color());
        torus.draw_strands(&self.multiplier_knot, &colors.next_color());
        torus.draw_samples(&self.samples, SAMPLE_COLOR);

        let table = chord_panel(
            &self.modular_table,
            ChordExtent::Bounded,
            config,
            format!("MMT({}, {})", bundle.sample_rate, bundle.mult),
        );
        let curve = curve_panel(&self.epicycloid, &colors.next_color());

        grid(vec![dance, (Some(torus_title), torus.finish()), table, curve], 2)
    }
}

impl KnotSampleDance {
    /// Sampled strands (left) beside the equally sampled planet dance (right).
    pub fn to_svg(&self, config: &GeneratorConfig, colors: &mut impl ColorChooser) -> Document {
        let torus_title = format!("Torus Knot ({}, {}) sampled {} times", self.reduced_a, self.reduced_b, self.samples.len());
        let mut torus = SvgRenderer::for_torus().with_title(torus_title.clone());
        torus.draw_strands(&self.knot, &colors.next_color());
        torus.draw_samples(&self.samples, SAMPLE_COLOR);

        let dance = chord_panel(
            &self.dance,
            self.dance_extent,
            config,
            format!("S({}, {}, {})", self.reduced_a, self.reduced_b, self.dance.len()),
        );
        grid(vec![(Some(torus_title), torus.finish()), dance], 2)
    }
}

impl DanceAndEpicycloid {
    /// The continuous planet dance (left) beside the epicycloid (right).
    pub fn to_svg(&self, config: &GeneratorConfig, colors: &mut impl ColorChooser) -> Document {
        let dance = chord_panel(
            &self.dance,
            self.dance_extent,
            config,
            format!("Planet Dance ({}, {})", self.reduced_a, self.reduced_b),
        );
        let curve = curve_panel(&self.epicycloid, &colors.next_color());
        grid(vec![dance, curve], 2)
    }
}

impl KnotFamilies {
    /// All strands on one torus, plus the samples of the sampled knot.
    ///
    /// Knot `i` is stroked with `knot_colors[i]` when present; every other knot
    /// asks `colors`.
    pub fn to_svg(&self, knot_colors: &[Option<String>], colors: &mut impl ColorChooser) -> Document {
        let rates = self
            .families
            .iter()
            .map(|family| format!("({}, {})", family.a, family.b))
            .collect::<Vec<_>>()
            .join(", ");
        let title = format!("Linear Loops on Torus {rates}");
        let mut torus = SvgRenderer::for_torus().with_title(title.clone());
        for (index, family) in self.families.iter().enumerate() {
            let color = match knot_colors.get(index) {
                Some(Some(color)) => color.clone(),
                _ => colors.next_color(),
            };
            torus.draw_strands(family, &color);
        }
        if let Some(samples) = &self.samples {
            torus.draw_samples(samples, SAMPLE_COLOR);
        }
        grid(vec![(Some(title), torus.finish())], 1)
    }
}
