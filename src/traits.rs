use crate::chords::{ChordExtent, ChordSet};
use crate::epicycloid::Epicycloid;
use crate::float_types::Real;
use crate::torus::{SamplePointSet, StrandFamily};

/// A drawing target for generator output.
///
/// Generators only return data; each target type (SVG panel, plain geometry,
/// ...) implements this once and decides how the primitives look.
pub trait Renderer {
    type Output;

    /// Draws the non-degenerate chords of `chords`, rotated by `phase`.
    /// Extended chords are clipped to `[-viewport, viewport]²`.
    fn draw_chords(&mut self, chords: &ChordSet, extent: ChordExtent, phase: Real, viewport: Real);

    /// Draws every line of a strand family inside the unit square.
    fn draw_strands(&mut self, family: &StrandFamily, color: &str);

    /// Marks each sample point.
    fn draw_samples(&mut self, samples: &SamplePointSet, color: &str);

    /// Draws the curve as a polyline.
    fn draw_curve(&mut self, curve: &Epicycloid, color: &str);

    fn finish(self) -> Self::Output;
}

/// Supplies colors to a composition layer. Randomness, if wanted, lives in
/// an implementation of this trait and never in a generator.
pub trait ColorChooser {
    fn next_color(&mut self) -> String;
}

impl<F: FnMut() -> String> ColorChooser for F {
    fn next_color(&mut self) -> String {
        self()
    }
}
