//! Linear loops on the square torus `[0,1]²` with opposite edges identified.
//!
//! - [`StrandFamily`]: edge anchors of every translate of a strand.
//! - [`SamplePointSet`]: `m` evenly timed stops along one strand.

mod sample;
mod strand;

pub use sample::SamplePointSet;
pub use strand::StrandFamily;
