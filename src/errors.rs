//! Generator errors

use crate::float_types::Real;
use std::fmt::Display;

/// Every way a generator can refuse its input.
///
/// All of these are caller contract violations: generators check their input
/// before allocating and never return partial output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// (InvalidSampleRate) A sample count was zero or negative
    InvalidSampleRate(i64),
    /// (ExcessiveSampleRate) A sample count exceeds the configured output bound
    ExcessiveSampleRate { requested: u64, limit: usize },
    /// (DegenerateSlope) Both strand rates are zero, so no line is defined
    DegenerateSlope,
    /// (DivisionByZero) A curve formula would divide by zero
    DivisionByZero { context: &'static str },
    /// (InvalidKnotParameters) Both knot parameters are zero and gcd is undefined
    InvalidKnotParameters { alpha: i64, beta: i64 },
    /// (InvalidInterval) A curve period or step is not a positive finite number
    InvalidInterval { period: Real, step: Real },
    /// (ArithmeticOverflow) An integer product left the `i64` range
    ArithmeticOverflow(&'static str),
    /// (InvalidKnotIndex) A sampled knot index is past the end of the knot list
    InvalidKnotIndex { index: usize, count: usize },
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::InvalidSampleRate(m) => write!(f, "(InvalidSampleRate) Sample count must be positive, got {}", m),
            GeneratorError::ExcessiveSampleRate { requested, limit } => write!(f, "(ExcessiveSampleRate) Sample count {} exceeds the limit of {}", requested, limit),
            GeneratorError::DegenerateSlope => write!(f, "(DegenerateSlope) Strand rates (0, 0) do not define a line"),
            GeneratorError::DivisionByZero { context } => write!(f, "(DivisionByZero) Zero divisor in {}", context),
            GeneratorError::InvalidKnotParameters { alpha, beta } => write!(f, "(InvalidKnotParameters) gcd({}, {}) is undefined", alpha, beta),
            GeneratorError::InvalidInterval { period, step } => write!(f, "(InvalidInterval) Period {} and step {} must be positive and finite", period, step),
            GeneratorError::ArithmeticOverflow(what) => write!(f, "(ArithmeticOverflow) Overflow while computing {}", what),
            GeneratorError::InvalidKnotIndex { index, count } => write!(f, "(InvalidKnotIndex) Knot {} does not exist among {} knots", index, count),
        }
    }
}

/// Checks a caller-supplied sample count and converts it to a length.
pub(crate) fn checked_sample_count(m: i64, limit: usize) -> Result<usize, GeneratorError> {
    if m <= 0 {
        return Err(GeneratorError::InvalidSampleRate(m));
    }
    let requested = m as u64;
    if requested > limit as u64 {
        return Err(GeneratorError::ExcessiveSampleRate { requested, limit });
    }
    Ok(m as usize)
}
