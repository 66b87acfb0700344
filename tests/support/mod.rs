//! Test support library
//! Provides various helper functions & utilities for tests.

#![allow(dead_code)]

use geo::Line;
use nalgebra::Point2;
use planet_dance::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Compares two points component-wise.
pub fn points_close(p: &Point2<Real>, q: &Point2<Real>, eps: Real) -> bool {
    approx_eq(p.x, q.x, eps) && approx_eq(p.y, q.y, eps)
}

/// True when `p` lies in the closed unit square.
pub fn in_unit_square(p: &Point2<Real>) -> bool {
    (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
}

/// Distance from the origin of both ends of a line.
pub fn end_radii(line: &Line<Real>) -> (Real, Real) {
    (
        line.start.x.hypot(line.start.y),
        line.end.x.hypot(line.end.y),
    )
}

/// Distance of `value` from the nearest integer.
pub fn integer_offset(value: Real) -> Real {
    (value - value.round()).abs()
}
