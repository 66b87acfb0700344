//! Clipping of infinite lines against axis-aligned boxes (Liang–Barsky with an
//! unbounded parameter range).

use crate::float_types::{Real, tolerance};
use geo::{Line, Rect, coord};
use nalgebra::{Point2, Vector2};

/// Clips the infinite line `origin + t·direction` to `bounds`.
///
/// Returns `None` when the line misses the box, only grazes a corner, or
/// `direction` is the zero vector.
pub fn clip_line(origin: Point2<Real>, direction: Vector2<Real>, bounds: &Rect<Real>) -> Option<Line<Real>> {
    let eps = tolerance();
    if direction.norm() <= eps {
        return None;
    }

    let min = bounds.min();
    let max = bounds.max();
    let mut t_enter = Real::NEG_INFINITY;
    let mut t_exit = Real::INFINITY;

    for (o, d, lo, hi) in [
        (origin.x, direction.x, min.x, max.x),
        (origin.y, direction.y, min.y, max.y),
    ] {
        if d.abs() <= eps {
            // Parallel to this slab: either always inside it or never.
            if o < lo - eps || o > hi + eps {
                return None;
            }
            continue;
        }
        let t0 = (lo - o) / d;
        let t1 = (hi - o) / d;
        let (near, far) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        t_enter = t_enter.max(near);
        t_exit = t_exit.min(far);
    }

    if !(t_enter.is_finite() && t_exit.is_finite()) || (t_exit - t_enter) * direction.norm() <= eps {
        return None;
    }

    let start = origin + direction * t_enter;
    let end = origin + direction * t_exit;
    Some(Line::new(
        coord! { x: start.x, y: start.y },
        coord! { x: end.x, y: end.y },
    ))
}

/// The unit square `[0,1]×[0,1]`.
pub fn unit_square() -> Rect<Real> {
    Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 })
}

/// The square `[-half_width, half_width]²`.
pub fn centered_square(half_width: Real) -> Rect<Real> {
    let h = half_width.abs();
    Rect::new(coord! { x: -h, y: -h }, coord! { x: h, y: h })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Real, b: Real) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn diagonal_spans_square() {
        let line = clip_line(Point2::new(0.0, 0.0), Vector2::new(1.0, 1.0), &unit_square())
            .expect("diagonal crosses the square");
        assert!(close(line.start.x, 0.0) && close(line.start.y, 0.0));
        assert!(close(line.end.x, 1.0) && close(line.end.y, 1.0));
    }

    #[test]
    fn vertical_line_is_clipped() {
        let line = clip_line(Point2::new(0.25, 0.0), Vector2::new(0.0, 3.0), &unit_square())
            .expect("vertical line crosses the square");
        assert!(close(line.start.x, 0.25) && close(line.end.x, 0.25));
        assert!(close((line.end.y - line.start.y).abs(), 1.0));
    }

    #[test]
    fn corner_graze_and_miss() {
        // Touches only (1, 0).
        assert!(clip_line(Point2::new(1.0, 0.0), Vector2::new(1.0, 1.0), &unit_square()).is_none());
        assert!(clip_line(Point2::new(2.0, 0.0), Vector2::new(0.0, 1.0), &unit_square()).is_none());
        assert!(clip_line(Point2::new(0.5, 0.5), Vector2::new(0.0, 0.0), &unit_square()).is_none());
    }

    #[test]
    fn chord_line_reaches_viewport() {
        let line = clip_line(Point2::new(1.0, 0.0), Vector2::new(-1.0, 1.0), &centered_square(10.0))
            .expect("line crosses the viewport");
        let lo = line.start.x.min(line.end.x);
        let hi = line.start.x.max(line.end.x);
        assert!(close(lo, -9.0) && close(hi, 10.0));
    }
}
