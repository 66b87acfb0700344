//! Integer helpers shared by the generators.

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`.
pub const fn gcd(a: i64, b: i64) -> u64 {
    let mut x = a.unsigned_abs();
    let mut y = b.unsigned_abs();
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Wraps a real into `[0, 1)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `1.0`; that case
/// is folded back to `0.0`.
#[inline]
pub fn wrap_unit(value: crate::float_types::Real) -> crate::float_types::Real {
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
