//! Tolerance-aware comparison of doubles.
//!
//! Two values are equal when they differ by at most [`EPSILON`]. The ordering
//! helpers are built on top of that equality so that `lt`, `leq`, `gt` and
//! `geq` agree with each other near the boundary.

use std::cmp::Ordering;

/// Absolute tolerance used by every geometric comparison.
pub const EPSILON: f64 = 1e-7;

#[inline]
pub fn eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

#[inline]
pub fn neq(a: f64, b: f64) -> bool {
    !eq(a, b)
}

/// Strictly less, and not within tolerance.
#[inline]
pub fn lt(a: f64, b: f64) -> bool {
    a < b && neq(a, b)
}

#[inline]
pub fn leq(a: f64, b: f64) -> bool {
    a < b || eq(a, b)
}

/// Strictly greater, and not within tolerance.
#[inline]
pub fn gt(a: f64, b: f64) -> bool {
    !leq(a, b)
}

#[inline]
pub fn geq(a: f64, b: f64) -> bool {
    !lt(a, b)
}

#[inline]
pub fn is_zero(a: f64) -> bool {
    eq(a, 0.0)
}

/// Three-way comparison where values within tolerance are `Equal`.
pub fn compare(a: f64, b: f64) -> Ordering {
    if eq(a, b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
