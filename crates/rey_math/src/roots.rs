//! Real roots of low-degree polynomials.

use crate::compare;

/// Root of `a·t + b = 0`, or `None` when `a` is (near) zero.
pub fn solve_linear(a: f64, b: f64) -> Option<f64> {
    if compare::is_zero(a) {
        None
    } else {
        Some(-b / a)
    }
}

/// Real roots of `a·t² + b·t + c = 0`.
///
/// A (near) zero leading coefficient falls back to the linear case. A
/// discriminant within tolerance of zero yields the double root once.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if compare::is_zero(a) {
        return solve_linear(b, c).into_iter().collect();
    }

    let discriminant = b * b - 4.0 * a * c;
    if compare::is_zero(discriminant) {
        return vec![-b / (2.0 * a)];
    }
    if discriminant < 0.0 {
        return Vec::new();
    }

    let root = discriminant.sqrt();
    vec![(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(solve_linear(2.0, -4.0), Some(2.0));
        assert_eq!(solve_linear(0.0, 1.0), None);
    }

    #[test]
    fn test_quadratic_two_roots() {
        // (t - 1)(t - 3)
        assert_eq!(solve_quadratic(1.0, -4.0, 3.0), vec![1.0, 3.0]);
    }

    #[test]
    fn test_quadratic_double_root() {
        // (t - 2)^2
        assert_eq!(solve_quadratic(1.0, -4.0, 4.0), vec![2.0]);
    }

    #[test]
    fn test_quadratic_no_real_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_quadratic_degenerates_to_linear() {
        assert_eq!(solve_quadratic(0.0, 2.0, -6.0), vec![3.0]);
    }
}
