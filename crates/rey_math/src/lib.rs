//! Math types for the rey ray tracer.
//!
//! Everything is double precision. `Point3` and `Vector` are plain
//! `glam::DVec3` values; [`NonZeroVector`] and [`NormalizedVector`] carry
//! their invariants in the type so that geometry code never normalizes a
//! zero vector by accident.

// Re-export glam for convenience
pub use glam::*;

pub mod compare;
mod aabb;
mod interval;
mod ray;
mod roots;
mod vector;

pub use aabb::Aabb;
pub use compare::EPSILON;
pub use interval::Interval;
pub use ray::{LineSegment, Ray};
pub use roots::{solve_linear, solve_quadratic};
pub use vector::{
    approx_eq, is_zero_vector, DegenerateVectorError, NonZeroVector, NormalizedVector, Point3,
    Vector,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_operations() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
    }
}
