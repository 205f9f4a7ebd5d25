//! Infinite tube around an axis ray.

use super::Geometry;
use crate::error::{GeometryResult, InvalidGeometryError};
use crate::material::Material;
use rey_math::{
    compare, solve_quadratic, Aabb, DVec3, DegenerateVectorError, LineSegment, NormalizedVector,
    Point3, Ray,
};

/// The surface at distance `radius` from an infinite axis line.
#[derive(Debug, Clone)]
pub struct Tube {
    material: Material,
    axis: Ray,
    radius: f64,
}

impl Tube {
    pub fn new(material: Material, axis: Ray, radius: f64) -> GeometryResult<Self> {
        if compare::leq(radius, 0.0) {
            return Err(InvalidGeometryError::NonPositiveRadius(radius));
        }
        Ok(Self {
            material,
            axis,
            radius,
        })
    }

    pub fn axis(&self) -> Ray {
        self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Component of `v` orthogonal to the axis.
    fn reject(&self, v: DVec3) -> DVec3 {
        let a = self.axis.direction.get();
        v - a * v.dot(a)
    }
}

impl Geometry for Tube {
    fn normal(&self, point: Point3) -> Result<NormalizedVector, DegenerateVectorError> {
        NormalizedVector::new(self.reject(point - self.axis.source))
    }

    /// Solve `|w⊥ + t·d⊥|² = r²`, where `⊥` drops the axis component. A ray
    /// parallel to the axis never enters; a tangent ray only touches and is
    /// not counted.
    fn intersect(&self, line: &LineSegment) -> Vec<Point3> {
        let d = self.reject(line.direction.get());
        let w = self.reject(line.start - self.axis.source);

        let a = d.length_squared();
        if compare::is_zero(a) {
            return Vec::new();
        }
        let b = 2.0 * d.dot(w);
        let c = w.length_squared() - self.radius * self.radius;

        let roots = solve_quadratic(a, b, c);
        if roots.len() < 2 {
            return Vec::new();
        }
        roots.into_iter().filter_map(|t| line.travel(t)).collect()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn bounds(&self) -> Option<Aabb> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_util::assert_points;
    use rey_math::approx_eq;
    use std::f64::consts::SQRT_2;

    fn dir(x: f64, y: f64, z: f64) -> NormalizedVector {
        NormalizedVector::new(DVec3::new(x, y, z)).unwrap()
    }

    fn ray(source: (f64, f64, f64), direction: (f64, f64, f64)) -> LineSegment {
        let (x, y, z) = source;
        let (dx, dy, dz) = direction;
        Ray::new(DVec3::new(x, y, z), dir(dx, dy, dz)).segment()
    }

    /// Axis through (-1, 1, 0) along (1, 1, 1), radius √2.
    fn diagonal_tube() -> Tube {
        let axis = Ray::new(DVec3::new(-1.0, 1.0, 0.0), dir(1.0, 1.0, 1.0));
        Tube::new(Material::default(), axis, SQRT_2).unwrap()
    }

    #[test]
    fn test_tube_rejects_bad_radius() {
        let axis = Ray::new(DVec3::ZERO, NormalizedVector::Z);
        assert!(Tube::new(Material::default(), axis, 0.0).is_err());
        assert!(Tube::new(Material::default(), axis, -1.0).is_err());
    }

    #[test]
    fn test_tube_normal() {
        let axis = Ray::new(DVec3::new(1.0, 2.0, 3.0), dir(4.0, 5.0, 6.0));
        let tube = Tube::new(Material::default(), axis, 3.0).unwrap();

        let n = tube.normal(DVec3::new(1.0, 8.0, -2.0)).unwrap();
        assert!(approx_eq(n.get(), DVec3::new(0.0, 6.0, -5.0).normalize()));

        let n = tube
            .normal(DVec3::new(30.942606428329093, 34.625914857336724, 44.4))
            .unwrap();
        assert!(approx_eq(n.get(), DVec3::new(5.0, -4.0, 0.0).normalize()));
    }

    #[test]
    fn test_normal_on_axis_is_degenerate() {
        let tube = diagonal_tube();
        assert!(tube.normal(DVec3::new(-1.0, 1.0, 0.0)).is_err());
        assert!(tube.normal(DVec3::new(0.0, 2.0, 1.0)).is_err());
    }

    #[test]
    fn test_ray_crosses_tube() {
        let hits = diagonal_tube().intersect(&ray((-1.0, 5.0, 2.0), (1.0, -1.0, 0.0)));
        assert_points(&hits, &[DVec3::new(2.0, 2.0, 2.0), DVec3::new(0.0, 4.0, 2.0)]);
    }

    #[test]
    fn test_ray_from_inside_exits_once() {
        let hits = diagonal_tube().intersect(&ray((1.0, 3.0, 2.0), (1.0, -1.0, 0.0)));
        assert_points(&hits, &[DVec3::new(2.0, 2.0, 2.0)]);
    }

    #[test]
    fn test_ray_past_tube_misses() {
        assert!(diagonal_tube()
            .intersect(&ray((3.0, 1.0, 2.0), (1.0, -1.0, 0.0)))
            .is_empty());
    }

    #[test]
    fn test_ray_parallel_to_axis_misses() {
        let tube = diagonal_tube();
        assert!(tube.intersect(&ray((1.5, 2.5, 2.0), (1.0, 1.0, 1.0))).is_empty());
        // The axis itself.
        assert!(tube.intersect(&ray((-1.0, 1.0, 0.0), (1.0, 1.0, 1.0))).is_empty());
    }

    #[test]
    fn test_ray_on_surface() {
        let tube = diagonal_tube();
        // Leaving the surface outward.
        assert!(tube.intersect(&ray((2.0, 2.0, 2.0), (1.0, -1.0, 0.0))).is_empty());
        // Entering from the surface: only the far side counts.
        assert_points(
            &tube.intersect(&ray((2.0, 2.0, 2.0), (-1.0, 1.0, 0.0))),
            &[DVec3::new(0.0, 4.0, 2.0)],
        );
    }

    #[test]
    fn test_tangent_ray_misses() {
        // Touches the tube at (2, 2, 2) without entering.
        let hits = diagonal_tube().intersect(&ray((3.0, 3.0, 1.0), (-1.0, -1.0, 1.0)));
        assert!(hits.is_empty(), "tangent ray should not hit: {:?}", hits);
    }

    #[test]
    fn test_ray_from_axis_hits_once() {
        let hits = diagonal_tube().intersect(&ray((0.0, 2.0, 1.0), (-1.0, 1.0, 0.0)));
        assert_points(&hits, &[DVec3::new(-1.0, 3.0, 1.0)]);
    }
}
