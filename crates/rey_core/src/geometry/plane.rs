//! Infinite plane.

use super::Geometry;
use crate::error::{GeometryResult, InvalidGeometryError};
use crate::material::Material;
use rey_math::{
    compare, Aabb, DegenerateVectorError, LineSegment, NonZeroVector, NormalizedVector, Point3,
};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    material: Material,
    point: Point3,
    normal: NormalizedVector,
}

impl Plane {
    pub fn new(material: Material, point: Point3, normal: NormalizedVector) -> Self {
        Self {
            material,
            point,
            normal,
        }
    }

    /// Plane through three points. The normal is `(b - a) × (c - b)`.
    pub fn from_points(
        material: Material,
        a: Point3,
        b: Point3,
        c: Point3,
    ) -> GeometryResult<Self> {
        let normal = NonZeroVector::between(a, b)
            .and_then(|ab| ab.cross(c - b))
            .map_err(|_| InvalidGeometryError::ColinearPoints)?
            .normalized();
        Ok(Self::new(material, a, normal))
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn unit_normal(&self) -> NormalizedVector {
        self.normal
    }

    /// True when `p` lies on the plane within tolerance.
    pub fn contains(&self, p: Point3) -> bool {
        compare::is_zero(self.normal.dot(p - self.point))
    }
}

impl Geometry for Plane {
    fn normal(&self, _point: Point3) -> Result<NormalizedVector, DegenerateVectorError> {
        Ok(self.normal)
    }

    fn intersect(&self, line: &LineSegment) -> Vec<Point3> {
        let denominator = line.direction.dot(self.normal.get());
        if compare::is_zero(denominator) {
            // Parallel, including lying in the plane.
            return Vec::new();
        }
        let t = (self.point - line.start).dot(self.normal.get()) / denominator;
        line.travel(t).into_iter().collect()
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
    use rey_math::{approx_eq, DVec3, Ray};

    fn floor() -> Plane {
        Plane::new(Material::default(), DVec3::new(0.0, 0.0, -1.0), NormalizedVector::Z)
    }

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(
            Material::default(),
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert!(approx_eq(plane.unit_normal().get(), DVec3::Z));
        assert!(plane.contains(DVec3::new(5.0, -3.0, 0.0)));
        assert!(!plane.contains(DVec3::new(5.0, -3.0, 0.1)));
    }

    #[test]
    fn test_plane_rejects_colinear_or_coincident_points() {
        let m = Material::default();
        assert_eq!(
            Plane::from_points(m, DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)).unwrap_err(),
            InvalidGeometryError::ColinearPoints
        );
        assert_eq!(
            Plane::from_points(m, DVec3::ONE, DVec3::ONE, DVec3::X).unwrap_err(),
            InvalidGeometryError::ColinearPoints
        );
    }

    #[test]
    fn test_ray_crosses_plane() {
        let ray = Ray::new(DVec3::new(2.0, 3.0, 4.0), -NormalizedVector::Z);
        assert_points(&floor().intersect(&ray.segment()), &[DVec3::new(2.0, 3.0, -1.0)]);
    }

    #[test]
    fn test_oblique_ray_crosses_plane() {
        let direction = NormalizedVector::new(DVec3::new(1.0, 0.0, -1.0)).unwrap();
        let ray = Ray::new(DVec3::ZERO, direction);
        assert_points(&floor().intersect(&ray.segment()), &[DVec3::new(1.0, 0.0, -1.0)]);
    }

    #[test]
    fn test_ray_away_from_plane_misses() {
        let ray = Ray::new(DVec3::ZERO, NormalizedVector::Z);
        assert!(floor().intersect(&ray.segment()).is_empty());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let outside = Ray::new(DVec3::ZERO, NormalizedVector::X);
        assert!(floor().intersect(&outside.segment()).is_empty());

        let inside = Ray::new(DVec3::new(0.0, 0.0, -1.0), NormalizedVector::X);
        assert!(floor().intersect(&inside.segment()).is_empty());
    }

    #[test]
    fn test_ray_starting_on_plane_misses() {
        let ray = Ray::new(DVec3::new(0.0, 0.0, -1.0), -NormalizedVector::Z);
        assert!(floor().intersect(&ray.segment()).is_empty());
    }
}
