//! Sphere primitive.

use super::Geometry;
use crate::error::{GeometryResult, InvalidGeometryError};
use crate::material::Material;
use rey_math::{
    compare, Aabb, DVec3, DegenerateVectorError, LineSegment, NormalizedVector, Point3,
};

/// A sphere given by centre and radius.
#[derive(Debug, Clone)]
pub struct Sphere {
    material: Material,
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(material: Material, center: Point3, radius: f64) -> GeometryResult<Self> {
        if compare::leq(radius, 0.0) {
            return Err(InvalidGeometryError::NonPositiveRadius(radius));
        }
        Ok(Self {
            material,
            center,
            radius,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Geometry for Sphere {
    fn normal(&self, point: Point3) -> Result<NormalizedVector, DegenerateVectorError> {
        NormalizedVector::between(self.center, point)
    }

    /// Project the centre onto the line; the chord half-length then follows
    /// from the perpendicular distance.
    fn intersect(&self, line: &LineSegment) -> Vec<Point3> {
        let to_center = self.center - line.start;
        let along = to_center.dot(line.direction.get());
        let perpendicular_sq = to_center.length_squared() - along * along;
        let radius_sq = self.radius * self.radius;

        if compare::eq(perpendicular_sq, radius_sq) {
            // Grazing: one touching point.
            return line.travel(along).into_iter().collect();
        }
        if perpendicular_sq > radius_sq {
            return Vec::new();
        }

        let half_chord = (radius_sq - perpendicular_sq).sqrt();
        [along - half_chord, along + half_chord]
            .into_iter()
            .filter_map(|t| line.travel(t))
            .collect()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn bounds(&self) -> Option<Aabb> {
        let r = DVec3::splat(self.radius);
        Some(Aabb::from_points(self.center - r, self.center + r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_util::assert_points;
    use rey_math::{approx_eq, Ray};

    fn unit_sphere_at_x1() -> Sphere {
        Sphere::new(Material::default(), DVec3::new(1.0, 0.0, 0.0), 1.0).unwrap()
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        assert!(matches!(
            Sphere::new(Material::default(), DVec3::ZERO, 0.0),
            Err(InvalidGeometryError::NonPositiveRadius(_))
        ));
        assert!(Sphere::new(Material::default(), DVec3::ZERO, -2.0).is_err());
    }

    #[test]
    fn test_sphere_normal() {
        let sphere = unit_sphere_at_x1();
        let n = sphere.normal(DVec3::new(1.0, 0.0, 1.0)).unwrap();
        assert!(approx_eq(n.get(), DVec3::Z));
        assert!(sphere.normal(sphere.center()).is_err());
    }

    #[test]
    fn test_ray_through_sphere() {
        let sphere = unit_sphere_at_x1();
        let ray = Ray::new(DVec3::new(-1.0, 0.0, 0.0), NormalizedVector::X);

        assert_points(
            &sphere.intersect(&ray.segment()),
            &[DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)],
        );
    }

    #[test]
    fn test_ray_misses_sphere() {
        let sphere = unit_sphere_at_x1();
        let ray = Ray::new(DVec3::new(-1.0, 0.0, 0.0), NormalizedVector::Y);
        assert!(sphere.intersect(&ray.segment()).is_empty());
    }

    #[test]
    fn test_ray_inside_sphere_hits_once() {
        let sphere = unit_sphere_at_x1();
        let ray = Ray::new(DVec3::new(0.5, 0.0, 0.0), NormalizedVector::X);
        assert_points(&sphere.intersect(&ray.segment()), &[DVec3::new(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_ray_after_sphere_misses() {
        let sphere = unit_sphere_at_x1();
        let ray = Ray::new(DVec3::new(3.0, 0.0, 0.0), NormalizedVector::X);
        assert!(sphere.intersect(&ray.segment()).is_empty());
    }

    #[test]
    fn test_ray_starting_on_surface_excludes_start() {
        let sphere = unit_sphere_at_x1();
        let inward = Ray::new(DVec3::ZERO, NormalizedVector::X);
        assert_points(&sphere.intersect(&inward.segment()), &[DVec3::new(2.0, 0.0, 0.0)]);

        let outward = Ray::new(DVec3::ZERO, -NormalizedVector::X);
        assert!(sphere.intersect(&outward.segment()).is_empty());
    }

    #[test]
    fn test_tangent_ray_touches_once() {
        let sphere = unit_sphere_at_x1();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 1.0), NormalizedVector::X);
        assert_points(&sphere.intersect(&ray.segment()), &[DVec3::new(1.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_bounded_segment_stops_short() {
        let sphere = unit_sphere_at_x1();
        let segment = LineSegment::new(DVec3::new(-1.0, 0.0, 0.0), NormalizedVector::X, 4.0);
        // Only the near point (t = 1) lies before the end (t = 2).
        assert_points(&sphere.intersect(&segment), &[DVec3::ZERO]);
    }
}
