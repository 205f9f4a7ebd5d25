//! Finite capped cylinder.

use super::{Geometry, Plane, Tube};
use crate::error::{GeometryResult, InvalidGeometryError};
use crate::material::Material;
use rey_math::{
    compare, Aabb, DVec3, DegenerateVectorError, Interval, LineSegment, NormalizedVector, Point3,
    Ray,
};

/// A tube cut to `height` along its axis, closed by two flat caps.
///
/// The bottom cap is centred on the axis source, the top cap at
/// `source + direction * height`.
#[derive(Debug, Clone)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
    bottom: Plane,
    top: Plane,
}

impl Cylinder {
    pub fn new(material: Material, axis: Ray, radius: f64, height: f64) -> GeometryResult<Self> {
        if compare::leq(height, 0.0) {
            return Err(InvalidGeometryError::NonPositiveHeight(height));
        }
        let tube = Tube::new(material, axis, radius)?;
        let bottom = Plane::new(material, axis.source, axis.direction);
        let top = Plane::new(material, axis.at(height), axis.direction);
        Ok(Self {
            tube,
            height,
            bottom,
            top,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn radius(&self) -> f64 {
        self.tube.radius()
    }

    pub fn axis(&self) -> Ray {
        self.tube.axis()
    }

    fn cap_hits(&self, cap: &Plane, line: &LineSegment) -> Vec<Point3> {
        let radius_sq = self.radius() * self.radius();
        cap.intersect(line)
            .into_iter()
            .filter(|p| compare::leq(p.distance_squared(cap.point()), radius_sq))
            .collect()
    }
}

impl Geometry for Cylinder {
    fn normal(&self, point: Point3) -> Result<NormalizedVector, DegenerateVectorError> {
        if self.bottom.contains(point) || self.top.contains(point) {
            return Ok(self.axis().direction);
        }
        self.tube.normal(point)
    }

    /// Caps first: a line through both caps is done. Otherwise add the
    /// lateral hits whose height along the axis lies strictly between the
    /// caps, so a hit on the rim is only reported once, by its cap.
    fn intersect(&self, line: &LineSegment) -> Vec<Point3> {
        let mut hits = self.cap_hits(&self.bottom, line);
        hits.extend(self.cap_hits(&self.top, line));
        if hits.len() >= 2 {
            return hits;
        }

        let axis = self.axis();
        let span = Interval::new(0.0, self.height);
        hits.extend(
            self.tube
                .intersect(line)
                .into_iter()
                .filter(|p| span.surrounds(axis.direction.dot(*p - axis.source))),
        );
        hits
    }

    fn material(&self) -> &Material {
        self.tube.material()
    }

    fn bounds(&self) -> Option<Aabb> {
        let axis = self.axis();
        let r = DVec3::splat(self.radius());
        let bottom = Aabb::from_points(axis.source - r, axis.source + r);
        let top_center = axis.at(self.height);
        let top = Aabb::from_points(top_center - r, top_center + r);
        Some(Aabb::surrounding(&bottom, &top))
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

    /// Axis from (1, 0, 0) along (1, 1, 1), radius √2, top cap at (6, 5, 5).
    fn diagonal_cylinder() -> Cylinder {
        let axis = Ray::new(DVec3::X, dir(1.0, 1.0, 1.0));
        Cylinder::new(Material::default(), axis, SQRT_2, 5.0 * 3f64.sqrt()).unwrap()
    }

    #[test]
    fn test_cylinder_rejects_bad_dimensions() {
        let axis = Ray::new(DVec3::ZERO, NormalizedVector::Z);
        assert!(matches!(
            Cylinder::new(Material::default(), axis, 1.0, 0.0),
            Err(InvalidGeometryError::NonPositiveHeight(_))
        ));
        assert!(matches!(
            Cylinder::new(Material::default(), axis, 0.0, 1.0),
            Err(InvalidGeometryError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn test_cylinder_normal() {
        let axis = Ray::new(DVec3::ZERO, NormalizedVector::Z);
        let cylinder = Cylinder::new(Material::default(), axis, 1.0, 2.0).unwrap();

        let side = cylinder.normal(DVec3::new(0.0, 1.0, 1.0)).unwrap();
        assert!(approx_eq(side.get(), DVec3::Y));

        let top = cylinder.normal(DVec3::new(0.5, 0.0, 2.0)).unwrap();
        assert_eq!(top, NormalizedVector::Z);
        let bottom = cylinder.normal(DVec3::new(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(bottom, NormalizedVector::Z);
    }

    #[test]
    fn test_ray_enters_cap_leaves_side() {
        let hits = diagonal_cylinder().intersect(&ray((0.0, 0.0, 0.0), (1.0, 0.0, 1.0)));
        assert_points(&hits, &[DVec3::new(0.5, 0.0, 0.5), DVec3::new(2.0, 0.0, 2.0)]);
    }

    #[test]
    fn test_ray_through_both_caps_at_angle() {
        let hits = diagonal_cylinder().intersect(&ray((0.0, 0.0, 0.0), (3.0, 2.0, 2.0)));
        assert_points(
            &hits,
            &[
                DVec3::new(3.0, 2.0, 2.0) / 7.0,
                DVec3::new(48.0, 32.0, 32.0) / 7.0,
            ],
        );
    }

    #[test]
    fn test_ray_from_inside_leaves_through_bottom() {
        let hits = diagonal_cylinder().intersect(&ray((2.0, 2.0, 2.0), (-1.0, -1.0, -1.0)));
        assert_points(&hits, &[DVec3::splat(1.0 / 3.0)]);
    }

    #[test]
    fn test_ray_along_axis_hits_both_caps() {
        let hits = diagonal_cylinder().intersect(&ray((0.0, -1.0, -1.0), (1.0, 1.0, 1.0)));
        assert_points(&hits, &[DVec3::X, DVec3::new(6.0, 5.0, 5.0)]);
    }

    #[test]
    fn test_ray_from_bottom_cap_centre() {
        let hits = diagonal_cylinder().intersect(&ray((1.0, 0.0, 0.0), (1.0, 1.0, 1.0)));
        assert_points(&hits, &[DVec3::new(6.0, 5.0, 5.0)]);
    }

    #[test]
    fn test_ray_passing_beside_misses() {
        let hits = diagonal_cylinder().intersect(&ray((-1.0, -1.0, -1.0), (-3.0, 7.0, 4.0)));
        assert!(hits.is_empty(), "unexpected hits {:?}", hits);
    }

    #[test]
    fn test_ray_through_side_beyond_top_misses() {
        // Crosses the infinite tube only above the top cap.
        let axis = Ray::new(DVec3::ZERO, NormalizedVector::Z);
        let cylinder = Cylinder::new(Material::default(), axis, 1.0, 2.0).unwrap();
        let hits = cylinder.intersect(&ray((-5.0, 0.0, 3.0), (1.0, 0.0, 0.0)));
        assert!(hits.is_empty());

        let hits = cylinder.intersect(&ray((-5.0, 0.0, 1.0), (1.0, 0.0, 0.0)));
        assert_points(&hits, &[DVec3::new(-1.0, 0.0, 1.0), DVec3::new(1.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_cylinder_bounds() {
        let axis = Ray::new(DVec3::ZERO, NormalizedVector::Z);
        let bounds = Cylinder::new(Material::default(), axis, 1.0, 2.0)
            .unwrap()
            .bounds()
            .unwrap();
        assert_eq!(bounds.z, Interval::new(-1.0, 3.0));
        assert_eq!(bounds.x, Interval::new(-1.0, 1.0));
    }
}
