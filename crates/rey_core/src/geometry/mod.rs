//! Intersectable primitives and the scene aggregate.
//!
//! Every primitive answers two questions: where does a line segment cross
//! it, and what is the surface normal at a point on it. Intersection results
//! only include points strictly in front of the segment start (beyond the
//! comparison tolerance) and strictly before its end.

mod cylinder;
mod geometries;
mod plane;
mod polygon;
mod sphere;
mod tube;

pub use cylinder::Cylinder;
pub use geometries::Geometries;
pub use plane::Plane;
pub use polygon::{Polygon, Triangle};
pub use sphere::Sphere;
pub use tube::Tube;

use crate::material::Material;
use rey_math::{Aabb, DegenerateVectorError, LineSegment, NormalizedVector, Point3};
use std::fmt;

/// Trait for surfaces that can be hit by rays.
pub trait Geometry: Send + Sync + fmt::Debug {
    /// Unit normal at a point on the surface.
    ///
    /// The orientation (inward or outward) is not significant; shading only
    /// compares signs. Fails when the point gives no defined direction, such
    /// as the centre of a sphere or a point on a tube axis.
    fn normal(&self, point: Point3) -> Result<NormalizedVector, DegenerateVectorError>;

    /// Crossing points of `line` with this surface, in no particular order.
    fn intersect(&self, line: &LineSegment) -> Vec<Point3>;

    fn material(&self) -> &Material;

    /// Axis-aligned bounds, or `None` for infinite surfaces.
    fn bounds(&self) -> Option<Aabb>;
}

/// A crossing point tagged with the geometry it lies on.
#[derive(Clone, Copy)]
pub struct Intersection<'g> {
    pub geometry: &'g dyn Geometry,
    pub point: Point3,
}

impl<'g> Intersection<'g> {
    pub fn new(geometry: &'g dyn Geometry, point: Point3) -> Self {
        Self { geometry, point }
    }

    pub fn normal(&self) -> Result<NormalizedVector, DegenerateVectorError> {
        self.geometry.normal(self.point)
    }

    pub fn material(&self) -> &'g Material {
        self.geometry.material()
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("point", &self.point)
            .finish_non_exhaustive()
    }
}

/// The intersection nearest to `source`. Ties keep the earliest entry.
pub fn closest<'g>(
    source: Point3,
    intersections: impl IntoIterator<Item = Intersection<'g>>,
) -> Option<Intersection<'g>> {
    intersections
        .into_iter()
        .fold(None, |best: Option<(f64, Intersection<'g>)>, hit| {
            let d = source.distance_squared(hit.point);
            match best {
                Some((best_d, _)) if best_d <= d => best,
                _ => Some((d, hit)),
            }
        })
        .map(|(_, hit)| hit)
}

#[cfg(test)]
pub(crate) mod test_util {
    use rey_math::{approx_eq, Point3};

    /// Order-insensitive comparison of point sets within tolerance.
    pub fn assert_points(actual: &[Point3], expected: &[Point3]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
        for e in expected {
            assert!(
                actual.iter().any(|a| approx_eq(*a, *e)),
                "missing {:?} in {:?}",
                e,
                actual
            );
        }
    }
}
