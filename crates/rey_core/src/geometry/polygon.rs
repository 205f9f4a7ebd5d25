//! Convex planar polygons and triangles.

use super::{Geometry, Plane};
use crate::error::{GeometryResult, InvalidGeometryError};
use crate::material::Material;
use rey_math::{
    compare, Aabb, DegenerateVectorError, LineSegment, NonZeroVector, NormalizedVector, Point3,
};
use std::cmp::Ordering;
use std::f64::consts::TAU;

/// A convex, planar polygon.
///
/// Vertices that sit on a straight run between their neighbours are dropped
/// at construction, so every stored vertex is a real corner.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Polygon {
    /// Build a polygon from its vertices in boundary order.
    ///
    /// Walking the boundary, the exterior angles of a convex planar polygon
    /// add up to exactly one full turn. Anything else (a reflex corner, a
    /// self-crossing outline, a vertex lifted off the plane) changes the sum.
    pub fn new(material: Material, vertices: &[Point3]) -> GeometryResult<Self> {
        let count = vertices.len();
        if count < 3 {
            return Err(InvalidGeometryError::TooFewVertices(count));
        }

        let mut corners = Vec::with_capacity(count);
        let mut turning = 0.0;
        for i in 0..count {
            let (j, k) = ((i + 1) % count, (i + 2) % count);
            let incoming = NonZeroVector::between(vertices[i], vertices[j])
                .map_err(|_| InvalidGeometryError::RepeatedVertex(j))?;
            let outgoing = NonZeroVector::between(vertices[j], vertices[k])
                .map_err(|_| InvalidGeometryError::RepeatedVertex(k))?;

            let angle = incoming.angle(outgoing);
            if compare::is_zero(angle) {
                continue;
            }
            turning += angle;
            corners.push(vertices[j]);
        }

        if corners.len() < 3 {
            return Err(InvalidGeometryError::TooFewVertices(corners.len()));
        }
        if compare::neq(turning, TAU) {
            return Err(InvalidGeometryError::NotConvexPlanar(turning));
        }

        let plane = Plane::from_points(material, corners[0], corners[1], corners[2])?;
        Ok(Self {
            vertices: corners,
            plane,
        })
    }

    /// The significant vertices, in boundary order.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    fn edges(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(a, b)| (*a, *b))
    }
}

impl Geometry for Polygon {
    fn normal(&self, point: Point3) -> Result<NormalizedVector, DegenerateVectorError> {
        self.plane.normal(point)
    }

    /// Hit the supporting plane, then keep the point only if it lies on the
    /// same side of every edge as seen from the segment start. Edge and
    /// corner hits count as misses.
    fn intersect(&self, line: &LineSegment) -> Vec<Point3> {
        let hits = self.plane.intersect(line);
        if hits.is_empty() {
            return hits;
        }

        let direction = line.direction.get();
        let mut side = None;
        for (from, to) in self.edges() {
            let edge_normal = (from - line.start).cross(to - from);
            let sign = compare::compare(edge_normal.dot(direction), 0.0);
            if sign == Ordering::Equal {
                return Vec::new();
            }
            match side {
                None => side = Some(sign),
                Some(s) if s != sign => return Vec::new(),
                Some(_) => {}
            }
        }
        hits
    }

    fn material(&self) -> &Material {
        self.plane.material()
    }

    fn bounds(&self) -> Option<Aabb> {
        Aabb::enclosing(&self.vertices)
    }
}

/// A three-vertex polygon.
#[derive(Debug, Clone)]
pub struct Triangle(Polygon);

impl Triangle {
    pub fn new(material: Material, a: Point3, b: Point3, c: Point3) -> GeometryResult<Self> {
        Polygon::new(material, &[a, b, c]).map(Self)
    }

    pub fn vertices(&self) -> &[Point3] {
        self.0.vertices()
    }
}

impl Geometry for Triangle {
    fn normal(&self, point: Point3) -> Result<NormalizedVector, DegenerateVectorError> {
        self.0.normal(point)
    }

    fn intersect(&self, line: &LineSegment) -> Vec<Point3> {
        self.0.intersect(line)
    }

    fn material(&self) -> &Material {
        self.0.material()
    }

    fn bounds(&self) -> Option<Aabb> {
        self.0.bounds()
    }
}
