use crate::compare;
use crate::vector::{DegenerateVectorError, NormalizedVector, Point3};

/// A half-line from `source` along a unit `direction`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub source: Point3,
    pub direction: NormalizedVector,
}

impl Ray {
    /// Create a new ray.
    pub fn new(source: Point3, direction: NormalizedVector) -> Self {
        Self { source, direction }
    }

    /// Ray from `source` aimed at `target`.
    pub fn through(source: Point3, target: Point3) -> Result<Self, DegenerateVectorError> {
        Ok(Self::new(source, NormalizedVector::between(source, target)?))
    }

    /// Get the point along the ray at distance t.
    ///
    /// Returns: source + t * direction
    pub fn at(&self, t: f64) -> Point3 {
        self.source + self.direction.get() * t
    }

    /// The same ray as an unbounded [`LineSegment`].
    pub fn segment(&self) -> LineSegment {
        LineSegment::unbounded(self.source, self.direction)
    }
}

/// A ray limited to a maximum travel distance.
///
/// The bound is stored squared; `f64::INFINITY` means unbounded. Shadow rays
/// towards point lights are bounded by the distance to the light, rays towards
/// directional lights and camera rays are not.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Point3,
    pub direction: NormalizedVector,
    pub square_length: f64,
}

impl LineSegment {
    pub fn new(start: Point3, direction: NormalizedVector, square_length: f64) -> Self {
        Self {
            start,
            direction,
            square_length,
        }
    }

    pub fn unbounded(start: Point3, direction: NormalizedVector) -> Self {
        Self::new(start, direction, f64::INFINITY)
    }

    /// Segment covering exactly the span from `start` to `end`.
    pub fn between(start: Point3, end: Point3) -> Result<Self, DegenerateVectorError> {
        let direction = NormalizedVector::between(start, end)?;
        Ok(Self::new(start, direction, start.distance_squared(end)))
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.start + self.direction.get() * t
    }

    /// True when `distance` lies strictly after the start (beyond tolerance)
    /// and strictly before the end.
    pub fn covers(&self, distance: f64) -> bool {
        compare::gt(distance, 0.0) && distance * distance < self.square_length
    }

    /// The point at `distance` along the segment, if the segment covers it.
    pub fn travel(&self, distance: f64) -> Option<Point3> {
        self.covers(distance).then(|| self.at(distance))
    }

    /// Length of the segment (infinite when unbounded).
    pub fn length(&self) -> f64 {
        self.square_length.sqrt()
    }
}

impl From<Ray> for LineSegment {
    fn from(ray: Ray) -> Self {
        ray.segment()
    }
}

impl From<&Ray> for LineSegment {
    fn from(ray: &Ray) -> Self {
        ray.segment()
    }
}
