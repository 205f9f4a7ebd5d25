use crate::{DVec3, Interval, LineSegment};

/// Axis-aligned bounding box used to prune scene intersection tests.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create an AABB from two corner points.
    pub fn from_points(a: DVec3, b: DVec3) -> Self {
        let mut aabb = Self {
            x: Interval::new(a.x.min(b.x), a.x.max(b.x)),
            y: Interval::new(a.y.min(b.y), a.y.max(b.y)),
            z: Interval::new(a.z.min(b.z), a.z.max(b.z)),
        };
        aabb.pad_to_minimums();
        aabb
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn enclosing(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (lo, hi) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self::from_points(lo, hi))
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Grow every axis by `delta` (half on each side).
    pub fn expand(&self, delta: f64) -> Self {
        Self {
            x: self.x.expand(delta),
            y: self.y.expand(delta),
            z: self.z.expand(delta),
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Test whether a segment passes through this box anywhere along its
    /// length.
    ///
    /// Uses the slab method. A segment that starts inside the box always hits.
    pub fn hit(&self, segment: &LineSegment) -> bool {
        let origin = segment.start;
        let direction = segment.direction.get();
        let mut span = Interval::new(0.0, segment.length());

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let inv = 1.0 / direction[axis];
            let mut t0 = (slab.min - origin[axis]) * inv;
            let mut t1 = (slab.max - origin[axis]) * inv;
            if inv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            span.min = t0.max(span.min);
            span.max = t1.min(span.max);
            if span.max <= span.min {
                return false;
            }
        }

        true
    }

    /// Pad intervals to avoid zero-width AABBs (flat polygons, axis-aligned
    /// triangles).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NormalizedVector;

    fn unit_box() -> Aabb {
        Aabb::from_points(DVec3::splat(-1.0), DVec3::splat(1.0))
    }

    #[test]
    fn test_aabb_enclosing() {
        let aabb = Aabb::enclosing(&[
            DVec3::new(1.0, -2.0, 0.0),
            DVec3::new(-1.0, 4.0, 3.0),
            DVec3::new(0.0, 0.0, -3.0),
        ])
        .unwrap();

        assert_eq!(aabb.x, Interval::new(-1.0, 1.0));
        assert_eq!(aabb.y, Interval::new(-2.0, 4.0));
        assert_eq!(aabb.z, Interval::new(-3.0, 3.0));
        assert!(Aabb::enclosing(&[]).is_none());
    }

    #[test]
    fn test_flat_box_is_padded() {
        let aabb = Aabb::from_points(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0));
        assert!(aabb.z.size() > 0.0);
    }

    #[test]
    fn test_aabb_surrounding() {
        let box1 = Aabb::from_points(DVec3::ZERO, DVec3::splat(5.0));
        let box2 = Aabb::from_points(DVec3::splat(3.0), DVec3::splat(10.0));
        let surrounding = Aabb::surrounding(&box1, &box2);

        assert_eq!(surrounding.x.min, 0.0);
        assert_eq!(surrounding.x.max, 10.0);
        assert_eq!(Aabb::surrounding(&Aabb::EMPTY, &box1), box1);
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = unit_box();

        // Pointing at center
        let toward = LineSegment::unbounded(DVec3::new(0.0, 0.0, -5.0), NormalizedVector::Z);
        assert!(aabb.hit(&toward));

        // Pointing away
        let away = LineSegment::unbounded(DVec3::new(0.0, 0.0, -5.0), -NormalizedVector::Z);
        assert!(!aabb.hit(&away));

        // Missing the box
        let beside = LineSegment::unbounded(DVec3::new(10.0, 0.0, 0.0), NormalizedVector::Z);
        assert!(!aabb.hit(&beside));

        // Starting inside
        let inside = LineSegment::unbounded(DVec3::ZERO, NormalizedVector::X);
        assert!(aabb.hit(&inside));
    }

    #[test]
    fn test_aabb_hit_respects_segment_length() {
        let aabb = unit_box();
        let short = LineSegment::new(DVec3::new(0.0, 0.0, -5.0), NormalizedVector::Z, 9.0);
        assert!(!aabb.hit(&short));

        let long = LineSegment::new(DVec3::new(0.0, 0.0, -5.0), NormalizedVector::Z, 25.0);
        assert!(aabb.hit(&long));
    }
}
