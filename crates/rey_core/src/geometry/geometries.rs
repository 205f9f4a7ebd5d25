//! Flat collection of geometries.

use super::{Geometry, Intersection};
use rey_math::{Aabb, LineSegment};

/// Pads the aggregate box so hits lying exactly on a child's bounds are
/// never pruned.
const BOUNDS_PADDING: f64 = 1e-4;

/// A list of geometries intersected as one.
///
/// The union of the children's bounds is tracked as they are added. While
/// every child is finite, a segment that misses that box skips the scan
/// entirely; a single infinite child (plane, tube) disables the shortcut.
#[derive(Debug)]
pub struct Geometries {
    objects: Vec<Box<dyn Geometry>>,
    bbox: Aabb,
    unbounded: bool,
}

impl Geometries {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: Aabb::EMPTY,
            unbounded: false,
        }
    }

    /// Add a geometry to the list.
    pub fn add(&mut self, object: impl Geometry + 'static) {
        self.push(Box::new(object));
    }

    pub fn push(&mut self, object: Box<dyn Geometry>) {
        match object.bounds() {
            Some(bounds) => self.bbox = Aabb::surrounding(&self.bbox, &bounds),
            None => self.unbounded = true,
        }
        self.objects.push(object);
    }

    /// Move every geometry of `other` into this list.
    pub fn extend(&mut self, other: Geometries) {
        for object in other.objects {
            self.push(object);
        }
    }

    /// Get the number of geometries.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Bounds of all children, or `None` when any child is infinite or the
    /// list is empty.
    pub fn bounds(&self) -> Option<Aabb> {
        (!self.unbounded && !self.is_empty()).then_some(self.bbox)
    }

    /// Every crossing of `line` with every child, in no particular order.
    pub fn intersect(&self, line: &LineSegment) -> Vec<Intersection<'_>> {
        if let Some(bbox) = self.bounds() {
            if !bbox.expand(BOUNDS_PADDING).hit(line) {
                return Vec::new();
            }
        }

        self.objects
            .iter()
            .flat_map(|object| {
                let geometry: &dyn Geometry = object.as_ref();
                geometry
                    .intersect(line)
                    .into_iter()
                    .map(move |point| Intersection::new(geometry, point))
            })
            .collect()
    }
}

impl Default for Geometries {
    fn default() -> Self {
        Self::new()
    }
}
