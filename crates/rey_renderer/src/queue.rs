//! Shared pixel cursor.

use rey_core::{Camera, Pixel};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out every pixel of a camera exactly once, in row-major order,
/// to any number of threads.
#[derive(Debug)]
pub struct PixelQueue<'a> {
    camera: &'a Camera,
    samples_per_side: u32,
    next: AtomicUsize,
}

impl<'a> PixelQueue<'a> {
    pub fn new(camera: &'a Camera, samples_per_side: u32) -> Self {
        Self {
            camera,
            samples_per_side,
            next: AtomicUsize::new(0),
        }
    }

    /// Total number of pixels in the queue.
    pub fn len(&self) -> usize {
        self.camera.pixel_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Claim the next pixel, or `None` once all have been handed out.
    pub fn next(&self) -> Option<Pixel> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        self.camera.pixel_at(index, self.samples_per_side)
    }

    /// Number of pixels claimed so far.
    pub fn claimed(&self) -> usize {
        self.next.load(Ordering::Relaxed).min(self.len())
    }
}
