//! Multi-threaded render loop.
//!
//! A fixed pool of workers pulls pixels from one [`PixelQueue`] until it is
//! empty. Pixels are independent, so the only shared state is the queue
//! cursor, the progress counter and the sink.

use crate::progress::Progress;
use crate::queue::PixelQueue;
use crate::sink::{PixelSink, SinkError};
use crate::tracer::{RayTracer, TraceLimits};
use rey_core::{Camera, ConfigurationError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to start render threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Render cancelled after {completed} of {total} pixels")]
    Cancelled { completed: usize, total: usize },

    #[error("Pixel sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Worker threads
    pub threads: usize,
    /// Rays per pixel side (n gives an n×n grid)
    pub antialiasing: u32,
    pub limits: TraceLimits,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            threads: 3,
            antialiasing: 1,
            limits: TraceLimits::default(),
        }
    }
}

impl RenderSettings {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_antialiasing(mut self, samples_per_side: u32) -> Self {
        self.antialiasing = samples_per_side;
        self
    }

    pub fn with_max_recursion(mut self, depth: u32) -> Self {
        self.limits.max_recursion = depth;
        self
    }

    pub fn with_min_effect(mut self, min_effect: f64) -> Self {
        self.limits.min_effect = min_effect;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.threads == 0 {
            return Err(ConfigurationError::InvalidThreadCount(self.threads));
        }
        if self.antialiasing == 0 {
            return Err(ConfigurationError::InvalidAntialiasing(self.antialiasing));
        }
        self.limits.validate()
    }
}

/// Cooperative stop flag shared between a renderer and its caller.
///
/// Workers check it before claiming each pixel, so a cancelled render stops
/// after the pixels already in flight.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    pub pixels: usize,
    pub threads: usize,
    pub elapsed: Duration,
}

/// Drives a tracer over every pixel of a camera.
pub struct Renderer<'a, T: RayTracer> {
    camera: &'a Camera,
    tracer: &'a T,
    settings: RenderSettings,
    cancel: CancelToken,
}

impl<'a, T: RayTracer> Renderer<'a, T> {
    pub fn new(camera: &'a Camera, tracer: &'a T, settings: RenderSettings) -> Self {
        Self {
            camera,
            tracer,
            settings,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that stops this renderer when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render every pixel into `sink`, then commit it.
    ///
    /// Blocks until all workers have finished. Each pixel is delivered
    /// exactly once; the order across threads is unspecified.
    pub fn render(&self, sink: &dyn PixelSink) -> RenderResult<RenderStats> {
        self.settings.validate()?;

        let total = self.camera.pixel_count();
        let threads = self.settings.threads;
        log::info!(
            "Rendering {} ({} pixels) on {} threads, {}x{} rays per pixel, recursion depth {}",
            self.camera.resolution(),
            total,
            threads,
            self.settings.antialiasing,
            self.settings.antialiasing,
            self.settings.limits.max_recursion
        );

        let start = Instant::now();
        let queue = PixelQueue::new(self.camera, self.settings.antialiasing);
        let progress = Progress::new(total);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("rey-render-{index}"))
            .build()?;
        pool.scope(|scope| {
            for _ in 0..threads {
                scope.spawn(|_| self.work(&queue, sink, &progress));
            }
        });

        let completed = progress.completed();
        if completed < total && self.cancel.is_cancelled() {
            log::warn!("Render cancelled after {}/{} pixels", completed, total);
            return Err(RenderError::Cancelled { completed, total });
        }

        sink.commit()?;

        let stats = RenderStats {
            pixels: completed,
            threads,
            elapsed: start.elapsed(),
        };
        log::info!("Rendered {} pixels in {:.2?}", stats.pixels, stats.elapsed);
        Ok(stats)
    }

    fn work(&self, queue: &PixelQueue<'_>, sink: &dyn PixelSink, progress: &Progress) {
        while !self.cancel.is_cancelled() {
            let Some(pixel) = queue.next() else {
                break;
            };
            let colour = self.tracer.trace_pixel(&pixel.rays, &self.settings.limits);
            sink.set_pixel(pixel.row, pixel.col, colour);
            progress.complete_one();
        }
    }
}

/// Render `camera`'s view with `tracer` into `sink`.
pub fn render<T: RayTracer>(
    camera: &Camera,
    tracer: &T,
    sink: &dyn PixelSink,
    settings: &RenderSettings,
) -> RenderResult<RenderStats> {
    Renderer::new(camera, tracer, settings.clone()).render(sink)
}
