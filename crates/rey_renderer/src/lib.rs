//! rey renderer
//!
//! Turns a [`Scene`](rey_core::Scene) into pixels: a [`RayTracer`] shades
//! the rays of each pixel and a pool of worker threads pulls pixels from a
//! shared [`PixelQueue`] until the image is done, handing every result to
//! a [`PixelSink`].

mod progress;
mod queue;
mod renderer;
mod sink;
mod tracer;

pub use progress::Progress;
pub use queue::PixelQueue;
pub use renderer::{
    render, CancelToken, RenderError, RenderResult, RenderSettings, RenderStats, Renderer,
};
pub use sink::{ImageBuffer, ImageFileSink, PixelSink, SinkError};
pub use tracer::{AmbientTracer, PhongTracer, RayTracer, TraceLimits};
