//! Pixel destinations.

use rey_core::{Camera, Colour};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{count} pixel writes fell outside the {width}x{height} image")]
    OutOfBounds { count: usize, width: u32, height: u32 },
}

/// Receives finished pixels from render workers.
///
/// `set_pixel` is called concurrently from several threads, at most once
/// per pixel. `commit` runs once after every pixel has been delivered.
pub trait PixelSink: Send + Sync {
    fn set_pixel(&self, row: u32, col: u32, colour: Colour);

    fn commit(&self) -> Result<(), SinkError>;
}

/// In-memory image, black until written.
#[derive(Debug)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Mutex<Vec<Colour>>,
    rejected: AtomicUsize,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: Mutex::new(vec![Colour::BLACK; width as usize * height as usize]),
            rejected: AtomicUsize::new(0),
        }
    }

    /// A buffer matching the camera's resolution.
    pub fn for_camera(camera: &Camera) -> Self {
        let resolution = camera.resolution();
        Self::new(resolution.columns, resolution.rows)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Option<Colour> {
        let index = self.index(row, col)?;
        Some(self.lock()[index])
    }

    /// Number of writes that were outside the image.
    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Row-major 8-bit RGB bytes, clamped.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.lock().iter().flat_map(|colour| colour.to_rgb8()).collect()
    }

    /// Encode the buffer to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SinkError> {
        image::save_buffer(
            path.as_ref(),
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }

    fn index(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.height && col < self.width)
            .then(|| row as usize * self.width as usize + col as usize)
    }

    // A worker that panicked mid-write leaves at most one pixel unset.
    fn lock(&self) -> MutexGuard<'_, Vec<Colour>> {
        self.pixels.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), SinkError> {
        match self.rejected() {
            0 => Ok(()),
            count => Err(SinkError::OutOfBounds {
                count,
                width: self.width,
                height: self.height,
            }),
        }
    }
}

impl PixelSink for ImageBuffer {
    fn set_pixel(&self, row: u32, col: u32, colour: Colour) {
        match self.index(row, col) {
            Some(index) => self.lock()[index] = colour,
            None => {
                log::warn!(
                    "Pixel ({}, {}) is outside the {}x{} image",
                    row,
                    col,
                    self.width,
                    self.height
                );
                self.rejected.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn commit(&self) -> Result<(), SinkError> {
        self.check()
    }
}

/// Image buffer written to disk on commit.
#[derive(Debug)]
pub struct ImageFileSink {
    buffer: ImageBuffer,
    path: PathBuf,
}

impl ImageFileSink {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            buffer: ImageBuffer::new(width, height),
            path: path.into(),
        }
    }

    pub fn for_camera(path: impl Into<PathBuf>, camera: &Camera) -> Self {
        Self {
            buffer: ImageBuffer::for_camera(camera),
            path: path.into(),
        }
    }

    pub fn buffer(&self) -> &ImageBuffer {
        &self.buffer
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PixelSink for ImageFileSink {
    fn set_pixel(&self, row: u32, col: u32, colour: Colour) {
        self.buffer.set_pixel(row, col, colour);
    }

    fn commit(&self) -> Result<(), SinkError> {
        self.buffer.check()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.buffer.save(&self.path)?;
        log::info!(
            "Saved {}x{} image to {}",
            self.buffer.width,
            self.buffer.height,
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("rey-sink-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_buffer_starts_black() {
        let buffer = ImageBuffer::new(3, 2);
        assert_eq!(buffer.get(1, 2), Some(Colour::BLACK));
        assert_eq!(buffer.get(2, 0), None);
        assert_eq!(buffer.to_rgb8().len(), 3 * 2 * 3);
    }

    #[test]
    fn test_set_and_convert() {
        let buffer = ImageBuffer::new(2, 2);
        buffer.set_pixel(1, 0, Colour::new(1.0, 0.5, 2.0));
        assert_eq!(buffer.get(1, 0), Some(Colour::new(1.0, 0.5, 2.0)));

        let bytes = buffer.to_rgb8();
        // Row 1, column 0 starts at byte 6; out-of-range channels clamp.
        assert_eq!(&bytes[6..9], &[255, 128, 255]);
        assert!(buffer.commit().is_ok());
    }

    #[test]
    fn test_out_of_range_writes_fail_commit() {
        let buffer = ImageBuffer::new(2, 2);
        buffer.set_pixel(0, 2, Colour::WHITE);
        buffer.set_pixel(5, 5, Colour::WHITE);
        assert_eq!(buffer.rejected(), 2);
        assert!(matches!(
            buffer.commit(),
            Err(SinkError::OutOfBounds { count: 2, .. })
        ));
    }

    #[test]
    fn test_file_sink_writes_png() {
        let path = temp_path("checker.png");
        let sink = ImageFileSink::new(&path, 4, 3);
        for row in 0..3 {
            for col in 0..4 {
                let colour = if (row + col) % 2 == 0 { Colour::WHITE } else { Colour::BLACK };
                sink.set_pixel(row, col, colour);
            }
        }
        sink.commit().unwrap();

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [0, 0, 0]);
        std::fs::remove_file(&path).ok();
    }
}
