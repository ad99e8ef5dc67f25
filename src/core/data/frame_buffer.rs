use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_coordinate::PixelCoordinate;
use crate::core::data::rgba::Rgba;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn frame_size_to_buffer_size(frame_size: FrameSize) -> usize {
    frame_size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    PixelOutsideBounds {
        pixel: PixelCoordinate,
        frame_size: FrameSize,
    },
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, frame_size } => {
                write!(
                    f,
                    "pixel at col:{}, row:{} outside of {}x{} frame",
                    pixel.col,
                    pixel.row,
                    frame_size.width(),
                    frame_size.height()
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "frame buffer expected {} values but got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Row-major RGBA pixel store handed whole to the display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    frame_size: FrameSize,
    data: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(frame_size: FrameSize) -> Self {
        Self {
            frame_size,
            data: vec![0; frame_size_to_buffer_size(frame_size)],
        }
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Stores one RGBA quadruple. Coordinates outside the frame are rejected.
    pub fn write(
        &mut self,
        col: u32,
        row: u32,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    ) -> Result<(), FrameBufferError> {
        let index = self.index_of(PixelCoordinate { col, row })?;

        self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b, a]);

        Ok(())
    }

    pub fn write_pixel(&mut self, pixel: PixelCoordinate, colour: Rgba) -> Result<(), FrameBufferError> {
        self.write(pixel.col, pixel.row, colour.r, colour.g, colour.b, colour.a)
    }

    #[must_use]
    pub fn pixel(&self, col: u32, row: u32) -> Option<Rgba> {
        let index = self.index_of(PixelCoordinate { col, row }).ok()?;

        Some(Rgba {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
            a: self.data[index + 3],
        })
    }

    fn index_of(&self, pixel: PixelCoordinate) -> Result<usize, FrameBufferError> {
        if !self.frame_size.contains(pixel) {
            return Err(FrameBufferError::PixelOutsideBounds {
                pixel,
                frame_size: self.frame_size,
            });
        }

        let width = self.frame_size.width() as usize;

        Ok((pixel.row as usize * width + pixel.col as usize) * BYTES_PER_PIXEL)
    }
}
