use crate::core::data::frame_buffer::BYTES_PER_PIXEL;
use crate::core::data::pixel_coordinate::PixelCoordinate;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameSizeError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for FrameSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "frame size {}x{} does not fit in memory", width, height)
            }
        }
    }
}

impl Error for FrameSizeError {}

/// Pixel dimensions of the frame, fixed for the lifetime of a session.
///
/// The RGBA byte length of a frame of this size always fits in `usize`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameSizeError> {
        if width == 0 || height == 0 {
            return Err(FrameSizeError::InvalidSize { width, height });
        }

        let byte_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL));

        if byte_len.is_none() {
            return Err(FrameSizeError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains(&self, pixel: PixelCoordinate) -> bool {
        pixel.col < self.width && pixel.row < self.height
    }

    /// Every pixel of the frame in row-major order.
    pub fn pixels(self) -> impl Iterator<Item = PixelCoordinate> {
        let width = self.width;

        (0..self.height).flat_map(move |row| (0..width).map(move |col| PixelCoordinate { col, row }))
    }
}
