use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_coordinate::PixelCoordinate;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterations,
    PixelOutsideFrame {
        pixel: PixelCoordinate,
        frame_size: FrameSize,
    },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::PixelOutsideFrame { pixel, frame_size } => {
                write!(
                    f,
                    "pixel (col: {}, row: {}) is outside the {}x{} frame",
                    pixel.col,
                    pixel.row,
                    frame_size.width(),
                    frame_size.height()
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
