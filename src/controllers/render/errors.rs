use crate::core::actions::write_frame_buffer::write_frame_buffer::WriteFrameBufferError;
use crate::core::data::frame_buffer::FrameBufferError;
use crate::core::data::frame_size::FrameSize;
use crate::core::fractals::mandelbrot::colour_maps::grayscale::GrayscaleError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    SizeMismatch {
        viewport: FrameSize,
        frame_buffer: FrameSize,
    },
    Algorithm(MandelbrotError),
    ColourMap(GrayscaleError),
    FrameBuffer(FrameBufferError),
    Present(Box<dyn Error>),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                viewport,
                frame_buffer,
            } => write!(
                f,
                "viewport is {}x{} but frame buffer is {}x{}",
                viewport.width(),
                viewport.height(),
                frame_buffer.width(),
                frame_buffer.height()
            ),
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
            Self::Present(err) => write!(f, "display surface error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SizeMismatch { .. } => None,
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::FrameBuffer(err) => Some(err),
            Self::Present(err) => Some(err.as_ref()),
        }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<WriteFrameBufferError<GrayscaleError>> for RenderError {
    fn from(err: WriteFrameBufferError<GrayscaleError>) -> Self {
        match err {
            WriteFrameBufferError::ColourMap(err) => Self::ColourMap(err),
            WriteFrameBufferError::FrameBuffer(err) => Self::FrameBuffer(err),
        }
    }
}
