use crate::core::actions::write_frame_buffer::ports::colour_map::ColourMap;
use crate::core::data::rgba::Rgba;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrayscaleError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for GrayscaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for GrayscaleError {}

/// Writes the escape time straight into the colour channels, so points in
/// the set (255 iterations by default) come out white. Counts above 255
/// saturate.
#[derive(Debug)]
pub struct MandelbrotGrayscale {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotGrayscale {
    type Failure = GrayscaleError;

    fn map(&self, iterations: u32) -> Result<Rgba, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(GrayscaleError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        let intensity = u8::try_from(iterations).unwrap_or(u8::MAX);

        Ok(Rgba::grey(intensity))
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
